// src/probe/mysql.rs
use log::debug;
use mysql::prelude::Queryable;
use mysql::{Conn, Error, OptsBuilder};

use crate::config::TargetConfig;
use crate::probe::{Connector, ProbeError, ProbeSuccess};

const LIVENESS_QUERY: &str = "SELECT 1, VERSION()";
const TABLE_LIST_QUERY: &str = "SHOW TABLES";

/// Opens one fresh connection per attempt. The handle is owned by the
/// attempt and dropped (closing the connection) before it returns, on
/// success and failure alike.
pub struct MysqlConnector {
    config: TargetConfig,
}

impl MysqlConnector {
    pub fn new(config: TargetConfig) -> Self {
        Self { config }
    }

    fn opts(&self, username: &str) -> OptsBuilder {
        OptsBuilder::new()
            .ip_or_hostname(Some(self.config.host.clone()))
            .tcp_port(self.config.port)
            .user(Some(username.to_string()))
            .pass(Some(self.config.password.clone()))
            .db_name(Some(self.config.database.clone()))
            .tcp_connect_timeout(Some(self.config.connect_timeout))
    }
}

impl Connector for MysqlConnector {
    fn attempt(&mut self, username: &str) -> Result<ProbeSuccess, ProbeError> {
        debug!(
            "connecting to {} as {}",
            self.config.endpoint(),
            username
        );

        let mut conn = Conn::new(self.opts(username)).map_err(classify)?;

        let server_version = conn
            .query_first::<(i32, String), _>(LIVENESS_QUERY)
            .map_err(classify)?
            .map(|(_, version)| version)
            .ok_or_else(|| {
                ProbeError::Unexpected("liveness query returned no rows".to_string())
            })?;

        let tables = conn.query::<String, _>(TABLE_LIST_QUERY).map_err(classify)?;

        Ok(ProbeSuccess {
            server_version,
            tables,
        })
    }
}

/// Maps the client library's error domain onto the probe's two failure
/// kinds: server-reported errors keep their driver identity, everything
/// else is unexpected.
fn classify(err: Error) -> ProbeError {
    match err {
        Error::MySqlError(server) => ProbeError::Driver(server.to_string()),
        other => ProbeError::Unexpected(other.to_string()),
    }
}
