// src/probe/mod.rs
pub mod mysql;

pub use mysql::MysqlConnector;

use std::io::Write;

use log::debug;
use thiserror::Error;

use crate::config::TargetConfig;

/// How many table names are listed after a successful attempt.
const TABLE_SAMPLE_LIMIT: usize = 5;

/// What a successful attempt learned about the server.
#[derive(Debug, Clone)]
pub struct ProbeSuccess {
    pub server_version: String,
    pub tables: Vec<String>,
}

/// A failed attempt. `Driver` carries an error the server itself reported
/// (bad credentials, unknown database); `Unexpected` is anything that went
/// wrong on the way there (refused connection, timeout, DNS).
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("driver error: {0}")]
    Driver(String),

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

/// One authentication attempt against the target.
pub trait Connector {
    fn attempt(&mut self, username: &str) -> Result<ProbeSuccess, ProbeError>;
}

/// Runs the probe loop: one attempt per candidate, in order, stopping after
/// the first success. Attempt failures never abort the loop; only transcript
/// write errors are returned.
pub fn run<C, W>(
    config: &TargetConfig,
    candidates: &[String],
    connector: &mut C,
    out: &mut W,
) -> std::io::Result<()>
where
    C: Connector,
    W: Write,
{
    writeln!(out, "=== database connection probe ===")?;
    writeln!(out)?;
    writeln!(out, "target: {}", config.endpoint())?;
    writeln!(out)?;

    for username in candidates {
        writeln!(out, "testing user: {}", username)?;

        match connector.attempt(username) {
            Ok(success) => {
                debug!("user {} authenticated", username);
                writeln!(
                    out,
                    "  ✅ connected, server version: {}",
                    success.server_version
                )?;
                writeln!(out, "  📊 tables in database: {}", success.tables.len())?;
                if !success.tables.is_empty() {
                    let sample: Vec<&str> = success
                        .tables
                        .iter()
                        .take(TABLE_SAMPLE_LIMIT)
                        .map(String::as_str)
                        .collect();
                    writeln!(out, "     table list: {}", sample.join(", "))?;
                }
                writeln!(out)?;
                break;
            }
            Err(err) => {
                debug!("user {} failed: {}", username, err);
                writeln!(out, "  ❌ {}", err)?;
                writeln!(out)?;
            }
        }
    }

    writeln!(out, "=== probe complete ===")?;

    Ok(())
}
