use std::fmt;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 2881;
pub const DEFAULT_DATABASE: &str = "chatbot_memory";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Usernames tried when none are supplied on the command line.
pub fn default_users() -> Vec<String> {
    vec!["root".to_string(), "admin".to_string()]
}

/// Connection parameters for the probe target. Built once at startup and
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct TargetConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub password: String,
    pub connect_timeout: Duration,
}

impl TargetConfig {
    /// The resolved endpoint as `host:port/database`.
    pub fn endpoint(&self) -> String {
        format!("{}:{}/{}", self.host, self.port, self.database)
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database: DEFAULT_DATABASE.to_string(),
            password: String::new(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

impl fmt::Display for TargetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.endpoint())
    }
}
