use clap::Parser;
use std::path::PathBuf;

use crate::config;

#[derive(Parser, Debug)]
#[clap(
    name = "dbprobe",
    version = "0.1.0",
    about = "Probes a MySQL-protocol database server with a list of candidate usernames"
)]
pub struct Args {
    /// Database server host
    #[clap(long, env = "DBPROBE_HOST", default_value = config::DEFAULT_HOST)]
    pub host: String,

    /// Database server port
    #[clap(short, long, env = "DBPROBE_PORT", default_value_t = config::DEFAULT_PORT)]
    pub port: u16,

    /// Database (schema) name to connect to
    #[clap(short, long, env = "DBPROBE_DATABASE", default_value = config::DEFAULT_DATABASE)]
    pub database: String,

    /// Password tried with every candidate username
    #[clap(long, env = "DBPROBE_PASSWORD", default_value = "", hide_env_values = true)]
    pub password: String,

    /// Connection timeout in seconds
    #[clap(short, long, default_value_t = config::DEFAULT_CONNECT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Candidate username, tried in the order given (repeatable; default: root, admin)
    #[clap(short, long = "user")]
    pub users: Vec<String>,

    /// File with one candidate username per line
    #[clap(long)]
    pub user_file: Option<PathBuf>,

    /// Verbose output
    #[clap(short, long)]
    pub verbose: bool,

    /// Silent mode (no banner)
    #[clap(short, long)]
    pub silent: bool,

    /// Log file
    #[clap(long)]
    pub log_file: Option<PathBuf>,
}
