// src/main.rs
use std::io;
use std::time::Duration;

use clap::Parser;
use log::{error, info};

use dbprobe::cli::Args;
use dbprobe::common::{banner, logger, utils};
use dbprobe::config::{self, TargetConfig};
use dbprobe::probe::{self, MysqlConnector};

fn main() {
    let args = Args::parse();

    if !args.silent {
        banner::show();
    }

    if let Err(e) = logger::init(args.verbose, args.silent, &args.log_file) {
        eprintln!("failed to initialise logging: {}", e);
    }

    // Candidate order: --user flags first, then the user file, then the
    // built-in defaults if nothing was supplied.
    let mut candidates = args.users.clone();
    if let Some(path) = &args.user_file {
        match utils::read_lines_from_file(path) {
            Ok(lines) => candidates.extend(lines),
            Err(e) => error!("could not read user file {}: {}", path.display(), e),
        }
    }
    if candidates.is_empty() {
        candidates = config::default_users();
    }

    let config = TargetConfig {
        host: args.host,
        port: args.port,
        database: args.database,
        password: args.password,
        connect_timeout: Duration::from_secs(args.timeout),
    };

    info!(
        "probing {} with {} candidate user(s)",
        config.endpoint(),
        candidates.len()
    );

    let mut connector = MysqlConnector::new(config.clone());
    if let Err(e) = probe::run(&config, &candidates, &mut connector, &mut io::stdout()) {
        eprintln!("could not write probe transcript: {}", e);
    }

    // Exit 0 regardless of probe outcome; the transcript is the only signal.
}
