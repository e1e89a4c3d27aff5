use log::LevelFilter;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use chrono::Local;
use env_logger::{Builder, Target};

pub fn init(
    verbose: bool,
    silent: bool,
    log_file: &Option<impl AsRef<Path>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = if verbose {
        LevelFilter::Debug
    } else if silent {
        LevelFilter::Error
    } else {
        LevelFilter::Info
    };

    let mut builder = Builder::new();
    builder.filter_level(level);

    if let Some(log_file) = log_file {
        let file = File::create(log_file.as_ref())?;
        builder.target(Target::Pipe(Box::new(file)));
    } else {
        // stdout carries the probe transcript; diagnostics go to stderr
        builder.target(Target::Stderr);
    }

    builder.format(|buf, record| {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        writeln!(
            buf,
            "[{}] [{}] {}",
            timestamp,
            record.level(),
            record.args()
        )
    });

    builder.init();

    Ok(())
}
