// src/lib.rs
pub mod cli;
pub mod common;
pub mod config;
pub mod probe;

pub use config::TargetConfig;
pub use probe::{Connector, ProbeError, ProbeSuccess};
