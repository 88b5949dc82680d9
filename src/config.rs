use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use tracing::Level;

use crate::constants::TICK_INTERVAL;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Seed for the piece sequence (random when omitted)
    #[clap(long)]
    pub seed: Option<u64>,
    /// Gravity interval in milliseconds
    #[clap(long, default_value_t = TICK_INTERVAL, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,
    /// Write logs to this file
    #[clap(long)]
    pub log_file: Option<PathBuf>,
    /// Maximum level written to the log file
    #[clap(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl Config {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}
