use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser, Debug)]
#[command(name = "prism")]
#[command(about = "Render a JSON scene description with a recursive ray tracer")]
pub struct Args {
    /// Scene description file (prompted for on stdin when omitted)
    pub scene: Option<PathBuf>,

    /// Output image path (.ppm writes plain-text PPM, anything else goes through the image encoder)
    #[arg(short, long, default_value = "render.png")]
    pub output: PathBuf,

    /// Override the scene's maximum ray depth
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}
