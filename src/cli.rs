use clap::{value_parser, Parser, ValueEnum};
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
///
/// Only the image dimensions, depth budget and output path are
/// configurable; the scene itself is fixed.
#[derive(Parser)]
#[command(name = "miniray")]
#[command(about = "A minimal two-sphere ray tracer")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, default_value = "800", value_parser = value_parser!(u32).range(2..),
          help = "Image width in pixels")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "400", value_parser = value_parser!(u32).range(2..),
          help = "Image height in pixels")]
    pub height: u32,

    /// Shading depth budget (inert until reflection tracing exists)
    #[arg(long, default_value = "5", help = "Shading depth budget")]
    pub max_depth: u32,

    /// Output file path
    #[arg(short, long, default_value = "output.png", help = "Output file path (.png)")]
    pub output: String,
}
