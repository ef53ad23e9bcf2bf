use clap::{Parser, Subcommand, ValueEnum};
use quill_config::QuillConfig;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Trace-level messages (most verbose)
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "quill")]
#[command(about = "quill - a small notes REST service backed by SurrealDB")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute (defaults to serve)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Set log level (off, error, warn, info, debug, trace)
    /// If not specified, uses config file value or defaults to 'info'
    #[arg(short = 'l', long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (defaults to ~/.config/quill/config.toml)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Address to bind (overrides config file)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Port to listen on (overrides config file)
    #[arg(short, long, global = true)]
    pub port: Option<u16>,

    /// Database path, or ":memory:" (overrides config file)
    #[arg(long, global = true)]
    pub db_path: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve,

    /// Print the effective configuration as TOML
    Config,
}

impl Cli {
    /// Effective log filter, if the command line asked for one
    pub fn level_override(&self) -> Option<LevelFilter> {
        if let Some(level) = self.log_level {
            Some(level.into())
        } else if self.verbose {
            Some(LevelFilter::DEBUG)
        } else {
            None
        }
    }

    /// Apply command-line overrides on top of file and env configuration
    pub fn apply_overrides(&self, config: &mut QuillConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(path) = &self.db_path {
            config.storage.path = path.clone();
        }
    }
}
