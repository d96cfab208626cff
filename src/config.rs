//! Command-line configuration for the reader.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Most verbose level written to the trace log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TraceLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<TraceLevel> for tracing::Level {
    fn from(level: TraceLevel) -> Self {
        match level {
            TraceLevel::Error => tracing::Level::ERROR,
            TraceLevel::Warn => tracing::Level::WARN,
            TraceLevel::Info => tracing::Level::INFO,
            TraceLevel::Debug => tracing::Level::DEBUG,
            TraceLevel::Trace => tracing::Level::TRACE,
        }
    }
}

#[derive(Debug, Parser, Clone)]
#[command(about = "Terminal article reader", author, version)]
pub struct AppConfig {
    /// Plain-text article to display (first non-empty line is the title)
    #[arg(long = "article", value_name = "PATH")]
    pub article: Option<PathBuf>,

    /// Print the presentation options and exit
    #[arg(long = "list-options", default_value_t = false)]
    pub list_options: bool,

    /// Print the option listing as JSON
    #[arg(long = "json", default_value_t = false, requires = "list_options")]
    pub json: bool,

    /// Keyboard only: leave mouse reporting off
    #[arg(long = "no-mouse", default_value_t = false)]
    pub no_mouse: bool,

    /// Write a JSON trace log
    #[arg(long = "logs", env = "READTERM_LOGS", default_value_t = false)]
    pub logs: bool,

    /// Trace log file (default: readterm_trace.jsonl in the temp dir)
    #[arg(long = "trace-log", env = "READTERM_TRACE_LOG", value_name = "PATH")]
    pub trace_log: Option<PathBuf>,

    /// Most verbose level written to the trace log
    #[arg(long = "log-level", value_enum, default_value_t = TraceLevel::Debug)]
    pub log_level: TraceLevel,

    /// Disable all logging, overriding --logs
    #[arg(long = "no-logs", default_value_t = false)]
    pub no_logs: bool,
}

impl AppConfig {
    #[must_use]
    pub fn mouse_enabled(&self) -> bool {
        !self.no_mouse
    }
}
