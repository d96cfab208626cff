//! File-backed tracing. The reader owns stdout, so events only ever go to the trace log.

use crate::config::AppConfig;
use anyhow::{Context, Result};
use std::env;
use std::fs::{File, OpenOptions};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::time::UtcTime;

/// Where and how much to trace, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceSettings {
    pub path: PathBuf,
    pub level: Level,
}

impl TraceSettings {
    /// `None` unless `--logs` is set and `--no-logs` is not.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Option<Self> {
        if !config.logs || config.no_logs {
            return None;
        }
        Some(Self {
            path: config.trace_log.clone().unwrap_or_else(default_trace_path),
            level: config.log_level.into(),
        })
    }

    fn open(&self) -> Result<File> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("failed to open trace log {}", self.path.display()))
    }
}

#[must_use]
pub fn default_trace_path() -> PathBuf {
    env::temp_dir().join("readterm_trace.jsonl")
}

/// Install the JSON file subscriber when logging is enabled and return the log path.
///
/// # Errors
///
/// Returns an error if the trace log cannot be opened or a global subscriber
/// is already installed.
pub fn init_tracing(config: &AppConfig) -> Result<Option<PathBuf>> {
    let Some(settings) = TraceSettings::from_config(config) else {
        return Ok(None);
    };
    let file = settings.open()?;
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_timer(UtcTime::rfc_3339())
        .with_max_level(settings.level)
        .with_writer(file)
        .with_current_span(false)
        .with_span_list(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install trace subscriber")?;
    Ok(Some(settings.path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn config(args: &[&str]) -> AppConfig {
        AppConfig::parse_from(std::iter::once("readterm").chain(args.iter().copied()))
    }

    fn unique_trace_path(suffix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();
        env::temp_dir().join(format!("readterm-trace-{suffix}-{nanos}.jsonl"))
    }

    #[test]
    fn tracing_is_off_without_logs_flag() {
        assert_eq!(TraceSettings::from_config(&config(&["--no-logs"])), None);
        assert_eq!(
            TraceSettings::from_config(&config(&["--logs", "--no-logs"])),
            None
        );
    }

    #[test]
    fn trace_log_flag_and_level_drive_the_settings() {
        let settings =
            TraceSettings::from_config(&config(&["--logs", "--trace-log", "t.jsonl", "--log-level", "info"]))
                .expect("logging enabled");
        assert_eq!(settings.path, PathBuf::from("t.jsonl"));
        assert_eq!(settings.level, Level::INFO);
    }

    #[test]
    fn default_trace_path_lives_in_temp_dir() {
        assert_eq!(
            default_trace_path(),
            env::temp_dir().join("readterm_trace.jsonl")
        );
    }

    #[test]
    fn open_creates_the_trace_file() {
        let path = unique_trace_path("open");
        let _ = fs::remove_file(&path);
        let settings = TraceSettings {
            path: path.clone(),
            level: Level::DEBUG,
        };
        settings.open().expect("open trace log");
        assert!(path.exists());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn open_reports_unwritable_paths() {
        let settings = TraceSettings {
            path: unique_trace_path("missing-dir").join("trace.jsonl"),
            level: Level::DEBUG,
        };
        let err = settings.open().expect_err("parent directory is missing");
        assert!(format!("{err:#}").contains("failed to open trace log"));
    }

    #[test]
    fn disabled_config_installs_nothing() {
        let installed = init_tracing(&config(&["--no-logs"])).expect("no-op");
        assert_eq!(installed, None);
    }
}
