//! Configure the `cloudctl` process logger.
//!
//! Logs are meant for advanced users feedback and debugging:
//! they are discarded unless a log file is requested.
use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Context;
use anyhow::Result;
use clap::Args;
use clap::ValueEnum;
use slog::o;
use slog::Discard;
use slog::Drain;
use slog::FnValue;
use slog::Level;
use slog::Logger;
use slog::Record;

use crate::utils::resolve_home;

/// Enumerate valid log verbosity levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Critical,
    Error,
    Warning,
    Info,
    Debug,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Critical => write!(f, "critical"),
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
        }
    }
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Critical => Level::Critical,
            LogLevel::Error => Level::Error,
            LogLevel::Warning => Level::Warning,
            LogLevel::Info => Level::Info,
            LogLevel::Debug => Level::Debug,
        }
    }
}

/// Logging-related options.
#[derive(Args, Debug)]
pub struct LogOpt {
    /// If provided, logs will be emitted to this file.
    #[arg(long = "log-file", global = true, env = "CLOUDCTL_LOG_FILE")]
    pub file: Option<String>,

    /// Verbosity level for the log file.
    #[arg(
        long = "log-level",
        global = true,
        default_value_t = LogLevel::Info,
        value_enum,
    )]
    pub level: LogLevel,
}

/// Initialise a logger based on the given CLI arguments.
pub fn configure(opt: &LogOpt) -> Result<Logger> {
    let path = match &opt.file {
        Some(file) => resolve_home(file)?,
        None => return Ok(Logger::root(Discard, o!())),
    };
    file(&path, opt.level.into())
}

/// A logger to append JSON encoded events to a file.
fn file(path: &str, level: Level) -> Result<Logger> {
    let writer = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("unable to open log file at {}", path))?;
    let drain = slog_json::Json::new(writer)
        .set_newlines(true)
        .set_flush(true)
        .set_pretty(false)
        .add_default_keys()
        .build();
    let drain = Mutex::new(drain).filter_level(level).ignore_res();
    Ok(Logger::root(
        drain,
        o!(
            "module" => FnValue(|rinfo: &Record| rinfo.module()),
        ),
    ))
}

#[cfg(test)]
mod tests {
    use slog::Level;

    use super::configure;
    use super::LogLevel;
    use super::LogOpt;

    #[test]
    fn levels_map_to_slog() {
        assert_eq!(Level::from(LogLevel::Warning), Level::Warning);
        assert_eq!(Level::from(LogLevel::Debug), Level::Debug);
        assert_eq!(LogLevel::Critical.to_string(), "critical");
    }

    #[test]
    fn file_logger_filters_by_level() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cloudctl.log");
        let opt = LogOpt {
            file: Some(path.to_string_lossy().to_string()),
            level: LogLevel::Warning,
        };
        let logger = configure(&opt).unwrap();
        slog::info!(logger, "dropped record");
        slog::warn!(logger, "kept record"; "zone" => "example.com");
        drop(logger);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 1);
        let record: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(record["msg"], "kept record");
        assert_eq!(record["zone"], "example.com");
    }
}
