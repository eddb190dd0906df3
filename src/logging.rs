//! Leveled diagnostics for varlines.
//!
//! Components never reach for a global logger. They receive a `&dyn Log`
//! when they are constructed and report through it. The binary passes a
//! [`TracingLog`], which forwards to `tracing` after applying the
//! warning/debug switches chosen once at startup; tests pass a
//! [`MemoryLog`] and inspect what was reported.

use crate::error::{Result, VarlinesError};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
    Debug,
}

/// A sink for leveled diagnostic messages.
///
/// `origin` names the reporting component (e.g. `"SourceClassifier"`),
/// `detail` carries the line or path the message is about.
pub trait Log: Send + Sync {
    fn log(&self, level: Level, origin: &str, message: &str, detail: Option<&str>);

    fn info(&self, origin: &str, message: &str) {
        self.log(Level::Info, origin, message, None);
    }

    fn warning(&self, origin: &str, message: &str, detail: Option<&str>) {
        self.log(Level::Warning, origin, message, detail);
    }

    fn error(&self, origin: &str, message: &str, detail: Option<&str>) {
        self.log(Level::Error, origin, message, detail);
    }

    fn debug(&self, origin: &str, message: &str, detail: Option<&str>) {
        self.log(Level::Debug, origin, message, detail);
    }
}

/// Which optional levels are shown. Info and error are always shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogSettings {
    pub warnings: bool,
    pub debug: bool,
}

impl LogSettings {
    /// Whether a message of the given level passes these settings.
    pub fn allows(&self, level: Level) -> bool {
        match level {
            Level::Info | Level::Error => true,
            Level::Warning => self.warnings,
            Level::Debug => self.debug,
        }
    }
}

/// [`Log`] implementation that forwards to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog {
    settings: LogSettings,
}

impl TracingLog {
    pub fn new(settings: LogSettings) -> Self {
        Self { settings }
    }
}

impl Log for TracingLog {
    fn log(&self, level: Level, origin: &str, message: &str, detail: Option<&str>) {
        if !self.settings.allows(level) {
            return;
        }
        let detail = detail.unwrap_or("");
        match level {
            Level::Info => tracing::info!(origin, detail, "{}", message),
            Level::Warning => tracing::warn!(origin, detail, "{}", message),
            Level::Error => tracing::error!(origin, detail, "{}", message),
            Level::Debug => tracing::debug!(origin, detail, "{}", message),
        }
    }
}

/// Install the process-wide `tracing` subscriber (stderr).
///
/// `RUST_LOG` overrides the default filter, which is `debug` when debug
/// output was requested and `info` otherwise.
pub fn init(settings: LogSettings) -> Result<()> {
    let default_level = if settings.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| VarlinesError::UserError(format!("failed to initialize logging: {}", e)))
}

/// One captured diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: Level,
    pub origin: String,
    pub message: String,
    pub detail: Option<String>,
}

/// [`Log`] implementation that keeps every message in memory.
#[derive(Debug, Default)]
pub struct MemoryLog {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the captured messages, oldest first.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .clone()
    }

    /// Captured messages of one level.
    pub fn at_level(&self, level: Level) -> Vec<LogEntry> {
        self.entries()
            .into_iter()
            .filter(|e| e.level == level)
            .collect()
    }
}

impl Log for MemoryLog {
    fn log(&self, level: Level, origin: &str, message: &str, detail: Option<&str>) {
        self.entries
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .push(LogEntry {
                level,
                origin: origin.to_string(),
                message: message.to_string(),
                detail: detail.map(str::to_string),
            });
    }
}
