use parking_lot::Mutex;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Severity of a sink message. Lower is more severe; a sink configured with a
/// threshold keeps every message at or below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    Error = 0,
    #[default]
    Info = 1,
    Debug = 2,
}

impl LogLevel {
    pub fn enabled(self, threshold: LogLevel) -> bool { self <= threshold }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Error => "error",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown log level `{0}` (expected 0-2 or error/info/debug)")]
pub struct UnknownLevel(pub String);

impl FromStr for LogLevel {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "error" => Ok(LogLevel::Error),
            "1" | "info" => Ok(LogLevel::Info),
            "2" | "debug" => Ok(LogLevel::Debug),
            other => Err(UnknownLevel(other.to_string())),
        }
    }
}

/// Destination for the user-facing messages handlers produce.
pub trait LogSink {
    fn log(&self, level: LogLevel, message: &str);

    fn error(&self, message: &str) { self.log(LogLevel::Error, message) }

    fn info(&self, message: &str) { self.log(LogLevel::Info, message) }
}

/// Keeps messages in memory, dropping those above the threshold.
#[derive(Debug, Default)]
pub struct MemorySink {
    threshold: LogLevel,
    entries: Mutex<Vec<(LogLevel, String)>>,
}

impl MemorySink {
    pub fn new(threshold: LogLevel) -> Self {
        Self { threshold, entries: Mutex::new(Vec::new()) }
    }

    pub fn entries(&self) -> Vec<(LogLevel, String)> { self.entries.lock().clone() }

    pub fn messages(&self) -> Vec<String> {
        self.entries.lock().iter().map(|(_, m)| m.clone()).collect()
    }

    pub fn last(&self) -> Option<String> { self.entries.lock().last().map(|(_, m)| m.clone()) }

    pub fn clear(&self) { self.entries.lock().clear() }
}

impl LogSink for MemorySink {
    fn log(&self, level: LogLevel, message: &str) {
        if level.enabled(self.threshold) {
            self.entries.lock().push((level, message.to_string()));
        }
    }
}
