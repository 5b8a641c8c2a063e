use crate::log::LogLevel;

/// Environment variable holding the minimum severity shown by output sinks.
pub const LOG_LEVEL_ENV: &str = "DOCQUERY_LOG_LEVEL";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Messages less severe than this are dropped by the sink.
    pub log_level: LogLevel,
}

impl Config {
    pub fn new(log_level: LogLevel) -> Self { Self { log_level } }

    pub fn from_env() -> Self { Self::from_lookup(|key| std::env::var(key).ok()) }

    /// Build from an arbitrary variable source; unknown values fall back to the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = match lookup(LOG_LEVEL_ENV) {
            None => LogLevel::default(),
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                tracing::warn!(%err, var = LOG_LEVEL_ENV, "ignoring log level from environment");
                LogLevel::default()
            }),
        };
        Self { log_level }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_info() {
        assert_eq!(Config::from_lookup(|_| None).log_level, LogLevel::Info);
    }

    #[test]
    fn reads_numeric_and_named_levels() {
        let cfg = Config::from_lookup(|k| (k == LOG_LEVEL_ENV).then(|| "0".to_string()));
        assert_eq!(cfg.log_level, LogLevel::Error);
        let cfg = Config::from_lookup(|_| Some("debug".to_string()));
        assert_eq!(cfg.log_level, LogLevel::Debug);
    }

    #[test]
    fn falls_back_on_garbage() {
        let cfg = Config::from_lookup(|_| Some("loud".to_string()));
        assert_eq!(cfg, Config::default());
    }
}
