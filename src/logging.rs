//! Log levels and the `RUST_LOG` display threshold
//!
//! Activity events carry a [`LogLevel`]; the dashboard and headless mode only
//! show events at or above the threshold taken from `RUST_LOG`.

use log::LevelFilter;
use std::str::FromStr;

/// Environment variable holding the threshold, in `env_logger` syntax.
const RUST_LOG_ENV: &str = "RUST_LOG";

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, strum::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[strum(serialize = "warn", serialize = "warning")]
    Warn,
    Error,
}

impl LogLevel {
    /// Threshold for the current process; `info` when `RUST_LOG` is unset or unreadable.
    pub fn threshold() -> LogLevel {
        std::env::var(RUST_LOG_ENV)
            .map(|value| LogLevel::from_rust_log(&value))
            .unwrap_or(LogLevel::Info)
    }

    /// Level of the first directive in a `RUST_LOG` value such as
    /// `gardenice_monitor=debug,hyper=info`.
    pub fn from_rust_log(value: &str) -> LogLevel {
        let first_directive = value.split(',').next().unwrap_or_default();
        let level = first_directive
            .rsplit('=')
            .next()
            .unwrap_or_default()
            .trim();
        LogLevel::from_str(level).unwrap_or(LogLevel::Info)
    }

    /// Whether an event at this level passes `threshold`.
    pub fn passes(self, threshold: LogLevel) -> bool {
        self >= threshold
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}
