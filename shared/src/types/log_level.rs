use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Badge background for severities outside the known table.
pub const DEFAULT_BADGE_COLOR: &str = "#6b7280";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    /// Only meaningful as a configured minimum level: nothing is streamed.
    Silent,
    Other(String),
}

impl LogLevel {
    /// Levels a user can pick as the minimum level for the log stream.
    pub const CONFIGURABLE: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Silent,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
            LogLevel::Silent => "silent",
            LogLevel::Other(raw) => raw,
        }
    }

    pub fn badge_color(&self) -> &'static str {
        match self {
            LogLevel::Debug => "transparent",
            LogLevel::Info => "#454545",
            LogLevel::Warning => "#b99105",
            LogLevel::Error => "#c11c1c",
            LogLevel::Silent | LogLevel::Other(_) => DEFAULT_BADGE_COLOR,
        }
    }

    pub fn is_silent(&self) -> bool {
        matches!(self, LogLevel::Silent)
    }
}

impl From<&str> for LogLevel {
    fn from(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "debug" => LogLevel::Debug,
            "info" => LogLevel::Info,
            "warning" | "warn" => LogLevel::Warning,
            "error" => LogLevel::Error,
            "silent" => LogLevel::Silent,
            _ => LogLevel::Other(raw.to_string()),
        }
    }
}

impl From<String> for LogLevel {
    fn from(raw: String) -> Self {
        LogLevel::from(raw.as_str())
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for LogLevel {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(LogLevel::from(s))
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
