use crate::types::log_level::LogLevel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unique within the store that created the entry.
    pub id: u64,
    pub time: String,
    pub level: LogLevel,
    pub payload: String,
}
