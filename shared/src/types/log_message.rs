use crate::types::log_level::LogLevel;
use serde::{Deserialize, Serialize};

/// One record as streamed by the controller's `/logs` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogMessage {
    #[serde(rename = "type")]
    pub level: LogLevel,
    pub payload: String,
}

impl LogMessage {
    pub fn new(level: LogLevel, payload: impl Into<String>) -> Self {
        Self {
            level,
            payload: payload.into(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
