use crate::types::log_level::LogLevel;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONTROLLER_URL: &str = "http://127.0.0.1:9090";

/// Connection parameters for the proxy's external controller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CONTROLLER_URL.to_string(),
            secret: None,
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, secret: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            secret: secret.filter(|s| !s.is_empty()),
        }
    }

    fn base(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }

    fn secret(&self) -> Option<&str> {
        self.secret.as_deref().filter(|s| !s.is_empty())
    }

    pub fn configs_url(&self) -> String {
        format!("{}/configs", self.base())
    }

    /// WebSocket URL of the log stream filtered at `level`.
    pub fn logs_url(&self, level: &LogLevel) -> String {
        let base = self.base();
        let ws_base = if let Some(rest) = base.strip_prefix("https://") {
            format!("wss://{rest}")
        } else if let Some(rest) = base.strip_prefix("http://") {
            format!("ws://{rest}")
        } else {
            base.to_string()
        };
        let mut url = format!(
            "{}/logs?level={}",
            ws_base,
            urlencoding::encode(level.as_str())
        );
        if let Some(secret) = self.secret() {
            url.push_str("&token=");
            url.push_str(&urlencoding::encode(secret));
        }
        url
    }

    pub fn authorization(&self) -> Option<String> {
        self.secret().map(|s| format!("Bearer {s}"))
    }
}

/// Subset of the controller's `GET /configs` response used by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ControllerConfigs {
    #[serde(rename = "log-level")]
    pub log_level: LogLevel,
}
