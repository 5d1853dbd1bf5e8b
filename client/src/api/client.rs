use crate::api::error::ApiError;
use gloo_net::http::Request;
use once_cell::sync::OnceCell;
use shared::types::api_config::ApiConfig;
use std::sync::Arc;

static INSTANCE: OnceCell<Arc<Api>> = OnceCell::new();

/// Client for the host that serves the dashboard itself.
pub struct Api {
    base_url: String,
}

impl Api {
    pub fn init(base_url: String) {
        let _ = INSTANCE.set(Arc::new(Api { base_url }));
    }

    pub fn instance() -> Result<Arc<Self>, ApiError> {
        INSTANCE.get().cloned().ok_or(ApiError::NotInitialized)
    }

    pub async fn dashboard_config(&self) -> Result<ApiConfig, ApiError> {
        let resp = Request::get(format!("{}/api/dashboard-config", self.base_url).as_str())
            .send()
            .await?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(resp.json::<ApiConfig>().await?)
    }
}
