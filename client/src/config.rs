//! Where the dashboard gets its controller connection from.
//!
//! Saved settings in local storage win, then the host's
//! `/api/dashboard-config`, then the built-in default.

use crate::api::{client::Api, controller::Controller, error::ApiError};
use crate::state::AppState;
use gloo::storage::{LocalStorage, Storage};
use leptos::logging::{log, warn};
use leptos::prelude::*;
use shared::types::{api_config::ApiConfig, log_level::LogLevel};

const STORAGE_KEY: &str = "proxydash.api-config";

pub fn load_saved() -> Option<ApiConfig> {
    LocalStorage::get::<ApiConfig>(STORAGE_KEY).ok()
}

pub fn save(config: &ApiConfig) {
    if let Err(e) = LocalStorage::set(STORAGE_KEY, config) {
        warn!("could not persist controller settings: {e}");
    }
}

async fn host_config() -> Result<ApiConfig, ApiError> {
    Api::instance()?.dashboard_config().await
}

pub async fn bootstrap(state: AppState) {
    let config = match load_saved() {
        Some(config) => config,
        None => host_config().await.unwrap_or_else(|e| {
            warn!("dashboard config unavailable ({e}), using defaults");
            ApiConfig::default()
        }),
    };
    state.api_config.set(config.clone());
    load_log_level(state, config).await;
}

/// Seed the minimum level from the controller, falling back to `info`.
pub async fn load_log_level(state: AppState, config: ApiConfig) {
    let level = match Controller::new(config).configs().await {
        Ok(configs) => {
            log!("controller log level: {}", configs.log_level);
            configs.log_level
        }
        Err(e) => {
            warn!("could not read controller configs: {e}");
            LogLevel::Info
        }
    };
    state.log_level.set(Some(level));
}
