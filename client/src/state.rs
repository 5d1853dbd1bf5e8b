use crate::api::feed::{request_for, SubscribeRequest};
use crate::time::now_timestamp;
use leptos::prelude::*;
use shared::log_store::LogStore;
use shared::types::{
    api_config::ApiConfig, log_entry::LogEntry, log_level::LogLevel, log_message::LogMessage,
};

/// Entries kept in memory before the oldest are dropped.
pub const LOG_RETENTION: usize = 3000;

/// Dashboard-wide reactive state, shared through context.
#[derive(Clone, Copy)]
pub struct AppState {
    pub logs: RwSignal<LogStore>,
    /// `None` until the controller reports its level; no stream is opened before that.
    pub log_level: RwSignal<Option<LogLevel>>,
    pub api_config: RwSignal<ApiConfig>,
    pub log_search: RwSignal<String>,
}

impl AppState {
    pub fn new(api_config: ApiConfig) -> Self {
        Self {
            logs: RwSignal::new(LogStore::with_retention(LOG_RETENTION)),
            log_level: RwSignal::new(None),
            api_config: RwSignal::new(api_config),
            log_search: RwSignal::new(String::new()),
        }
    }

    pub fn provide(self) {
        provide_context(self);
    }

    pub fn expect() -> Self {
        expect_context::<AppState>()
    }

    /// Request for the live log stream; tracks the level and, once it is known, the config.
    pub fn subscribe_request(&self) -> Option<SubscribeRequest> {
        let level = self.log_level.get()?;
        request_for(Some(level), self.api_config.get())
    }

    /// Point the dashboard at another controller.
    ///
    /// The level is cleared first so the old stream closes and the new one
    /// only opens once the new controller's level is known.
    pub fn switch_controller(&self, next: ApiConfig) {
        self.log_level.set(None);
        self.api_config.set(next);
    }

    pub fn append_log(&self, message: LogMessage) {
        let time = now_timestamp();
        self.logs.update(|store| {
            store.append(message, time);
        });
    }

    pub fn logs_for_display(&self) -> Vec<LogEntry> {
        let search = self.log_search.get();
        self.logs.with(|store| store.for_display(&search))
    }
}
