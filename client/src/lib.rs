use crate::api::client::Api;
use crate::state::AppState;
use crate::ui::logs_page::LogsPage;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::types::api_config::ApiConfig;

pub mod api;
pub mod config;
pub mod state;
pub mod time;
pub mod ui;

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new(ApiConfig::default());
    state.provide();
    spawn_local(config::bootstrap(state));

    view! {
        <main style="height:100vh; display:flex; flex-direction:column; background:#0b1020;">
            <LogsPage/>
        </main>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // host API lives on the same origin as the dashboard
    Api::init(String::new());
    leptos::mount::mount_to_body(|| view! { <App/> });
}
