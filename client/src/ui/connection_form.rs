use crate::config;
use crate::state::AppState;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::types::api_config::ApiConfig;

#[component]
pub fn ConnectionForm() -> impl IntoView {
    let state = AppState::expect();
    let (base_url, set_base_url) = signal(String::new());
    let (secret, set_secret) = signal(String::new());

    // follow the config when bootstrap replaces it
    Effect::new(move |_| {
        let current = state.api_config.get();
        set_base_url.set(current.base_url);
        set_secret.set(current.secret.unwrap_or_default());
    });

    let apply = move |ev: SubmitEvent| {
        ev.prevent_default();
        let next = ApiConfig::new(base_url.get_untracked(), Some(secret.get_untracked()));
        config::save(&next);
        if state.api_config.get_untracked() != next {
            state.switch_controller(next.clone());
            spawn_local(config::load_log_level(state, next));
        }
    };

    view! {
        <form on:submit=apply style="display:flex; gap:8px; align-items:center;">
            <input
                type="text"
                placeholder="http://127.0.0.1:9090"
                prop:value=move || base_url.get()
                on:input=move |ev| set_base_url.set(event_target_value(&ev))
                style="width:220px; background:#111827; color:#e5e7eb; border:1px solid #374151; border-radius:6px; padding:6px 10px;"
            />
            <input
                type="password"
                placeholder="secret"
                prop:value=move || secret.get()
                on:input=move |ev| set_secret.set(event_target_value(&ev))
                style="width:120px; background:#111827; color:#e5e7eb; border:1px solid #374151; border-radius:6px; padding:6px 10px;"
            />
            <button
                type="submit"
                style="background:#2563eb; color:white; border:none; padding:6px 12px; border-radius:6px; cursor:pointer;"
            >
                {"Connect"}
            </button>
        </form>
    }
}
