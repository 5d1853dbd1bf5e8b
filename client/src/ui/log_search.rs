use crate::state::AppState;
use leptos::prelude::*;

#[component]
pub fn LogSearch() -> impl IntoView {
    let state = AppState::expect();
    view! {
        <input
            type="text"
            placeholder="Search logs"
            prop:value=move || state.log_search.get()
            on:input=move |ev| state.log_search.set(event_target_value(&ev))
            style="flex:1; min-width:160px; background:#111827; color:#e5e7eb; border:1px solid #374151; border-radius:6px; padding:6px 10px;"
        />
    }
}
