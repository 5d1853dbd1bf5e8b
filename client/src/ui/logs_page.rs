use crate::api::controller::WsLogSource;
use crate::api::feed::{LogFeed, OnMessage};
use crate::state::AppState;
use crate::ui::connection_form::ConnectionForm;
use crate::ui::log_search::LogSearch;
use crate::ui::viewport::{list_height, use_remaining_viewport_height};
use crate::ui::virtual_list::LogList;
use leptos::html::Div;
use leptos::logging::{log, warn};
use leptos::prelude::*;
use shared::types::log_level::LogLevel;
use std::rc::Rc;

const PADDING_BOTTOM: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogsBody {
    Placeholder,
    List,
}

impl LogsBody {
    fn for_count(count: usize) -> Self {
        if count == 0 {
            LogsBody::Placeholder
        } else {
            LogsBody::List
        }
    }
}

#[component]
pub fn LogsPage() -> impl IntoView {
    let state = AppState::expect();
    let feed = StoredValue::new_local(LogFeed::new(WsLogSource));

    // Re-runs only when the controller settings or the minimum level change.
    Effect::new(move |_| {
        let request = state.subscribe_request();
        let on_message: OnMessage = Rc::new(move |message| state.append_log(message));
        feed.update_value(|feed| match feed.sync(request, on_message) {
            Ok(true) => log!("log stream opened"),
            Ok(false) => {}
            Err(e) => warn!("could not open log stream: {e}"),
        });
    });
    on_cleanup(move || {
        feed.try_update_value(|feed| feed.close());
    });

    let container = NodeRef::<Div>::new();
    let container_height = use_remaining_viewport_height(container);
    let height = Signal::derive(move || list_height(container_height.get(), PADDING_BOTTOM));

    let entries = Memo::new(move |_| state.logs_for_display());
    let body = Memo::new(move |_| LogsBody::for_count(entries.with(Vec::len)));

    view! {
        <div style="display:flex; flex-direction:column; flex:1; min-height:0; color:#e5e7eb; font-family: ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, Liberation Mono, monospace; font-size:12px;">
            <LogsHeader />
            <div node_ref=container style={format!("padding-bottom:{PADDING_BOTTOM}px;")}>
                {move || match body.get() {
                    LogsBody::Placeholder => view! { <LogPlaceholder height=height /> }.into_any(),
                    LogsBody::List => view! { <LogList entries=entries height=height /> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn LogsHeader() -> impl IntoView {
    let state = AppState::expect();
    view! {
        <div style="display:flex; flex-wrap:wrap; align-items:center; gap:12px; padding:12px 16px; border-bottom:1px solid #1f2937;">
            <h1 style="font-size:18px; font-weight:600; margin:0 12px 0 0;">{"Logs"}</h1>
            <LogSearch />
            <LevelSelect />
            <button
                on:click=move |_| state.logs.update(|store| store.clear())
                style="background:#374151; color:#e5e7eb; border:none; padding:6px 12px; border-radius:6px; cursor:pointer;"
            >
                {"Clear"}
            </button>
            <ConnectionForm />
        </div>
    }
}

/// Selectable minimum levels, plus the current one when the controller
/// reports a level outside the usual set.
fn level_options(current: Option<&LogLevel>) -> Vec<LogLevel> {
    let mut options = LogLevel::CONFIGURABLE.to_vec();
    if let Some(level) = current {
        if !options.contains(level) {
            options.push(level.clone());
        }
    }
    options
}

#[component]
fn LevelSelect() -> impl IntoView {
    let state = AppState::expect();
    let options = move || {
        let current = state.log_level.get();
        level_options(current.as_ref())
            .into_iter()
            .map(|level| {
                let selected = current.as_ref() == Some(&level);
                let name = level.to_string();
                let value = name.clone();
                view! { <option value=value selected=selected>{name}</option> }
            })
            .collect_view()
    };
    view! {
        <select
            on:change=move |ev| state.log_level.set(Some(LogLevel::from(event_target_value(&ev))))
            style="background:#111827; color:#e5e7eb; border:1px solid #374151; border-radius:6px; padding:6px 8px;"
        >
            {options}
        </select>
    }
}

#[component]
fn LogPlaceholder(#[prop(into)] height: Signal<f64>) -> impl IntoView {
    view! {
        <div style=move || {
            format!(
                "height:{}px; display:flex; flex-direction:column; align-items:center; justify-content:center; color:#6b7280;",
                height.get(),
            )
        }>
            <div>{"No logs yet, hang tight..."}</div>
        </div>
    }
}
