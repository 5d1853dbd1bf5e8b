use leptos::prelude::*;
use shared::types::log_entry::LogEntry;
use shared::types::log_level::LogLevel;

pub fn badge_style(level: &LogLevel) -> String {
    format!(
        "background:{}; color:#e5e7eb; border-radius:4px; padding:1px 6px; font-size:11px; text-transform:uppercase;",
        level.badge_color()
    )
}

fn row_background(even: bool) -> &'static str {
    if even {
        "#111827"
    } else {
        "#0b1020"
    }
}

#[component]
pub fn LogLine(entry: LogEntry, even: bool) -> impl IntoView {
    let LogEntry {
        time,
        level,
        payload,
        ..
    } = entry;
    let badge = badge_style(&level);
    let row = format!(
        "height:100%; box-sizing:border-box; padding:8px 12px; overflow:hidden; background:{}; border-bottom:1px solid #1f2937;",
        row_background(even),
    );
    view! {
        <div style=row>
            <div style="display:flex; align-items:center; gap:8px; margin-bottom:4px;">
                <span style="color:#9ca3af;">{time}</span>
                <span style=badge>{level.to_string()}</span>
            </div>
            <div style="color:#e5e7eb; word-break:break-all;">{payload}</div>
        </div>
    }
}
