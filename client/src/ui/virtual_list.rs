//! Fixed-row-height windowing: only rows intersecting the scroll viewport
//! (plus a few rows of overscan) are materialized.

use crate::ui::log_line::LogLine;
use leptos::prelude::*;
use shared::types::log_entry::LogEntry;
use std::ops::Range;
use web_sys::HtmlDivElement;

pub const ITEM_SIZE: f64 = 80.0;
pub const OVERSCAN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSizeWindow {
    pub item_size: f64,
    pub overscan: usize,
}

impl FixedSizeWindow {
    pub fn new(item_size: f64) -> Self {
        Self {
            item_size,
            overscan: 0,
        }
    }

    pub fn with_overscan(self, overscan: usize) -> Self {
        Self { overscan, ..self }
    }

    pub fn item_offset(&self, index: usize) -> f64 {
        index as f64 * self.item_size
    }

    pub fn total_height(&self, item_count: usize) -> f64 {
        item_count as f64 * self.item_size
    }

    /// Indices to render for the given scroll position, end exclusive.
    pub fn visible_range(
        &self,
        scroll_offset: f64,
        viewport_height: f64,
        item_count: usize,
    ) -> Range<usize> {
        if item_count == 0 || viewport_height <= 0.0 || self.item_size <= 0.0 {
            return 0..0;
        }
        let last = item_count - 1;
        let offset = scroll_offset.max(0.0);

        let start = ((offset / self.item_size).floor() as usize).min(last);
        let stop = (((offset + viewport_height) / self.item_size).ceil() as usize)
            .saturating_sub(1)
            .clamp(start, last);

        let first = start.saturating_sub(self.overscan);
        let end = (stop + self.overscan).min(last) + 1;
        first..end
    }

    pub fn visible_items<'a, T>(
        &self,
        items: &'a [T],
        scroll_offset: f64,
        viewport_height: f64,
    ) -> impl Iterator<Item = (usize, &'a T)> + 'a {
        let range = self.visible_range(scroll_offset, viewport_height, items.len());
        let start = range.start;
        items[range]
            .iter()
            .enumerate()
            .map(move |(i, item)| (start + i, item))
    }

    fn row_style(&self, index: usize) -> String {
        format!(
            "position:absolute; left:0; right:0; top:{}px; height:{}px;",
            self.item_offset(index),
            self.item_size
        )
    }
}

/// Row key: the entry id, which survives eviction and filtering.
pub fn row_key(entry: &LogEntry) -> u64 {
    entry.id
}

/// Current index of the entry with `id`. Displayed entries are in ascending
/// id order, filtered or not.
pub fn position_of(entries: &[LogEntry], id: u64) -> Option<usize> {
    entries.binary_search_by_key(&id, |entry| entry.id).ok()
}

/// Renders one entry as a [`LogLine`] at the position its id currently holds.
#[component]
pub fn LogRow(
    entry: LogEntry,
    #[prop(into)] index: Signal<usize>,
    window: FixedSizeWindow,
) -> impl IntoView {
    let even = entry.id % 2 == 0;
    view! {
        <div style=move || window.row_style(index.get())>
            <LogLine entry=entry even=even />
        </div>
    }
}

#[component]
pub fn LogList(
    #[prop(into)] entries: Signal<Vec<LogEntry>>,
    #[prop(into)] height: Signal<f64>,
) -> impl IntoView {
    let window = FixedSizeWindow::new(ITEM_SIZE).with_overscan(OVERSCAN);
    let (scroll_offset, set_scroll_offset) = signal(0.0_f64);

    let rows = move || {
        entries.with(|entries| {
            window
                .visible_items(entries, scroll_offset.get(), height.get())
                .map(|(_, entry)| entry.clone())
                .collect::<Vec<_>>()
        })
    };
    let total_height = move || entries.with(|entries| window.total_height(entries.len()));

    view! {
        <div
            style=move || {
                format!("height:{}px; width:100%; overflow-y:auto; position:relative;", height.get())
            }
            on:scroll=move |ev| {
                let el = event_target::<HtmlDivElement>(&ev);
                set_scroll_offset.set(el.scroll_top() as f64);
            }
        >
            <div style=move || {
                format!("height:{}px; width:100%; position:relative;", total_height())
            }>
                <For
                    each=rows
                    key=row_key
                    children=move |entry: LogEntry| {
                        let id = entry.id;
                        let index = Signal::derive(move || {
                            entries.with(|entries| position_of(entries, id).unwrap_or_default())
                        });
                        view! { <LogRow entry=entry index=index window=window /> }
                    }
                />
            </div>
        </div>
    }
}
