use leptos::html::Div;
use leptos::prelude::*;
use leptos_use::{use_window_size, UseWindowSizeReturn};

/// Pixels between the top of `container` and the bottom of the window,
/// recomputed on resize and once the element mounts.
pub fn use_remaining_viewport_height(container: NodeRef<Div>) -> Signal<f64> {
    let UseWindowSizeReturn { height, .. } = use_window_size();
    Signal::derive(move || {
        let viewport = height.get();
        let top = container
            .get()
            .map(|el| el.get_bounding_client_rect().top())
            .unwrap_or(0.0);
        remaining_height(viewport, top)
    })
}

pub fn remaining_height(viewport_height: f64, top: f64) -> f64 {
    (viewport_height - top).max(0.0)
}

pub fn list_height(container_height: f64, padding_bottom: f64) -> f64 {
    (container_height - padding_bottom).max(0.0)
}
