use std::sync::{Arc, Mutex};

use leptos::{ev, html, prelude::*};
use leptos_use::{
    use_event_listener, use_event_listener_with_options, use_window, UseEventListenerOptions,
};
use wasm_bindgen::JsCast;

use crate::nav::scroll_target;
use crate::scroll::{
    document_height, ElementBox, ScrollDirection, ScrollMetrics, ScrollRange, ScrollState,
    ScrollTracker,
};

/// Everything read from one scroll or resize event.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollSnapshot {
    pub metrics: ScrollMetrics,
    pub state: ScrollState,
}

/// Page scroll state shared with every animated component.
#[derive(Debug, Clone, Copy)]
pub struct ScrollContext {
    pub snapshot: ReadSignal<ScrollSnapshot>,
}

impl ScrollContext {
    pub fn offset(&self) -> Signal<f64> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.get().state.absolute_offset)
    }

    pub fn progress(&self) -> Signal<f64> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.get().state.progress)
    }

    pub fn direction(&self) -> Signal<ScrollDirection> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.get().state.direction)
    }
}

/// Starts tracking window scrolling and provides the [`ScrollContext`] to
/// everything below the current owner. Listeners are removed when the owner
/// is cleaned up.
pub fn provide_scroll_context() -> ScrollContext {
    let tracker = Arc::new(Mutex::new(ScrollTracker::new()));
    let (snapshot, set_snapshot) = signal(ScrollSnapshot::default());
    let document_height = StoredValue::new(0.0_f64);

    let sample = move || {
        let metrics = read_metrics(document_height.get_value());
        let state = tracker
            .lock()
            .expect("should be able to lock scroll tracker")
            .sample(metrics);
        set_snapshot.set(ScrollSnapshot { metrics, state });
    };
    let resample = {
        let sample = sample.clone();
        move || {
            document_height.set_value(read_document_height());
            sample();
        }
    };

    let _ = use_event_listener_with_options(
        use_window(),
        ev::scroll,
        move |_| sample(),
        UseEventListenerOptions::default().passive(true),
    );
    let _ = use_event_listener(use_window(), ev::resize, {
        let resample = resample.clone();
        move |_| resample()
    });
    // effects only run in the browser, after the page is mounted
    Effect::new(move |_| resample());

    let ctx = ScrollContext { snapshot };
    provide_context(ctx);
    ctx
}

pub fn use_scroll() -> ScrollContext {
    expect_context::<ScrollContext>()
}

/// Local progress of `target` through the viewport over `range`.
///
/// Stays at 0 until the element is mounted.
pub fn use_section_progress(target: NodeRef<html::Section>, range: ScrollRange) -> Memo<f64> {
    let scroll = use_scroll();
    Memo::new(move |_| {
        let ScrollSnapshot { metrics, state } = scroll.snapshot.get();
        target
            .get()
            .map(|el| {
                let rect = el.get_bounding_client_rect();
                ElementBox::from_viewport_rect(rect.top(), rect.height(), state.absolute_offset)
                    .progress(state.absolute_offset, metrics.viewport_height, range)
            })
            .unwrap_or(0.0)
    })
}

/// Smoothly scrolls so the section with `section_id` sits just below the
/// fixed header. Unknown ids are ignored.
pub fn scroll_to_section(section_id: &str) {
    let Some(section) = document().get_element_by_id(section_id) else {
        log::debug!("scroll target #{section_id} not found");
        return;
    };
    let window = window();
    let page_offset = window.page_y_offset().unwrap_or_default();
    let top = scroll_target(section.get_bounding_client_rect().top(), page_offset);

    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

fn read_metrics(document_height: f64) -> ScrollMetrics {
    let window = window();
    let offset = window.scroll_y().unwrap_or_default();
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default();
    ScrollMetrics::new(offset, viewport_height, document_height)
}

fn read_document_height() -> f64 {
    let document = document();
    let mut heights = Vec::with_capacity(6);
    if let Some(body) = document.body() {
        heights.extend([body.scroll_height(), body.offset_height(), body.client_height()]);
    }
    if let Some(root) = document.document_element() {
        heights.extend([root.scroll_height(), root.client_height()]);
        if let Some(root) = root.dyn_ref::<web_sys::HtmlElement>() {
            heights.push(root.offset_height());
        }
    }
    document_height(heights)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_accessors_follow_snapshot() {
        let (snapshot, set_snapshot) = signal(ScrollSnapshot::default());
        let ctx = ScrollContext { snapshot };
        assert_eq!(ctx.direction().get_untracked(), ScrollDirection::None);

        let mut tracker = ScrollTracker::new();
        let metrics = ScrollMetrics::new(500.0, 1000.0, 2000.0);
        let state = tracker.sample(metrics);
        set_snapshot.set(ScrollSnapshot { metrics, state });

        assert_eq!(ctx.offset().get_untracked(), 500.0);
        assert_eq!(ctx.progress().get_untracked(), 0.5);
        assert_eq!(ctx.direction().get_untracked(), ScrollDirection::Down);
    }
}
