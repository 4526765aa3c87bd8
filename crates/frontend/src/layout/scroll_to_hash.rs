//! Drives [`ScrollCoordinator`] from route and hash changes: polls for the anchor,
//! snaps to it without smooth scrolling, then re-measures while images and fonts
//! shift the layout.

use contracts::navigation::{ScrollAction, ScrollCoordinator, ScrollStep, ScrollTimings, TargetMetrics};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, ScrollRestoration};

use super::navigation::use_navigation;

/// Height of the sticky header kept above the anchor.
const HEADER_OFFSET_PX: f64 = 80.0;

#[component]
pub fn ScrollToHash() -> impl IntoView {
    let nav = use_navigation();
    let coordinator = StoredValue::new(ScrollCoordinator::new(ScrollTimings {
        anchor_offset_px: HEADER_OFFSET_PX,
        ..ScrollTimings::default()
    }));

    if let Ok(history) = window().history() {
        let _ = history.set_scroll_restoration(ScrollRestoration::Manual);
    }

    // Query-only changes (catalog filters) keep the scroll position.
    let key = Memo::new(move |_| (nav.path.get(), nav.hash.get(), nav.visits.get()));

    Effect::new(move |_| {
        let (_, hash, _) = key.get();
        let hash = (!hash.is_empty()).then_some(hash);
        if let Some((generation, step)) =
            coordinator.try_update_value(|c| c.on_navigation(hash.as_deref()))
        {
            run_step(coordinator, generation, step);
        }
    });
}

fn run_step(coordinator: StoredValue<ScrollCoordinator>, generation: u64, step: ScrollStep) {
    apply(step.action);

    let Some(delay) = step.next_tick_ms else {
        return;
    };
    spawn_local(async move {
        TimeoutFuture::new(delay).await;
        let Some(target) = coordinator.try_with_value(|c| c.target().map(str::to_string)) else {
            return;
        };
        let metrics = target.as_deref().and_then(measure);
        if let Some(next) = coordinator.try_update_value(|c| c.on_tick(generation, metrics)) {
            run_step(coordinator, generation, next);
        }
    });
}

fn measure(id: &str) -> Option<TargetMetrics> {
    let element = document().get_element_by_id(id)?;
    Some(TargetMetrics {
        element_top: element.get_bounding_client_rect().top(),
        scroll_y: window().scroll_y().unwrap_or(0.0),
    })
}

fn apply(action: ScrollAction) {
    match action {
        ScrollAction::Nothing => {}
        ScrollAction::ToTop => without_smooth_scroll(|| window().scroll_to_with_x_and_y(0.0, 0.0)),
        ScrollAction::SnapTo(top) => without_smooth_scroll(|| window().scroll_to_with_x_and_y(0.0, top)),
        ScrollAction::Nudge(delta) => without_smooth_scroll(|| window().scroll_by_with_x_and_y(0.0, delta)),
    }
}

/// Runs `scroll` with `scroll-behavior: auto` on the root element, restoring the
/// previous inline value afterwards.
fn without_smooth_scroll(scroll: impl FnOnce()) {
    let root = document()
        .document_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let Some(root) = root else {
        scroll();
        return;
    };

    let style = root.style();
    let previous = style.get_property_value("scroll-behavior").unwrap_or_default();
    let _ = style.set_property("scroll-behavior", "auto");
    scroll();
    if previous.is_empty() {
        let _ = style.remove_property("scroll-behavior");
    } else {
        let _ = style.set_property("scroll-behavior", &previous);
    }
}
