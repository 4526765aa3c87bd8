//! Horizontal logo carousel with arrow buttons, keyboard and mouse-drag scrolling,
//! plus autoplay that pauses on hover or focus.
//!
//! All state logic lives in [`CarouselState`]; the component only reads scroll
//! metrics and applies the targets it returns.

use crate::shared::icons::icon;
use contracts::carousel::{CarouselConfig, CarouselState, Direction, ScrollMetrics};
use contracts::showcase::LogoItem;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{ScrollBehavior, ScrollToOptions};

/// What one carousel slide shows.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoCard {
    pub id: String,
    pub name: String,
    pub logo: Option<String>,
    pub href: Option<String>,
    pub caption: Option<String>,
    pub initials: String,
}

impl LogoCard {
    pub fn from_item<T: LogoItem>(item: &T) -> Self {
        Self {
            id: item.id().to_string(),
            name: item.name().to_string(),
            logo: item.logo().map(str::to_string),
            href: item.href().map(str::to_string),
            caption: item.category().map(str::to_string),
            initials: item.initials(),
        }
    }
}

fn read_metrics(track: &web_sys::Element) -> ScrollMetrics {
    ScrollMetrics {
        scroll_left: track.scroll_left() as f64,
        scroll_width: track.scroll_width() as f64,
        client_width: track.client_width() as f64,
    }
}

fn scroll_track(track: &web_sys::Element, left: f64, smooth: bool) {
    let options = ScrollToOptions::new();
    options.set_left(left);
    options.set_behavior(if smooth {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Instant
    });
    track.scroll_to_with_scroll_to_options(&options);
}

fn viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(1024.0)
}

#[component]
pub fn LogoCarousel(
    items: Vec<LogoCard>,
    /// Accessible name of the carousel region
    #[prop(into)]
    label: String,
    #[prop(optional)] config: Option<CarouselConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let autoplay_ms = config.autoplay_ms;
    let gap_px = config.gap_px;
    let responsive = config.responsive.clone();

    let state = StoredValue::new(CarouselState::new(config));
    let track_ref = NodeRef::<Div>::new();

    let (can_left, set_can_left) = signal(false);
    let (can_right, set_can_right) = signal(false);
    let (dragging, set_dragging) = signal(false);
    let (viewport, set_viewport) = signal(viewport_width());

    let metrics = move || {
        track_ref
            .get_untracked()
            .map(|track| read_metrics(&track))
    };

    let refresh_edges = move || {
        if let Some(m) = metrics() {
            state.with_value(|s| {
                set_can_left.set(s.can_scroll_left(&m));
                set_can_right.set(s.can_scroll_right(&m));
            });
        }
    };

    // Arrows become available after the first layout
    Effect::new(move |_| {
        if track_ref.get().is_some() {
            refresh_edges();
        }
    });

    let resize = window_event_listener(ev::resize, move |_| {
        set_viewport.set(viewport_width());
        refresh_edges();
    });
    on_cleanup(move || resize.remove());

    let go = move |direction: Direction| {
        let Some(track) = track_ref.get_untracked() else {
            return;
        };
        let m = read_metrics(&track);
        let target = state.with_value(|s| s.page_target(direction, &m));
        scroll_track(&track, target, true);
    };

    // Autoplay; the loop ends once the component is unmounted
    if let Some(ms) = autoplay_ms {
        spawn_local(async move {
            loop {
                TimeoutFuture::new(ms).await;
                if state.try_with_value(|_| ()).is_none() {
                    break;
                }
                let Some(track) = track_ref.get_untracked() else {
                    continue;
                };
                let m = read_metrics(&track);
                if let Some(Some(target)) = state.try_with_value(|s| s.autoplay_tick(&m)) {
                    scroll_track(&track, target, true);
                }
            }
        });
    }

    let on_pointer_down = move |ev: ev::PointerEvent| {
        if ev.pointer_type() != "mouse" || ev.button() != 0 {
            return;
        }
        if let Some(m) = metrics() {
            state.update_value(|s| s.pointer_down(ev.client_x() as f64, &m));
            set_dragging.set(true);
        }
    };

    let on_pointer_move = move |ev: ev::PointerEvent| {
        let Some(track) = track_ref.get_untracked() else {
            return;
        };
        let m = read_metrics(&track);
        let mut target = None;
        state.update_value(|s| target = s.pointer_move(ev.client_x() as f64, &m));
        if let Some(left) = target {
            ev.prevent_default();
            scroll_track(&track, left, false);
        }
    };

    let end_drag = move || {
        if state.with_value(|s| s.is_dragging()) {
            state.update_value(|s| {
                s.pointer_up();
            });
            set_dragging.set(false);
        }
    };

    // The click that ends a drag must not follow the link
    let on_click = move |ev: ev::MouseEvent| {
        let mut suppress = false;
        state.update_value(|s| suppress = s.take_click_suppression());
        if suppress {
            ev.prevent_default();
            ev.stop_propagation();
        }
    };

    let on_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "ArrowLeft" => {
            ev.prevent_default();
            go(Direction::Left);
        }
        "ArrowRight" => {
            ev.prevent_default();
            go(Direction::Right);
        }
        _ => {}
    };

    let slide_style = move || {
        let per_view = responsive.items_per_view(viewport.get()).max(1) as f64;
        format!(
            "flex: 0 0 calc((100% - {gap}px * {gaps}) / {per_view}); margin-right: {gap}px;",
            gap = gap_px,
            gaps = per_view - 1.0,
            per_view = per_view,
        )
    };

    let slides = items
        .into_iter()
        .map(|card| {
            let inner = view! {
                <div class="logo-card">
                    {match card.logo.clone() {
                        Some(src) => view! {
                            <img src=src alt=card.name.clone() loading="lazy" draggable="false" />
                        }.into_any(),
                        None => view! {
                            <span class="logo-card__initials">{card.initials.clone()}</span>
                        }.into_any(),
                    }}
                    <span class="logo-card__name">{card.name.clone()}</span>
                    {card.caption.clone().map(|c| view! { <span class="logo-card__caption">{c}</span> })}
                </div>
            };
            let slide = match card.href.clone() {
                Some(href) => view! {
                    <a href=href target="_blank" rel="noopener noreferrer" draggable="false">{inner}</a>
                }.into_any(),
                None => inner.into_any(),
            };
            view! {
                <div class="logo-carousel__slide" style=slide_style.clone() data-id=card.id>
                    {slide}
                </div>
            }
        })
        .collect_view();

    view! {
        <div
            class="logo-carousel"
            role="region"
            aria-roledescription="carousel"
            aria-label=label
            on:mouseenter=move |_| state.update_value(|s| s.set_hovered(true))
            on:mouseleave=move |_| {
                state.update_value(|s| s.set_hovered(false));
                end_drag();
            }
            on:focusin=move |_| state.update_value(|s| s.set_focused(true))
            on:focusout=move |_| state.update_value(|s| s.set_focused(false))
        >
            <button
                type="button"
                class="logo-carousel__arrow logo-carousel__arrow--left"
                aria-label="Anterior"
                disabled=move || !can_left.get()
                on:click=move |_| go(Direction::Left)
            >
                {icon("chevron-left")}
            </button>

            <div
                node_ref=track_ref
                class="logo-carousel__track"
                class:logo-carousel__track--dragging=move || dragging.get()
                tabindex="0"
                on:scroll=move |_| refresh_edges()
                on:keydown=on_keydown
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=move |_| end_drag()
                on:pointercancel=move |_| end_drag()
                on:click=on_click
            >
                {slides}
            </div>

            <button
                type="button"
                class="logo-carousel__arrow logo-carousel__arrow--right"
                aria-label="Siguiente"
                disabled=move || !can_right.get()
                on:click=move |_| go(Direction::Right)
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
