//! Image with a loading placeholder and a fallback source.

use crate::shared::icons::icon;
use contracts::data::asset_base;
use contracts::media::{public_asset, ImageLoadState, ImageSource};
use leptos::prelude::*;

/// Placeholder used when an item has no image of its own.
pub fn placeholder_src() -> String {
    public_asset("/placeholder.svg", asset_base())
}

#[component]
pub fn OptimizedImage(
    #[prop(into)] src: Signal<String>,
    #[prop(into)] alt: String,
    /// Tried once when `src` fails; defaults to the site placeholder.
    #[prop(optional, into)]
    fallback: Option<String>,
    #[prop(optional, into)] class: String,
    /// `eager` for images above the fold.
    #[prop(optional)]
    eager: bool,
) -> impl IntoView {
    let fallback = fallback.or_else(|| Some(placeholder_src()));
    let source = RwSignal::new(ImageSource::new(src.get_untracked(), fallback));

    // A new src (gallery step, another product) restarts loading
    Effect::new(move |prev: Option<String>| {
        let next = src.get();
        if prev.as_ref().is_some_and(|p| *p != next) {
            source.update(|s| s.reset(next.clone()));
        }
        next
    });

    let state = move || source.with(|s| s.state());
    let current = move || source.with(|s| s.current_src().map(str::to_string));

    view! {
        <div
            class=format!("optimized-image {}", class)
            class:optimized-image--loading=move || state() == ImageLoadState::Loading
        >
            {move || match current() {
                Some(url) => view! {
                    <img
                        src=url
                        alt=alt.clone()
                        loading=if eager { "eager" } else { "lazy" }
                        decoding="async"
                        on:load=move |_| source.update(|s| s.on_load())
                        on:error=move |_| {
                            log::debug!("image failed: {:?}", source.with_untracked(|s| s.current_src().map(str::to_string)));
                            source.update(|s| s.on_error());
                        }
                    />
                }.into_any(),
                None => view! {
                    <div class="optimized-image__missing">
                        {icon("image-off")}
                        <span>"Imagen no disponible"</span>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
