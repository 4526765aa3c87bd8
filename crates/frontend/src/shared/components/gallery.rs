//! Image gallery for detail modals: main image, arrows, thumbnails, autoplay.

use super::optimized_image::{placeholder_src, OptimizedImage};
use crate::shared::icons::icon;
use contracts::media::GalleryCursor;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn ImageGallery(images: Vec<String>, #[prop(into)] alt: String) -> impl IntoView {
    let cursor = RwSignal::new(GalleryCursor::new(images.len()));
    let images = StoredValue::new(images);

    if cursor.get_untracked().is_autoplaying() {
        spawn_local(async move {
            loop {
                TimeoutFuture::new(GalleryCursor::AUTOPLAY_MS).await;
                let mut moved = false;
                if cursor.try_update(|c| moved = c.tick()).is_none() || !moved {
                    break;
                }
            }
        });
    }

    let active_src = Signal::derive(move || {
        let index = cursor.with(|c| c.active());
        images.with_value(|list| list.get(index).cloned().unwrap_or_else(placeholder_src))
    });
    let many = images.with_value(|list| list.len() > 1);

    view! {
        <div class="gallery">
            <div class="gallery__stage">
                <OptimizedImage src=active_src alt=alt.clone() class="gallery__image" eager=true />
                {move || cursor.with(|c| c.position_label()).map(|label| view! {
                    <span class="gallery__position">{label}</span>
                })}
                <Show when=move || many>
                    <button
                        type="button"
                        class="gallery__arrow gallery__arrow--left"
                        aria-label="Imagen anterior"
                        on:click=move |_| cursor.update(|c| c.prev())
                    >
                        {icon("chevron-left")}
                    </button>
                    <button
                        type="button"
                        class="gallery__arrow gallery__arrow--right"
                        aria-label="Siguiente imagen"
                        on:click=move |_| cursor.update(|c| c.next())
                    >
                        {icon("chevron-right")}
                    </button>
                </Show>
            </div>

            <Show when=move || many>
                <div class="gallery__thumbs">
                    {images.with_value(|list| list.iter().cloned().enumerate().map(|(index, src)| {
                        view! {
                            <button
                                type="button"
                                class="gallery__thumb"
                                class:gallery__thumb--active=move || cursor.with(|c| c.active() == index)
                                aria-label=format!("Ver imagen {}", index + 1)
                                on:click=move |_| cursor.update(|c| c.select(index))
                            >
                                <img src=src alt="" loading="lazy" />
                            </button>
                        }
                    }).collect_view())}
                </div>
            </Show>
        </div>
    }
}
