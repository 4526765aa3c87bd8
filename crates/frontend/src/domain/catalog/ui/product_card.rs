use crate::shared::components::{Badge, CardAnimated, OptimizedImage};
use crate::shared::list_utils::highlight_matches;
use crate::shared::site_data::site_data;
use contracts::catalog::{CategorizedItem, Product};
use leptos::prelude::*;

/// Display name of a product's category; the raw label when it matches none.
pub fn category_name(product: &Product) -> String {
    let store = &site_data().catalog;
    store
        .aliases
        .resolve(product.category_label())
        .and_then(|id| store.category(id))
        .map(|c| c.name.clone())
        .unwrap_or_else(|| product.category.clone())
}

#[component]
pub fn ProductCard(
    product: Product,
    #[prop(optional)] delay_ms: u32,
    /// Active text filter, highlighted in the title
    #[prop(optional, into)]
    highlight: MaybeProp<String>,
    #[prop(into)] on_select: Callback<Product>,
) -> impl IntoView {
    let cover = product.cover_image().unwrap_or_default().to_string();
    let title = product.title.clone();
    let highlighted_title = title.clone();
    let category = category_name(&product);
    let subcategory = product.subcategory.clone();
    let description = product.description.clone();
    let sku = product.sku.clone();

    view! {
        <CardAnimated delay_ms=delay_ms class="product-card">
            <button
                type="button"
                class="product-card__body"
                aria-label=format!("Ver detalles de {}", title)
                on:click=move |_| on_select.run(product.clone())
            >
                <OptimizedImage src=cover alt=title.clone() class="product-card__image" />
                <div class="product-card__meta">
                    <Badge variant="primary">{category}</Badge>
                    {subcategory.map(|s| view! { <Badge>{s}</Badge> })}
                </div>
                <h3 class="product-card__title">
                    {move || highlight_matches(&highlighted_title, &highlight.get().unwrap_or_default())}
                </h3>
                <p class="product-card__description">{description}</p>
                {sku.map(|s| view! { <p class="product-card__sku">"Ref. " {s}</p> })}
                <span class="product-card__more">"Ver detalles"</span>
            </button>
        </CardAnimated>
    }
}
