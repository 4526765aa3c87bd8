use super::product_card::ProductCard;
use super::product_modal::ProductDetailModal;
use crate::shared::components::{stagger_delay, ButtonLink, SectionHeader};
use crate::shared::site_data::site_data;
use contracts::catalog::Product;
use contracts::navigation::Route;
use leptos::prelude::*;

const PREVIEW_COUNT: usize = 8;

/// Products section of the landing page: one product per category first, then
/// the rest in data order.
pub fn preview_products(limit: usize) -> Vec<Product> {
    let store = &site_data().catalog;
    let mut picked: Vec<Product> = store
        .buckets
        .iter()
        .filter_map(|(_, bucket)| bucket.first().cloned())
        .collect();
    for product in &store.items {
        if picked.len() >= limit {
            break;
        }
        if !picked.iter().any(|p| p.id == product.id) {
            picked.push(product.clone());
        }
    }
    picked.truncate(limit);
    picked
}

#[component]
pub fn ProductsPreview() -> impl IntoView {
    let selected = RwSignal::new(None::<Product>);

    view! {
        <div class="products-preview">
            <SectionHeader
                eyebrow="PRODUCTOS"
                title="Portafolio técnico por especialidad"
                subtitle="Resumen de soluciones para preselección B2B antes de ingeniería de detalle y cotización con alcance claro."
                centered=true
            />
            <div class="product-grid">
                {preview_products(PREVIEW_COUNT).into_iter().enumerate().map(|(index, product)| view! {
                    <ProductCard
                        product=product
                        delay_ms=stagger_delay(index)
                        on_select=Callback::new(move |p| selected.set(Some(p)))
                    />
                }).collect_view()}
            </div>
            <div class="section-actions">
                <ButtonLink href=Route::CATALOG size="lg">"Ver catálogo técnico"</ButtonLink>
            </div>

            {move || selected.get().map(|product| view! {
                <ProductDetailModal product=product on_close=Callback::new(move |_| selected.set(None)) />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::catalog::CategorizedItem;

    #[test]
    fn test_preview_products_spread_categories() {
        let products = preview_products(PREVIEW_COUNT);
        assert!(products.len() <= PREVIEW_COUNT);

        let mut ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), products.len());

        let store = &site_data().catalog;
        let filled = store.buckets.iter().filter(|(_, b)| !b.is_empty()).count();
        let leading: Vec<Option<&str>> = products
            .iter()
            .take(filled.min(PREVIEW_COUNT))
            .map(|p| store.aliases.resolve(p.category_label()))
            .collect();
        for (i, category) in leading.iter().enumerate() {
            assert!(category.is_some());
            assert!(!leading[..i].contains(category));
        }
    }

    #[test]
    fn test_preview_products_respects_limit() {
        assert!(preview_products(0).is_empty());
        assert!(preview_products(1).len() <= 1);
    }
}
