use super::category_filter::{CategoryFilter, SubcategoryFilter};
use super::product_card::ProductCard;
use super::product_modal::ProductDetailModal;
use crate::shared::components::{stagger_delay, ButtonLink, SectionHeader};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::listing::ListingViewModel;
use crate::shared::site_data::site_data;
use contracts::catalog::Product;
use contracts::contact::{build_contact_intent_href, ContactIntent, ContactLink};
use contracts::navigation::Route;
use leptos::prelude::*;

pub type CatalogViewModel = ListingViewModel<Product>;

#[component]
pub fn CatalogPage() -> impl IntoView {
    let vm = CatalogViewModel::new(&site_data().catalog);
    let store = vm.store();

    let categories = store
        .categories
        .iter()
        .map(|c| (c.clone(), store.buckets.count(&c.id)))
        .collect::<Vec<_>>();
    let total = store.items.len();
    let has_filters = vm.has_filters();

    let hero_quote = build_contact_intent_href(&ContactLink::intent(
        ContactIntent::Cotizacion,
        "catalog-page-hero",
    ));

    let results_line = move || {
        vm.projection.with(|p| match &p.active {
            Some(category) => format!("{} resultados en {}", p.visible.len(), category.name),
            None => format!("{} resultados", p.visible.len()),
        })
    };

    let empty_text = move || {
        vm.projection.with(|p| match &p.active {
            Some(category) => format!("No hay productos en la categoría \"{}\".", category.name),
            None if p.selection.has_filters() => {
                "No hay productos para ese filtro. Ajusta categoría o subcategoría para ampliar resultados.".to_string()
            }
            None => "Prueba seleccionando una categoría o solicita asesoría técnica según tu criticidad."
                .to_string(),
        })
    };

    view! {
        <div class="page page--catalog">
            <section class="hero hero--dark">
                <SectionHeader
                    eyebrow="PRODUCTOS"
                    title="Catálogo de Soluciones"
                    subtitle="Infraestructura eléctrica, respaldo (UPS/baterías/plantas), energía solar y distribución para operación confiable."
                />
                <div class="hero__actions">
                    <ButtonLink href=hero_quote size="lg">{icon("file-text")} "Solicitar cotización"</ButtonLink>
                    <ButtonLink href=Route::PROJECTS variant="outline" size="lg">"Ver casos de éxito"</ButtonLink>
                </div>
            </section>

            <section class="catalog">
                <div class="catalog__filters">
                    <CategoryFilter
                        categories=categories
                        total=total
                        selected=vm.selected_category()
                        on_select=Callback::new(move |id| vm.select_category(id))
                    />

                    {move || {
                        let subcategories = vm.projection.with(|p| p.subcategories.clone());
                        (!subcategories.is_empty()).then(|| view! {
                            <SubcategoryFilter
                                subcategories=subcategories
                                selected=vm.selected_subcategory()
                                on_select=Callback::new(move |sub| vm.select_subcategory(sub))
                            />
                        })
                    }}

                    <SearchInput
                        value=vm.query()
                        on_change=Callback::new(move |q| vm.set_query(q))
                    />
                </div>

                <div class="catalog__meta">
                    <p class="catalog__results">{results_line}</p>
                    <Show when=move || has_filters.get()>
                        <button type="button" class="link-button" on:click=move |_| vm.clear_filters()>
                            {icon("x")} "Limpiar filtros"
                        </button>
                    </Show>
                </div>

                {move || {
                    let visible = vm.projection.with(|p| p.visible.clone());
                    if visible.is_empty() {
                        view! {
                            <div class="empty-state">
                                {icon("search")}
                                <h3>"No se encontraron productos"</h3>
                                <p>{empty_text()}</p>
                                <Show when=move || has_filters.get()>
                                    <button type="button" class="button button--outline" on:click=move |_| vm.clear_filters()>
                                        "Ver todos los productos"
                                    </button>
                                </Show>
                            </div>
                        }.into_any()
                    } else {
                        view! {
                            <div class="product-grid">
                                {visible.into_iter().enumerate().map(|(index, product)| view! {
                                    <ProductCard
                                        product=product
                                        delay_ms=stagger_delay(index)
                                        highlight=vm.query()
                                        on_select=Callback::new(move |p| vm.open(p))
                                    />
                                }).collect_view()}
                            </div>
                        }.into_any()
                    }
                }}
            </section>

            {move || vm.selected.get().map(|product| view! {
                <ProductDetailModal product=product on_close=Callback::new(move |_| vm.close()) />
            })}
        </div>
    }
}
