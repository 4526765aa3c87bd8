use crate::domain::catalog::ui::category_filter::SubcategoryFilter;
use crate::shared::components::{stagger_delay, CardAnimated, LogoCard};
use contracts::showcase::{categories_of, LogoFilter, LogoItem};
use leptos::prelude::*;
use thaw::*;

#[component]
fn LogoTile(card: LogoCard, delay_ms: u32) -> impl IntoView {
    let logo = match card.logo.clone() {
        Some(src) => view! { <img src=src alt=card.name.clone() loading="lazy" /> }.into_any(),
        None => view! { <span class="logo-card__initials">{card.initials.clone()}</span> }.into_any(),
    };
    let body = view! {
        <div class="logo-card logo-card--tile">
            {logo}
            <span class="logo-card__name">{card.name.clone()}</span>
            {card.caption.clone().map(|c| view! { <span class="logo-card__caption">{c}</span> })}
        </div>
    };

    view! {
        <CardAnimated delay_ms=delay_ms class="logo-tile">
            {match card.href {
                Some(href) => view! {
                    <a href=href target="_blank" rel="noopener noreferrer">{body}</a>
                }.into_any(),
                None => body.into_any(),
            }}
        </CardAnimated>
    }
}

/// Logo grid with name search, category chips and a "featured only" switch.
#[component]
pub fn LogoGrid<T>(
    items: &'static [T],
    #[prop(into)] search_placeholder: String,
    #[prop(into)] empty_text: String,
) -> impl IntoView
where
    T: LogoItem + Send + Sync + 'static,
{
    let search = RwSignal::new(String::new());
    let featured_only = RwSignal::new(false);
    let category = RwSignal::new(None::<String>);
    let categories = categories_of(items);

    let filter = Memo::new(move |_| LogoFilter {
        search: search.get(),
        category: category.get(),
        featured_only: featured_only.get(),
    });

    let visible = move || {
        filter.with(|f| {
            f.apply(items)
                .into_iter()
                .map(LogoCard::from_item)
                .collect::<Vec<_>>()
        })
    };

    let clear = move |_| {
        search.set(String::new());
        category.set(None);
        featured_only.set(false);
    };

    view! {
        <div class="logo-grid">
            <div class="logo-grid__filters">
                <Input value=search placeholder=search_placeholder />
                <Switch checked=featured_only label="Solo destacados" />
                <Show when=move || filter.with(LogoFilter::is_active)>
                    <button type="button" class="link-button" on:click=clear>"Limpiar filtros"</button>
                </Show>
            </div>

            {(!categories.is_empty()).then(|| view! {
                <SubcategoryFilter
                    subcategories=categories
                    all_label="Todos los sectores"
                    selected=category
                    on_select=Callback::new(move |c| category.set(c))
                />
            })}

            {move || {
                let cards = visible();
                if cards.is_empty() {
                    view! { <p class="empty-state">{empty_text.clone()}</p> }.into_any()
                } else {
                    view! {
                        <div class="logo-grid__items">
                            {cards.into_iter().enumerate().map(|(index, card)| view! {
                                <LogoTile card=card delay_ms=stagger_delay(index) />
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
