use crate::shared::components::FilterChip;
use crate::shared::icons::icon;
use contracts::catalog::Category;
use leptos::prelude::*;

/// Chips "Todos" + one per category, each with its item count.
#[component]
pub fn CategoryFilter(
    categories: Vec<(Category, usize)>,
    total: usize,
    #[prop(into)] selected: Signal<Option<String>>,
    #[prop(into)] on_select: Callback<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="category-filter" role="toolbar" aria-label="Categorías">
            <FilterChip
                label="Todos"
                count=total
                active=Signal::derive(move || selected.with(Option::is_none))
                on_click=Callback::new(move |_| on_select.run(None))
            />
            {categories.into_iter().map(|(category, count)| {
                let id = category.id.clone();
                let is_active = {
                    let id = id.clone();
                    Signal::derive(move || selected.with(|s| s.as_deref() == Some(id.as_str())))
                };
                view! {
                    <span class="category-filter__item">
                        <span class="category-filter__icon">{icon(category.icon_name())}</span>
                        <FilterChip
                            label=category.name.clone()
                            count=count
                            active=is_active
                            on_click=Callback::new(move |_| on_select.run(Some(id.clone())))
                        />
                    </span>
                }
            }).collect_view()}
        </div>
    }
}

/// Subcategory chips; "Todas" clears the subcategory.
#[component]
pub fn SubcategoryFilter(
    subcategories: Vec<String>,
    #[prop(into)] selected: Signal<Option<String>>,
    #[prop(into)] on_select: Callback<Option<String>>,
    #[prop(optional, into)] all_label: Option<String>,
) -> impl IntoView {
    let all_label = all_label.unwrap_or_else(|| "Todas".to_string());

    view! {
        <div class="subcategory-filter" role="toolbar" aria-label="Subcategorías">
            <FilterChip
                label=all_label
                active=Signal::derive(move || selected.with(Option::is_none))
                on_click=Callback::new(move |_| on_select.run(None))
            />
            {subcategories.into_iter().map(|sub| {
                let is_active = {
                    let sub = sub.clone();
                    Signal::derive(move || selected.with(|s| s.as_deref().map(str::trim) == Some(sub.trim())))
                };
                let value = sub.clone();
                view! {
                    <FilterChip
                        label=sub
                        active=is_active
                        on_click=Callback::new(move |_| on_select.run(Some(value.clone())))
                    />
                }
            }).collect_view()}
        </div>
    }
}
