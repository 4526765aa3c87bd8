use leptos::prelude::*;

/// Filter chip for category and subcategory selectors
#[component]
pub fn FilterChip(
    #[prop(into)] label: String,
    /// Item count shown next to the label
    #[prop(optional)]
    count: Option<usize>,
    #[prop(into)] active: Signal<bool>,
    #[prop(into)] on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="chip"
            class:chip--active=move || active.get()
            aria-pressed=move || active.get().to_string()
            on:click=move |_| on_click.run(())
        >
            <span>{label}</span>
            {count.map(|n| view! { <span class="chip__count">{n}</span> })}
        </button>
    }
}

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "accent", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "accent" => "badge--accent",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}
