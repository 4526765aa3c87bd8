use leptos::prelude::*;

/// Section heading with eyebrow text and an optional lead paragraph
#[component]
pub fn SectionHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] eyebrow: Option<String>,
    #[prop(optional, into)] subtitle: Option<String>,
    /// Centered variant for landing sections
    #[prop(optional)]
    centered: bool,
) -> impl IntoView {
    view! {
        <div class="section-header" class:section-header--centered=centered>
            {eyebrow.map(|e| view! { <span class="section-header__eyebrow">{e}</span> })}
            <h2 class="section-header__title">{title}</h2>
            {subtitle.map(|s| view! { <p class="section-header__subtitle">{s}</p> })}
        </div>
    }
}
