use crate::shared::components::{Badge, CardAnimated, OptimizedImage};
use crate::shared::list_utils::highlight_matches;
use contracts::catalog::{CategorizedItem, Project};
use leptos::prelude::*;

const FALLBACK_DESCRIPTION: &str =
    "Implementación en campo con enfoque en seguridad, pruebas y continuidad operativa.";

#[component]
pub fn ProjectCard(
    project: Project,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] highlight: MaybeProp<String>,
    #[prop(into)] on_select: Callback<Project>,
) -> impl IntoView {
    let cover = project.cover_image().unwrap_or_default().to_string();
    let name = project.name.clone();
    let highlighted_name = name.clone();
    let client = project.client.clone();
    let subcategory = project.subcategory().map(str::to_string);
    let description = if project.description.trim().is_empty() {
        FALLBACK_DESCRIPTION.to_string()
    } else {
        project.description.clone()
    };
    let photos = project.images.len();

    view! {
        <CardAnimated delay_ms=delay_ms class="project-card">
            <button
                type="button"
                class="project-card__body"
                aria-label=format!("Ver caso {}", name)
                on:click=move |_| on_select.run(project.clone())
            >
                <OptimizedImage src=cover alt=name.clone() class="project-card__image" />
                <div class="project-card__meta">
                    {subcategory.map(|s| view! { <Badge variant="primary">{s}</Badge> })}
                    {(photos > 1).then(|| view! { <Badge>{format!("{} fotos", photos)}</Badge> })}
                </div>
                <h3 class="project-card__title">
                    {move || highlight_matches(&highlighted_name, &highlight.get().unwrap_or_default())}
                </h3>
                <p class="project-card__client">{client}</p>
                <p class="project-card__description">{description}</p>
                <span class="project-card__more">"Ver caso"</span>
            </button>
        </CardAnimated>
    }
}
