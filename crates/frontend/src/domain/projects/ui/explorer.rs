use super::project_card::ProjectCard;
use super::project_modal::ProjectDetailModal;
use crate::domain::catalog::ui::category_filter::SubcategoryFilter;
use crate::shared::components::{placeholder_src, stagger_delay, CardAnimated, OptimizedImage, SectionHeader};
use crate::shared::icons::icon;
use crate::shared::listing::ListingViewModel;
use crate::shared::site_data::site_data;
use contracts::catalog::{representative_image, CategorizedItem, Category, Project};
use leptos::prelude::*;

pub type ProjectsViewModel = ListingViewModel<Project>;

const DEFAULT_CATEGORY_DESCRIPTION: &str =
    "Implementaciones en campo con enfoque en seguridad, continuidad y desempeño verificable.";

pub fn category_description(id: &str) -> &'static str {
    match id {
        "grupos-electrogenos" => "Integración de plantas y transferencias para continuidad operativa en cargas críticas.",
        "energia-fotovoltaica" => "Sistemas solares con diseño técnico, protecciones y seguimiento de desempeño energético.",
        "ups" => "Respaldo inmediato para procesos sensibles, con autonomía validada y pruebas funcionales.",
        "baterias" => "Bancos de baterías para respaldo confiable, gestión de vida útil y mantenimiento planificado.",
        "rectificadores" => "Conversión y carga DC para infraestructura crítica con estabilidad y trazabilidad técnica.",
        "obras-electricas" => "Obras eléctricas e iluminación con seguridad, calidad de ejecución y cumplimiento en campo.",
        "mantenimientos" => "Mantenimiento preventivo y correctivo con reportes técnicos y mejora de disponibilidad.",
        "aire-acondicionado" => "Climatización para continuidad de operación, eficiencia energética y control ambiental.",
        _ => DEFAULT_CATEGORY_DESCRIPTION,
    }
}

/// Display name of a project's category; the raw label when it matches none.
pub fn project_category_name(project: &Project) -> String {
    let store = &site_data().projects;
    store
        .aliases
        .resolve(project.category_label())
        .and_then(|id| store.category(id))
        .map(|c| c.name.clone())
        .unwrap_or_else(|| project.category.clone())
}

#[component]
fn CategoryTile(category: Category, vm: ProjectsViewModel, index: usize) -> impl IntoView {
    let bucket = vm.store().buckets.get(&category.id);
    let cover = representative_image(bucket, &placeholder_src());
    let count = bucket.len();
    let id = category.id.clone();

    view! {
        <CardAnimated delay_ms=stagger_delay(index) class="category-tile">
            <button
                type="button"
                class="category-tile__body"
                on:click=move |_| vm.select_category(Some(id.clone()))
            >
                <OptimizedImage src=cover alt=category.name.clone() class="category-tile__image" />
                <div class="category-tile__text">
                    <span class="category-tile__icon">{icon(category.icon_name())}</span>
                    <h3>{category.name.clone()}</h3>
                    <p>{category_description(&category.id)}</p>
                    <span class="category-tile__count">
                        {if count == 1 { "1 proyecto".to_string() } else { format!("{} proyectos", count) }}
                    </span>
                </div>
            </button>
        </CardAnimated>
    }
}

#[component]
pub fn ProjectsExplorer() -> impl IntoView {
    let vm = ProjectsViewModel::new(&site_data().projects);
    let is_grid = move || vm.projection.with(|p| p.is_grid());

    let grid = move || {
        vm.store()
            .categories
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, category)| view! { <CategoryTile category=category vm=vm index=index /> })
            .collect_view()
    };

    let category_view = move || {
        let (name, id, subcategories, visible) = vm.projection.with(|p| {
            let active = p.active.clone().unwrap_or_else(|| Category::new("", ""));
            (active.name, active.id, p.subcategories.clone(), p.visible.clone())
        });

        view! {
            <div class="projects-category">
                <div class="projects-category__head">
                    <button type="button" class="link-button" on:click=move |_| vm.select_category(None)>
                        {icon("arrow-left")} "Todas las categorías"
                    </button>
                    <h3>{name}</h3>
                    <p>{category_description(&id)}</p>
                </div>

                {(!subcategories.is_empty()).then(|| view! {
                    <SubcategoryFilter
                        subcategories=subcategories
                        all_label="Todos"
                        selected=vm.selected_subcategory()
                        on_select=Callback::new(move |sub| vm.select_subcategory(sub))
                    />
                })}

                {if visible.is_empty() {
                    view! {
                        <div class="empty-state">
                            {icon("image-off")}
                            <p>"Aún no hay proyectos publicados en esta categoría."</p>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <div class="project-grid">
                            {visible.into_iter().enumerate().map(|(index, project)| view! {
                                <ProjectCard
                                    project=project
                                    delay_ms=stagger_delay(index)
                                    on_select=Callback::new(move |p| vm.open(p))
                                />
                            }).collect_view()}
                        </div>
                    }.into_any()
                }}
            </div>
        }
    };

    view! {
        <div class="projects-explorer">
            <SectionHeader
                title="Proyectos ejecutados"
                subtitle="Selecciona una categoría para revisar casos aplicados en campo."
            />
            {move || if is_grid() {
                view! { <div class="category-grid">{grid()}</div> }.into_any()
            } else {
                category_view().into_any()
            }}

            {move || vm.selected.get().map(|project| {
                let category = project_category_name(&project);
                view! {
                    <ProjectDetailModal
                        project=project
                        category=category
                        on_close=Callback::new(move |_| vm.close())
                    />
                }
            })}
        </div>
    }
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <div class="page page--projects">
            <section class="hero hero--dark">
                <SectionHeader
                    eyebrow="PROYECTOS"
                    title="Casos reales con evidencia técnica"
                    subtitle="Explora por categoría: continuidad, respaldo, distribución y soluciones solares con pruebas, comisionamiento y trazabilidad."
                />
            </section>
            <section class="projects">
                <ProjectsExplorer />
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_description_fallback() {
        assert!(category_description("ups").contains("Respaldo"));
        assert_eq!(category_description("desconocida"), DEFAULT_CATEGORY_DESCRIPTION);
    }
}
