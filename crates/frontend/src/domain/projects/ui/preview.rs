use super::explorer::project_category_name;
use super::project_card::ProjectCard;
use super::project_modal::ProjectDetailModal;
use crate::shared::components::{stagger_delay, ButtonLink, SectionHeader};
use crate::shared::site_data::site_data;
use contracts::catalog::Project;
use contracts::contact::{build_contact_intent_href, ContactIntent, ContactLink};
use contracts::navigation::Route;
use leptos::prelude::*;

const PREVIEW_COUNT: usize = 6;

#[component]
pub fn ProjectsPreview() -> impl IntoView {
    let selected = RwSignal::new(None::<Project>);
    let projects: Vec<Project> = site_data()
        .projects
        .items
        .iter()
        .take(PREVIEW_COUNT)
        .cloned()
        .collect();
    let diagnostic_href = build_contact_intent_href(&ContactLink::intent(
        ContactIntent::Diagnostico,
        "home-projects",
    ));

    view! {
        <div class="projects-preview">
            <SectionHeader
                eyebrow="PROYECTOS"
                title="Evidencia en campo. Resultados en operación"
                subtitle="Muestra breve de implementaciones en continuidad energética, respaldo, distribución y energía solar."
                centered=true
            />
            <div class="project-grid">
                {projects.into_iter().enumerate().map(|(index, project)| view! {
                    <ProjectCard
                        project=project
                        delay_ms=stagger_delay(index)
                        on_select=Callback::new(move |p| selected.set(Some(p)))
                    />
                }).collect_view()}
            </div>
            <div class="projects-preview__bottom">
                <div>
                    <h3>"¿Necesitas un caso similar en tu operación?"</h3>
                    <p>"Definimos alcance técnico, criterios de aceptación y plan de pruebas antes de cotizar."</p>
                </div>
                <div class="section-actions">
                    <ButtonLink href=diagnostic_href>"Solicitar diagnóstico"</ButtonLink>
                    <ButtonLink href=Route::PROJECTS variant="outline">"Ver todos los proyectos"</ButtonLink>
                </div>
            </div>

            {move || selected.get().map(|project| {
                let category = project_category_name(&project);
                view! {
                    <ProjectDetailModal
                        project=project
                        category=category
                        on_close=Callback::new(move |_| selected.set(None))
                    />
                }
            })}
        </div>
    }
}
