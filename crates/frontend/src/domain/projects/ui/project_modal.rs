use crate::shared::components::{Badge, ButtonLink, ImageGallery};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::catalog::Project;
use contracts::contact::{build_contact_intent_href, ContactIntent, ContactLink};
use leptos::prelude::*;

#[component]
pub fn ProjectDetailModal(
    project: Project,
    /// Display name of the project's category
    #[prop(into)]
    category: String,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let similar_href = build_contact_intent_href(&ContactLink {
        subject: Some(format!("Proyecto similar a: {}", project.name)),
        ..ContactLink::intent(ContactIntent::Casos, "project-modal")
    });

    view! {
        <Modal title=project.name.clone() subtitle=project.client.clone() on_close=on_close class="modal--project">
            <div class="project-detail">
                <ImageGallery images=project.images.clone() alt=project.name.clone() />
                <div class="project-detail__info">
                    <div class="project-detail__badges">
                        <Badge variant="primary">{category}</Badge>
                        {project.subcategories.iter().cloned().map(|s| view! { <Badge>{s}</Badge> }).collect_view()}
                    </div>
                    <p class="project-detail__client">{icon("building")} " " {project.client.clone()}</p>
                    <p class="project-detail__description">{project.description.clone()}</p>
                    <div class="project-detail__actions">
                        <ButtonLink href=similar_href>
                            {icon("send")} "Solicitar un proyecto similar"
                        </ButtonLink>
                    </div>
                </div>
            </div>
        </Modal>
    }
}
