use crate::shared::components::ButtonLink;
use crate::shared::icons::icon;
use contracts::navigation::Route;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <div class="empty-state">
                {icon("alert-circle")}
                <h1>"Página no encontrada"</h1>
                <p>"La dirección que buscas no existe o fue movida."</p>
                <ButtonLink href=Route::HOME>{icon("arrow-left")} " Volver al inicio"</ButtonLink>
            </div>
        </div>
    }
}
