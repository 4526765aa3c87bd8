use crate::domain::marketing::content::HERO_STATS;
use crate::shared::components::ButtonLink;
use crate::shared::icons::icon;
use contracts::navigation::{HomeSection, Route};
use leptos::prelude::*;

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <div class="hero hero--home">
            <span class="hero__badge">{icon("award")} "INGENIERÍA ELÉCTRICA DESDE 2014"</span>
            <h1 class="hero__title">
                "Soluciones integrales en "
                <span class="hero__accent">"Ingeniería Eléctrica"</span>
            </h1>
            <p class="hero__subtitle">
                "Proyectos eléctricos, electromecánicos y energía solar para la industria, el comercio y el hogar. "
                "Respaldo energético, tableros, mantenimiento y modernización con ejecución en campo."
            </p>
            <div class="hero__actions">
                <ButtonLink href=HomeSection::Products.href() size="lg">
                    "Explorar soluciones" {icon("arrow-right")}
                </ButtonLink>
                <ButtonLink href=Route::PROJECTS variant="outline" size="lg">"Ver proyectos"</ButtonLink>
            </div>
            <dl class="hero__stats">
                {HERO_STATS.iter().map(|stat| view! {
                    <div class="hero__stat">
                        <dt>{stat.value}</dt>
                        <dd>{stat.label}</dd>
                    </div>
                }).collect_view()}
            </dl>
        </div>
    }
}
