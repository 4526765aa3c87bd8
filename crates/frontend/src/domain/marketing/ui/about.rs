use crate::domain::marketing::content::{MISSION, QUALITY_POLICY, VISION};
use crate::shared::components::{CardAnimated, SectionHeader};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <div class="about">
            <SectionHeader
                eyebrow="NOSOTROS"
                title="Ingeniería con criterio de operación"
                subtitle="Más de una década ejecutando proyectos eléctricos y de respaldo energético en Colombia."
                centered=true
            />
            <div class="about__grid">
                <CardAnimated class="about-card">
                    <span class="about-card__icon">{icon("star")}</span>
                    <h3>"Misión"</h3>
                    <p>{MISSION}</p>
                </CardAnimated>
                <CardAnimated delay_ms=80 class="about-card">
                    <span class="about-card__icon">{icon("search")}</span>
                    <h3>"Visión"</h3>
                    <p>{VISION}</p>
                </CardAnimated>
                <CardAnimated delay_ms=160 class="about-card">
                    <span class="about-card__icon">{icon("award")}</span>
                    <h3>"Política de Calidad"</h3>
                    <ul>
                        {QUALITY_POLICY.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                    </ul>
                </CardAnimated>
            </div>
        </div>
    }
}
