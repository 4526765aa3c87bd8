use crate::domain::marketing::content::SERVICES;
use crate::shared::components::{stagger_delay, CardAnimated, SectionHeader};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <div class="services">
            <SectionHeader
                eyebrow="SERVICIOS"
                title="Lo que hacemos"
                subtitle="Ingeniería, suministro, instalación y mantenimiento con un solo responsable técnico."
                centered=true
            />
            <div class="services__grid">
                {SERVICES.iter().enumerate().map(|(index, service)| view! {
                    <CardAnimated delay_ms=stagger_delay(index) class="service-card">
                        <span class="service-card__icon">{icon(service.icon)}</span>
                        <h3>{service.title}</h3>
                        <p>{service.description}</p>
                    </CardAnimated>
                }).collect_view()}
            </div>
        </div>
    }
}
