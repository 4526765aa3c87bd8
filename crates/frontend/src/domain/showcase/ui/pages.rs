use super::logo_grid::LogoGrid;
use crate::domain::contact::ui::ContactCta;
use crate::shared::components::{ButtonLink, SectionHeader};
use crate::shared::site_data::site_data;
use contracts::contact::{build_contact_intent_href, ContactIntent, ContactLink};
use contracts::navigation::Route;
use leptos::prelude::*;

const PARTNER_CRITERIA: [&str; 4] = [
    "Compatibilidad eléctrica y de control entre equipos.",
    "Disponibilidad local de repuestos y soporte.",
    "Cumplimiento normativo y seguridad operativa.",
    "Desempeño comprobable en campo.",
];

#[component]
pub fn ClientsPage() -> impl IntoView {
    let diagnostic_href = build_contact_intent_href(&ContactLink::intent(
        ContactIntent::Diagnostico,
        "clients-page-hero",
    ));

    view! {
        <div class="page page--clients">
            <section class="hero hero--dark">
                <SectionHeader
                    eyebrow="CLIENTES"
                    title="Respaldo real. Confianza demostrable"
                    subtitle="Organizaciones con las que hemos trabajado en continuidad energética, energía solar e infraestructura eléctrica."
                />
                <div class="hero__actions">
                    <ButtonLink href=Route::PROJECTS size="lg">"Ver casos de éxito"</ButtonLink>
                    <ButtonLink href=diagnostic_href variant="outline" size="lg">"Solicitar diagnóstico"</ButtonLink>
                </div>
            </section>
            <section class="showcase">
                <SectionHeader title="Clientes y organizaciones" eyebrow="Explora por sector" />
                <LogoGrid
                    items=site_data().clients.as_slice()
                    search_placeholder="Buscar cliente"
                    empty_text="No hay clientes que coincidan con el filtro."
                />
            </section>
            <ContactCta source="clients-page" />
        </div>
    }
}

#[component]
pub fn PartnersPage() -> impl IntoView {
    view! {
        <div class="page page--partners">
            <section class="hero hero--dark">
                <SectionHeader
                    eyebrow="ECOSISTEMA TÉCNICO"
                    title="Marcas y aliados"
                    subtitle="Portafolio multi-marca organizado por especialidad para asegurar integración técnica, soporte y continuidad operacional."
                />
            </section>
            <section class="showcase">
                <div class="criteria">
                    <h3>"Cómo seleccionamos marcas"</h3>
                    <ul>
                        {PARTNER_CRITERIA.iter().map(|c| view! { <li>{*c}</li> }).collect_view()}
                    </ul>
                </div>
                <LogoGrid
                    items=site_data().partners.as_slice()
                    search_placeholder="Buscar marca"
                    empty_text="No hay marcas que coincidan con el filtro."
                />
            </section>
            <ContactCta source="partners-page" />
        </div>
    }
}
