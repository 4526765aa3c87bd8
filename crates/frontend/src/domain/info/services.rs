use crate::domain::contact::ui::ContactCta;
use crate::domain::marketing::ui::ServicesSection;
use crate::shared::components::{ButtonLink, SectionHeader};
use contracts::contact::{build_contact_intent_href, ContactIntent, ContactLink};
use contracts::navigation::Route;
use leptos::prelude::*;

#[component]
pub fn ServicesPage() -> impl IntoView {
    let diagnostic = build_contact_intent_href(&ContactLink::intent(
        ContactIntent::Diagnostico,
        "services-page-hero",
    ));

    view! {
        <div class="page page--services">
            <section class="hero hero--dark">
                <SectionHeader
                    eyebrow="SERVICIOS"
                    title="Servicios de ingeniería eléctrica"
                    subtitle="Del diagnóstico a la puesta en marcha, con soporte técnico durante toda la operación."
                />
                <div class="hero__actions">
                    <ButtonLink href=diagnostic size="lg">"Solicitar diagnóstico"</ButtonLink>
                    <ButtonLink href=Route::CATALOG variant="outline" size="lg">"Ver catálogo"</ButtonLink>
                </div>
            </section>
            <section>
                <ServicesSection />
            </section>
            <ContactCta source="services-page" />
        </div>
    }
}
