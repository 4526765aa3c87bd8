use crate::shared::components::ButtonLink;
use crate::shared::icons::icon;
use contracts::contact::{build_contact_intent_href, ContactIntent, ContactLink, CONTACT_DATA};
use leptos::prelude::*;

/// Closing call-to-action block: quote through the form or WhatsApp.
#[component]
pub fn ContactCta(
    /// Tracked as `source` in the contact link
    #[prop(into)]
    source: String,
) -> impl IntoView {
    let quote_href =
        build_contact_intent_href(&ContactLink::intent(ContactIntent::Cotizacion, &source));

    view! {
        <section class="cta-section">
            <span class="cta-section__badge">
                {icon("award")}
                "Ingeniería eléctrica e industrial con estándares profesionales"
            </span>
            <h2 class="cta-section__title">"¿Listo para llevar tu proyecto al siguiente nivel?"</h2>
            <p class="cta-section__subtitle">
                "En O&P Ingeniería diseñamos, implementamos y ejecutamos soluciones eléctricas e "
                "industriales con altos estándares de calidad, confiabilidad y seguridad."
            </p>
            <div class="cta-section__actions">
                <ButtonLink href=quote_href size="lg">
                    {icon("file-text")} "Solicitar cotización"
                </ButtonLink>
                <ButtonLink href=CONTACT_DATA.whatsapp_href() variant="whatsapp" size="lg">
                    {icon("message-circle")} "Cotizar por WhatsApp"
                </ButtonLink>
            </div>
            <p class="cta-section__footer">"Respuesta ágil • Asesoría técnica • Alcance definido"</p>
        </section>
    }
}
