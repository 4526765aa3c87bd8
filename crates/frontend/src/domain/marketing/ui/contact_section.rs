use crate::shared::components::{ButtonLink, SectionHeader};
use crate::shared::icons::icon;
use contracts::contact::{build_contact_intent_href, ContactIntent, ContactLink, CONTACT_DATA};
use contracts::navigation::Route;
use leptos::prelude::*;

/// Landing contact block: direct channels plus links into the contact form.
#[component]
pub fn ContactSection() -> impl IntoView {
    let intents = [
        (ContactIntent::Diagnostico, "search"),
        (ContactIntent::Cotizacion, "file-text"),
        (ContactIntent::VisitaTecnica, "map-pin"),
    ];

    view! {
        <div class="contact-section">
            <SectionHeader
                eyebrow="CONTACTO"
                title="Hablemos de tu proyecto"
                subtitle="Cuéntanos la necesidad y te orientamos con el siguiente paso técnico."
                centered=true
            />
            <div class="contact-section__grid">
                <div class="contact-section__channels">
                    <a href=CONTACT_DATA.phone_href>{icon("phone")} " " {CONTACT_DATA.phone_display}</a>
                    <a href=CONTACT_DATA.mailto_href()>{icon("mail")} " " {CONTACT_DATA.email}</a>
                    <a href=CONTACT_DATA.whatsapp_href() target="_blank" rel="noopener noreferrer">
                        {icon("message-circle")} " WhatsApp"
                    </a>
                    <span>{icon("map-pin")} " " {CONTACT_DATA.city}</span>
                    <span>{icon("clock")} " " {CONTACT_DATA.hours}</span>
                </div>
                <div class="contact-section__intents">
                    {intents.into_iter().map(|(intent, icon_name)| {
                        let href = build_contact_intent_href(&ContactLink::intent(intent, "home-contact"));
                        view! {
                            <ButtonLink href=href variant="outline">
                                {icon(icon_name)} {intent.preset().label}
                            </ButtonLink>
                        }
                    }).collect_view()}
                    <ButtonLink href=Route::CONTACT>"Ir a contacto"</ButtonLink>
                </div>
            </div>
        </div>
    }
}
