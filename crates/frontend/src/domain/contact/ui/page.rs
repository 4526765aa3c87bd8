use super::cta_section::ContactCta;
use super::form::{ContactFormView, ContactFormViewModel};
use crate::layout::navigation::use_navigation;
use crate::shared::components::{ButtonLink, SectionHeader};
use crate::shared::icons::icon;
use contracts::contact::{
    build_contact_intent_href, parse_contact_form_params, ContactIntent, ContactLink, CONTACT_DATA,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;

/// Delay before focusing the subject, so the anchor scroll lands first.
const FOCUS_DELAY_MS: u32 = 250;

fn focus_subject() {
    spawn_local(async {
        TimeoutFuture::new(FOCUS_DELAY_MS).await;
        if let Some(input) = document()
            .get_element_by_id("contact-subject")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let _ = input.focus();
        }
    });
}

#[component]
fn InfoRow(
    #[prop(into)] icon_name: String,
    #[prop(into)] title: String,
    #[prop(into)] value: String,
    #[prop(into)] helper: String,
    #[prop(optional, into)] href: Option<String>,
) -> impl IntoView {
    let body = view! {
        <span class="contact-info__icon">{icon(&icon_name)}</span>
        <div>
            <p class="contact-info__title">{title}</p>
            <p class="contact-info__value">{value}</p>
            <p class="contact-info__helper">{helper}</p>
        </div>
    };
    match href {
        Some(href) => view! { <a class="contact-info__row" href=href>{body}</a> }.into_any(),
        None => view! { <div class="contact-info__row">{body}</div> }.into_any(),
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let nav = use_navigation();

    let prefill = Memo::new(move |_| {
        let search = nav.search.get();
        nav.hash.with(|hash| parse_contact_form_params(&search, hash))
    });
    let vm = ContactFormViewModel::new(&prefill.get_untracked());

    // A link with a new intent followed on this same page prefills the form again
    Effect::new(move |first: Option<()>| {
        let current = prefill.get();
        if first.is_some() {
            vm.apply_prefill(&current);
        }
        if current.anchor_form {
            focus_subject();
        }
    });

    let hero_quote =
        build_contact_intent_href(&ContactLink::intent(ContactIntent::Cotizacion, "contact-hero"));

    view! {
        <div class="page page--contact">
            <section class="hero hero--dark">
                <SectionHeader
                    eyebrow="CONTACTO"
                    title="Hablemos de tu proyecto"
                    subtitle="Comparte tu necesidad técnica (UPS, baterías, plantas, tableros, solar o mantenimiento) y definimos el siguiente paso con criterio de operación."
                />
                <div class="hero__actions">
                    <ButtonLink href=hero_quote size="lg">"Ir al formulario"</ButtonLink>
                    <ButtonLink href=CONTACT_DATA.whatsapp_href() variant="outline" size="lg">
                        {icon("message-circle")} "WhatsApp"
                    </ButtonLink>
                </div>
            </section>

            <section class="contact-layout">
                <div class="contact-info">
                    <h2>"Información de contacto"</h2>
                    <InfoRow
                        icon_name="clock" title="Horario" value=CONTACT_DATA.hours
                        helper="Atención técnica en horario laboral"
                    />
                    <InfoRow
                        icon_name="mail" title="Email" value=CONTACT_DATA.email
                        helper="Alcance técnico y cotizaciones" href=CONTACT_DATA.mailto_href()
                    />
                    <InfoRow
                        icon_name="phone" title="Teléfono" value=CONTACT_DATA.phone_display
                        helper="Revisión inicial y seguimiento" href=CONTACT_DATA.phone_href
                    />
                    <InfoRow
                        icon_name="map-pin" title="Ubicación" value=CONTACT_DATA.city
                        helper="Cobertura industrial, comercial, residencial e institucional"
                    />
                </div>

                <div class="contact-form-card">
                    <h2>"Envíanos un mensaje"</h2>
                    <p class="contact-form-card__subtitle">
                        "Incluye alcance, ciudad, nivel de criticidad y ventana de intervención. "
                        "Te respondemos con orientación técnica."
                    </p>
                    <div id="form" class="contact-form-card__anchor"></div>
                    <ContactFormView vm=vm />
                </div>
            </section>

            <ContactCta source="contact-page" />
        </div>
    }
}
