use super::view_model::ContactFormViewModel;
use contracts::contact::{FormStatus, CONTACT_DATA};
use leptos::prelude::*;
use crate::shared::components::Button;

const SUCCESS_TEXT: &str = "Mensaje enviado correctamente. Te responderemos pronto.";
const ERROR_PREFIX: &str = "No pudimos enviar el mensaje. Inténtalo de nuevo o escríbenos a";

/// Text field bound to one form field
#[component]
fn Field(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] kind: String,
    #[prop(into)] placeholder: String,
    #[prop(optional)] required: bool,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for=id.clone()>{label}</label>
            <input
                id=id.clone()
                name=id.trim_start_matches("contact-").to_string()
                type=kind
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn ContactFormView(vm: ContactFormViewModel) -> impl IntoView {
    let field = move |read: fn(&contracts::contact::ContactForm) -> String| {
        Signal::derive(move || vm.form.with(read))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_command();
    };

    let is_loading = move || vm.status.get().is_loading();

    view! {
        <form class="contact-form" on:submit=on_submit autocomplete="on" aria-busy=move || is_loading().to_string()>
            // Honeypot: hidden from people
            <input
                class="contact-form__honey"
                type="text"
                name="_honey"
                tabindex="-1"
                autocomplete="off"
                aria-hidden="true"
                prop:value=move || vm.form.with(|f| f.honey.clone())
                on:input=move |ev| vm.edit(|f| f.honey = event_target_value(&ev))
            />

            <div class="contact-form__row">
                <Field
                    id="contact-name" label="Nombre" kind="text" placeholder="Tu nombre" required=true
                    value=field(|f| f.name.clone())
                    on_input=Callback::new(move |v| vm.edit(|f| f.name = v))
                />
                <Field
                    id="contact-company" label="Empresa (opcional)" kind="text" placeholder="Nombre de tu empresa"
                    value=field(|f| f.company.clone())
                    on_input=Callback::new(move |v| vm.edit(|f| f.company = v))
                />
            </div>
            <div class="contact-form__row">
                <Field
                    id="contact-email" label="Email" kind="email" placeholder="tu@email.com" required=true
                    value=field(|f| f.email.clone())
                    on_input=Callback::new(move |v| vm.edit(|f| f.email = v))
                />
                <Field
                    id="contact-phone" label="Teléfono (opcional)" kind="tel" placeholder="Ej: +57 300 000 0000"
                    value=field(|f| f.phone.clone())
                    on_input=Callback::new(move |v| vm.edit(|f| f.phone = v))
                />
            </div>
            <Field
                id="contact-subject" label="Asunto" kind="text" placeholder="Asunto del mensaje" required=true
                value=field(|f| f.subject.clone())
                on_input=Callback::new(move |v| vm.edit(|f| f.subject = v))
            />

            <div class="form-field">
                <label for="contact-message">"Mensaje"</label>
                <textarea
                    id="contact-message"
                    name="message"
                    rows="6"
                    required=true
                    placeholder="Ej: Planta 100 kVA para bodega en Bogotá, con transferencia automática..."
                    prop:value=move || vm.form.with(|f| f.message.clone())
                    on:input=move |ev| vm.edit(|f| f.message = event_target_value(&ev))
                ></textarea>
            </div>

            {move || vm.error.get().map(|e| view! { <p class="contact-form__error">{e}</p> })}

            <Button button_type="submit" size="lg" disabled=Signal::derive(is_loading)>
                {move || if is_loading() { "Enviando..." } else { "Enviar mensaje" }}
            </Button>

            <div aria-live="polite">
                {move || match vm.status.get() {
                    FormStatus::Success => view! {
                        <p class="contact-form__status contact-form__status--ok">{SUCCESS_TEXT}</p>
                    }.into_any(),
                    FormStatus::Error => view! {
                        <p class="contact-form__status contact-form__status--error">
                            {ERROR_PREFIX} " "
                            <a href=CONTACT_DATA.mailto_href()>{CONTACT_DATA.email}</a>
                            "."
                        </p>
                    }.into_any(),
                    _ => view! { <></> }.into_any(),
                }}
            </div>

            <p class="contact-form__privacy">
                "Al enviar, aceptas ser contactado para atender tu solicitud técnica. No compartimos tu información."
            </p>
        </form>
    }
}
