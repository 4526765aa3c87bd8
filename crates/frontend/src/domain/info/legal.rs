use crate::shared::components::SectionHeader;
use contracts::contact::CONTACT_DATA;
use leptos::prelude::*;

const CLAUSES: [(&str, &str); 4] = [
    (
        "Tratamiento de datos",
        "Los datos enviados por el formulario de contacto se usan únicamente para responder la solicitud y preparar propuestas técnicas.",
    ),
    (
        "Conservación",
        "La información se conserva mientras exista una relación comercial o hasta que el titular solicite su eliminación.",
    ),
    (
        "Derechos del titular",
        "Puedes conocer, actualizar, rectificar o suprimir tus datos escribiendo al correo de contacto.",
    ),
    (
        "Contenido del sitio",
        "Las imágenes, fichas técnicas y precios publicados son referenciales y pueden cambiar sin previo aviso.",
    ),
];

#[component]
pub fn LegalPage() -> impl IntoView {
    view! {
        <div class="page page--legal">
            <section class="legal">
                <SectionHeader title="Aviso legal y privacidad" eyebrow="LEGAL" />
                {CLAUSES.iter().map(|(title, body)| view! {
                    <article class="legal__clause">
                        <h2>{*title}</h2>
                        <p>{*body}</p>
                    </article>
                }).collect_view()}
                <p class="legal__contact">
                    "Contacto: " <a href=CONTACT_DATA.mailto_href()>{CONTACT_DATA.email}</a>
                </p>
            </section>
        </div>
    }
}
