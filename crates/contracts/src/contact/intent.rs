//! Contact intent links: `/contact#form?intent=..&source=..&subject=..&message=..`.

use crate::navigation::Route;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactIntent {
    Diagnostico,
    Cotizacion,
    Catalogo,
    Casos,
    VisitaTecnica,
    #[default]
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentPreset {
    pub label: &'static str,
    pub subject: &'static str,
    pub message: &'static str,
}

impl ContactIntent {
    pub fn code(&self) -> &'static str {
        match self {
            ContactIntent::Diagnostico => "diagnostico",
            ContactIntent::Cotizacion => "cotizacion",
            ContactIntent::Catalogo => "catalogo",
            ContactIntent::Casos => "casos",
            ContactIntent::VisitaTecnica => "visita-tecnica",
            ContactIntent::General => "general",
        }
    }

    pub fn all() -> Vec<ContactIntent> {
        vec![
            ContactIntent::Diagnostico,
            ContactIntent::Cotizacion,
            ContactIntent::Catalogo,
            ContactIntent::Casos,
            ContactIntent::VisitaTecnica,
            ContactIntent::General,
        ]
    }

    pub fn preset(&self) -> IntentPreset {
        match self {
            ContactIntent::Diagnostico => IntentPreset {
                label: "Diagnóstico técnico",
                subject: "Solicitud de diagnóstico técnico",
                message: "Necesito una evaluación técnica inicial para validar criticidad, alcance y siguiente paso recomendado.",
            },
            ContactIntent::Cotizacion => IntentPreset {
                label: "Cotización técnica",
                subject: "Solicitud de cotización técnica",
                message: "Comparto requerimiento para cotización técnica con alcance, condiciones de operación y tiempos esperados.",
            },
            ContactIntent::Catalogo => IntentPreset {
                label: "Asesoría de catálogo",
                subject: "Asesoría para selección de catálogo",
                message: "Necesito orientación para seleccionar una solución del catálogo según criticidad y entorno operativo.",
            },
            ContactIntent::Casos => IntentPreset {
                label: "Revisión de casos",
                subject: "Solicitud de casos aplicados similares",
                message: "Quiero revisar casos aplicados comparables para validar enfoque técnico y resultados esperados.",
            },
            ContactIntent::VisitaTecnica => IntentPreset {
                label: "Visita técnica",
                subject: "Solicitud de visita técnica",
                message: "Requiero coordinar visita técnica para levantamiento en sitio y definición de alcance.",
            },
            ContactIntent::General => IntentPreset {
                label: "Consulta general",
                subject: "Consulta técnica general",
                message: "Comparto una necesidad técnica para recibir orientación inicial del equipo de ingeniería.",
            },
        }
    }
}

/// Maps a user-supplied intent (codes and English aliases) to a [`ContactIntent`].
pub fn normalize_contact_intent(value: Option<&str>) -> Option<ContactIntent> {
    let key = value.unwrap_or_default().trim().to_lowercase();
    match key.as_str() {
        "diagnostico" => Some(ContactIntent::Diagnostico),
        "cotizacion" | "quote" => Some(ContactIntent::Cotizacion),
        "catalogo" | "catalog" => Some(ContactIntent::Catalogo),
        "casos" | "case" => Some(ContactIntent::Casos),
        "visita-tecnica" | "visita" => Some(ContactIntent::VisitaTecnica),
        "general" => Some(ContactIntent::General),
        _ => None,
    }
}

/// Parameters of an outbound link to the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactLink {
    pub intent: Option<ContactIntent>,
    pub source: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl ContactLink {
    pub fn intent(intent: ContactIntent, source: &str) -> Self {
        Self {
            intent: Some(intent),
            source: Some(source.to_string()),
            ..Self::default()
        }
    }
}

/// Wire shape of the contact query; field order is the parameter order.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ContactQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    intent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl ContactQuery {
    fn parse(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        if query.is_empty() {
            return Self::default();
        }
        serde_qs::from_str(query).unwrap_or_default()
    }

    /// Fields present in `other` win.
    fn merged(self, other: ContactQuery) -> Self {
        Self {
            intent: other.intent.or(self.intent),
            source: other.source.or(self.source),
            subject: other.subject.or(self.subject),
            message: other.message.or(self.message),
        }
    }
}

fn trimmed(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// `/contact#form` plus the link parameters; blank values are left out.
pub fn build_contact_intent_href(link: &ContactLink) -> String {
    let query = ContactQuery {
        intent: link.intent.map(|i| i.code().to_string()),
        source: trimmed(link.source.as_deref()),
        subject: trimmed(link.subject.as_deref()),
        message: trimmed(link.message.as_deref()),
    };
    let query = serde_qs::to_string(&query).unwrap_or_default();

    if query.is_empty() {
        format!("{}#form", Route::CONTACT)
    } else {
        format!("{}#form?{}", Route::CONTACT, query)
    }
}

/// Values the contact form is pre-filled with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactPrefill {
    pub intent: ContactIntent,
    pub source: String,
    /// `None` keeps whatever the user already typed.
    pub subject: Option<String>,
    pub message: Option<String>,
    /// The location pointed at the `#form` anchor.
    pub anchor_form: bool,
}

/// Reads the prefill from `location.search` and `location.hash`.
///
/// Parameters after `#form?` override the ones in the search part. When the link
/// carries a specific intent or any text, missing subject/message fall back to the
/// intent preset.
pub fn parse_contact_form_params(search: &str, hash: &str) -> ContactPrefill {
    let hash = hash.trim_start_matches('#');
    let anchor_form = hash.starts_with("form");

    let mut params = ContactQuery::parse(search);
    if anchor_form {
        if let Some((_, hash_query)) = hash.split_once('?') {
            params = params.merged(ContactQuery::parse(hash_query));
        }
    }

    let intent = normalize_contact_intent(params.intent.as_deref()).unwrap_or_default();
    let source = trimmed(params.source.as_deref()).unwrap_or_else(|| "direct".to_string());
    let subject = trimmed(params.subject.as_deref());
    let message = trimmed(params.message.as_deref());

    let has_prefill = subject.is_some() || message.is_some() || intent != ContactIntent::General;
    let preset = intent.preset();

    ContactPrefill {
        intent,
        source,
        subject: has_prefill.then(|| subject.unwrap_or_else(|| preset.subject.to_string())),
        message: has_prefill.then(|| message.unwrap_or_else(|| preset.message.to_string())),
        anchor_form,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_contact_intent() {
        assert_eq!(normalize_contact_intent(Some(" Quote ")), Some(ContactIntent::Cotizacion));
        assert_eq!(normalize_contact_intent(Some("catalog")), Some(ContactIntent::Catalogo));
        assert_eq!(normalize_contact_intent(Some("case")), Some(ContactIntent::Casos));
        assert_eq!(normalize_contact_intent(Some("visita")), Some(ContactIntent::VisitaTecnica));
        assert_eq!(normalize_contact_intent(Some("VISITA-TECNICA")), Some(ContactIntent::VisitaTecnica));
        assert_eq!(normalize_contact_intent(Some("promo")), None);
        assert_eq!(normalize_contact_intent(Some("   ")), None);
        assert_eq!(normalize_contact_intent(None), None);
    }

    #[test]
    fn test_every_code_normalizes_to_itself() {
        for intent in ContactIntent::all() {
            assert_eq!(normalize_contact_intent(Some(intent.code())), Some(intent));
        }
    }

    #[test]
    fn test_build_href() {
        assert_eq!(build_contact_intent_href(&ContactLink::default()), "/contact#form");
        assert_eq!(
            build_contact_intent_href(&ContactLink::intent(ContactIntent::Cotizacion, " catalog-page-hero ")),
            "/contact#form?intent=cotizacion&source=catalog-page-hero"
        );
        let blank = ContactLink {
            subject: Some("   ".into()),
            ..ContactLink::intent(ContactIntent::VisitaTecnica, "")
        };
        assert_eq!(build_contact_intent_href(&blank), "/contact#form?intent=visita-tecnica");
    }

    #[test]
    fn test_href_parses_back_into_prefill() {
        let link = ContactLink {
            intent: Some(ContactIntent::Diagnostico),
            source: Some("landing-hero".into()),
            subject: Some("Revisión UPS 10 kVA".into()),
            message: None,
        };
        let href = build_contact_intent_href(&link);
        let hash = &href[href.find('#').unwrap()..];

        let prefill = parse_contact_form_params("", hash);
        assert!(prefill.anchor_form);
        assert_eq!(prefill.intent, ContactIntent::Diagnostico);
        assert_eq!(prefill.source, "landing-hero");
        assert_eq!(prefill.subject.as_deref(), Some("Revisión UPS 10 kVA"));
        assert_eq!(prefill.message.as_deref(), Some(ContactIntent::Diagnostico.preset().message));
    }

    #[test]
    fn test_hash_params_override_search() {
        let prefill = parse_contact_form_params(
            "?intent=casos&source=newsletter",
            "#form?intent=quote",
        );
        assert_eq!(prefill.intent, ContactIntent::Cotizacion);
        assert_eq!(prefill.source, "newsletter");
    }

    #[test]
    fn test_plain_visit_has_no_prefill() {
        let prefill = parse_contact_form_params("", "");
        assert_eq!(prefill.intent, ContactIntent::General);
        assert_eq!(prefill.source, "direct");
        assert_eq!(prefill.subject, None);
        assert_eq!(prefill.message, None);
        assert!(!prefill.anchor_form);

        // query after a non-form anchor is ignored
        let prefill = parse_contact_form_params("", "#mapa?intent=quote");
        assert_eq!(prefill.intent, ContactIntent::General);
    }

    #[test]
    fn test_unknown_intent_with_text_keeps_general_preset() {
        let prefill = parse_contact_form_params("?intent=promo&message=Hola", "");
        assert_eq!(prefill.intent, ContactIntent::General);
        assert_eq!(prefill.subject.as_deref(), Some(ContactIntent::General.preset().subject));
        assert_eq!(prefill.message.as_deref(), Some("Hola"));
    }
}
