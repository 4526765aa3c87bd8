use super::intent::{ContactIntent, ContactPrefill};
use thiserror::Error;

const DEFAULT_SUBJECT: &str = "Nuevo mensaje desde opingenieria.com";

/// Form submission state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl FormStatus {
    /// Moves to `Loading`; returns `false` when a submission is already running.
    pub fn begin_submit(&mut self) -> bool {
        if *self == FormStatus::Loading {
            return false;
        }
        *self = FormStatus::Loading;
        true
    }

    pub fn finish(&mut self, ok: bool) {
        *self = if ok {
            FormStatus::Success
        } else {
            FormStatus::Error
        };
    }

    pub fn is_loading(&self) -> bool {
        *self == FormStatus::Loading
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactFormError {
    #[error("El campo «{0}» es obligatorio")]
    MissingField(&'static str),
    #[error("El correo «{0}» no es válido")]
    InvalidEmail(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub intent: ContactIntent,
    pub source: String,
    /// Honeypot; bots fill it, people never see it.
    pub honey: String,
}

impl ContactForm {
    pub fn from_prefill(prefill: &ContactPrefill) -> Self {
        Self {
            subject: prefill.subject.clone().unwrap_or_default(),
            message: prefill.message.clone().unwrap_or_default(),
            intent: prefill.intent,
            source: prefill.source.clone(),
            ..Self::default()
        }
    }

    /// Applies a new prefill; fields the prefill leaves out keep their value.
    pub fn apply_prefill(&mut self, prefill: &ContactPrefill) {
        self.intent = prefill.intent;
        self.source = prefill.source.clone();
        if let Some(subject) = &prefill.subject {
            self.subject = subject.clone();
        }
        if let Some(message) = &prefill.message {
            self.message = message.clone();
        }
    }

    pub fn validate(&self) -> Result<(), ContactFormError> {
        if self.name.trim().is_empty() {
            return Err(ContactFormError::MissingField("nombre"));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactFormError::MissingField("email"));
        }
        let valid_email = email
            .split_once('@')
            .map(|(user, domain)| !user.is_empty() && domain.contains('.') && !domain.ends_with('.'))
            .unwrap_or(false);
        if !valid_email {
            return Err(ContactFormError::InvalidEmail(email.to_string()));
        }
        if self.message.trim().is_empty() {
            return Err(ContactFormError::MissingField("mensaje"));
        }
        Ok(())
    }

    /// Subject used for the notification e-mail.
    pub fn submission_subject(&self) -> String {
        let subject = self.subject.trim();
        if subject.is_empty() {
            DEFAULT_SUBJECT.to_string()
        } else {
            subject.to_string()
        }
    }

    /// Field pairs posted to the form endpoint, in form order.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("_template", "table".to_string()),
            ("_subject", self.submission_subject()),
            ("lead_intent", self.intent.code().to_string()),
            ("lead_source", self.source.clone()),
            ("_honey", self.honey.clone()),
            ("name", self.name.trim().to_string()),
            ("company", self.company.trim().to_string()),
            ("email", self.email.trim().to_string()),
            ("phone", self.phone.trim().to_string()),
            ("subject", self.subject.trim().to_string()),
            ("message", self.message.trim().to_string()),
        ]
    }

    /// Back to an empty form after a successful submission.
    pub fn reset(&mut self) {
        *self = Self {
            source: "direct".to_string(),
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::parse_contact_form_params;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Laura Gómez".into(),
            email: "laura@empresa.co".into(),
            message: "Necesito mantenimiento de UPS".into(),
            ..ContactForm::default()
        }
    }

    #[test]
    fn test_status_ignores_double_submit() {
        let mut status = FormStatus::default();
        assert!(status.begin_submit());
        assert!(status.is_loading());
        assert!(!status.begin_submit());
        status.finish(false);
        assert_eq!(status, FormStatus::Error);
        assert!(status.begin_submit());
        status.finish(true);
        assert_eq!(status, FormStatus::Success);
    }

    #[test]
    fn test_validate() {
        assert_eq!(filled().validate(), Ok(()));
        assert_eq!(
            ContactForm { name: " ".into(), ..filled() }.validate(),
            Err(ContactFormError::MissingField("nombre"))
        );
        assert_eq!(
            ContactForm { email: "laura@empresa".into(), ..filled() }.validate(),
            Err(ContactFormError::InvalidEmail("laura@empresa".into()))
        );
        assert_eq!(
            ContactForm { message: String::new(), ..filled() }.validate(),
            Err(ContactFormError::MissingField("mensaje"))
        );
    }

    #[test]
    fn test_prefill_and_pairs() {
        let prefill = parse_contact_form_params("", "#form?intent=visita&source=projects-cta");
        let mut form = filled();
        form.apply_prefill(&prefill);
        assert_eq!(form.subject, ContactIntent::VisitaTecnica.preset().subject);
        assert_eq!(form.name, "Laura Gómez");

        let pairs = form.to_pairs();
        assert!(pairs.contains(&("lead_intent", "visita-tecnica".to_string())));
        assert!(pairs.contains(&("lead_source", "projects-cta".to_string())));
        assert!(pairs.contains(&("_subject", "Solicitud de visita técnica".to_string())));
    }

    #[test]
    fn test_default_subject_and_reset() {
        let mut form = filled();
        assert_eq!(form.submission_subject(), DEFAULT_SUBJECT);
        form.reset();
        assert_eq!(form.name, "");
        assert_eq!(form.source, "direct");
        assert_eq!(form.intent, ContactIntent::General);
    }
}
