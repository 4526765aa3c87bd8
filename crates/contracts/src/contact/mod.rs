pub mod form;
pub mod intent;
pub mod quote;

pub use form::{ContactForm, ContactFormError, FormStatus};
pub use intent::{
    build_contact_intent_href, normalize_contact_intent, parse_contact_form_params, ContactIntent,
    ContactLink, ContactPrefill, IntentPreset,
};

/// Company contact details
pub struct ContactData {
    pub email: &'static str,
    pub phone_display: &'static str,
    pub phone_href: &'static str,
    pub whatsapp_number: &'static str,
    pub city: &'static str,
    pub hours: &'static str,
}

impl ContactData {
    pub fn whatsapp_href(&self) -> String {
        format!("https://wa.me/{}", self.whatsapp_number)
    }

    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Endpoint the contact form posts to.
    pub fn form_endpoint(&self) -> String {
        format!("https://formsubmit.co/ajax/{}", self.email)
    }
}

pub const CONTACT_DATA: ContactData = ContactData {
    email: "info@opingenieria.com",
    phone_display: "+57 (601) 4732039",
    phone_href: "tel:+576014732039",
    whatsapp_number: "573133638760",
    city: "Bogotá, Colombia",
    hours: "Lun-Vie: 9:00-17:00",
};
