use crate::domain::contact::api;
use contracts::contact::{ContactForm, ContactPrefill, FormStatus};
use leptos::prelude::*;

/// Contact form view model
#[derive(Clone, Copy)]
pub struct ContactFormViewModel {
    pub form: RwSignal<ContactForm>,
    pub status: RwSignal<FormStatus>,
    /// Field validation error (before submitting)
    pub error: RwSignal<Option<String>>,
}

impl ContactFormViewModel {
    pub fn new(prefill: &ContactPrefill) -> Self {
        Self {
            form: RwSignal::new(ContactForm::from_prefill(prefill)),
            status: RwSignal::new(FormStatus::Idle),
            error: RwSignal::new(None),
        }
    }

    /// A new prefill (link followed while the page is open) keeps the fields the
    /// link does not carry.
    pub fn apply_prefill(&self, prefill: &ContactPrefill) {
        self.form.update(|f| f.apply_prefill(prefill));
    }

    /// Any edit clears a finished status.
    pub fn edit(&self, update: impl FnOnce(&mut ContactForm)) {
        self.form.update(update);
        self.error.set(None);
        self.status.update(|s| {
            if !s.is_loading() {
                *s = FormStatus::Idle;
            }
        });
    }

    pub fn submit_command(&self) {
        let current = self.form.get_untracked();
        if let Err(e) = current.validate() {
            self.error.set(Some(e.to_string()));
            return;
        }

        let mut started = false;
        self.status.update(|s| started = s.begin_submit());
        if !started {
            return;
        }
        self.error.set(None);

        let form = self.form;
        let status = self.status;
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::submit_contact_form(&current).await;
            if let Err(e) = &result {
                log::warn!("contact form submission failed: {}", e);
            }
            let ok = result.is_ok();
            if ok {
                let _ = form.try_update(|f| f.reset());
            }
            let _ = status.try_update(|s| s.finish(ok));
        });
    }
}
