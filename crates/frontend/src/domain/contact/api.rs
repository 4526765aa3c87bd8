//! Submits the contact form to the external form service.

use contracts::contact::{ContactForm, CONTACT_DATA};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{AbortController, FormData};

/// Abort the request when the form service does not answer in time.
const SUBMIT_TIMEOUT_MS: u32 = 15_000;

fn to_form_data(form: &ContactForm) -> Result<FormData, String> {
    let data = FormData::new().map_err(|e| format!("{e:?}"))?;
    for (name, value) in form.to_pairs() {
        data.append_with_str(name, &value)
            .map_err(|e| format!("{e:?}"))?;
    }
    Ok(data)
}

/// POSTs the form as multipart data; any non-2xx answer is an error.
pub async fn submit_contact_form(form: &ContactForm) -> Result<(), String> {
    let body = to_form_data(form)?;
    let controller = AbortController::new().map_err(|e| format!("{e:?}"))?;
    let signal = controller.signal();

    let timer = controller.clone();
    spawn_local(async move {
        TimeoutFuture::new(SUBMIT_TIMEOUT_MS).await;
        timer.abort();
    });

    let response = Request::post(&CONTACT_DATA.form_endpoint())
        .header("Accept", "application/json")
        .abort_signal(Some(&signal))
        .body(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!(
            "form service answered {} {}",
            response.status(),
            response.status_text()
        ));
    }
    Ok(())
}
