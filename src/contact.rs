use crate::dom;
use folio_core::form::{
    submit_contact, ButtonStyle, ContactRequest, SubmitError, SubmitView, Timer, Transport,
    SUBMIT_BUTTON_SELECTOR,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

struct FormView {
    form: web::HtmlFormElement,
    button: web::HtmlButtonElement,
}

impl SubmitView for FormView {
    fn label(&self) -> String {
        self.button.inner_text()
    }

    fn set_label(&mut self, label: &str) {
        self.button.set_inner_text(label);
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.button.set_disabled(!enabled);
    }

    fn apply_style(&mut self, style: ButtonStyle) {
        dom::set_style(&self.button, "background", style.background);
        dom::set_style(&self.button, "color", style.color);
    }

    fn reset_fields(&mut self) {
        self.form.reset();
    }
}

/// Fetch POST of a snapshot of the form's fields.
struct FetchTransport {
    body: web::FormData,
}

impl Transport for FetchTransport {
    async fn post(&self, request: &ContactRequest) -> Result<u16, SubmitError> {
        let js_err = |e: wasm_bindgen::JsValue| SubmitError::Network(format!("{:?}", e));
        let window = web::window().ok_or_else(|| SubmitError::Network("no window".into()))?;

        let headers = web::Headers::new().map_err(js_err)?;
        headers.set("Accept", request.accept).map_err(js_err)?;
        let init = web::RequestInit::new();
        init.set_method("POST");
        init.set_body(&self.body);
        init.set_headers(&headers);
        let req = web::Request::new_with_str_and_init(&request.endpoint, &init).map_err(js_err)?;

        let resp = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(js_err)?;
        let resp: web::Response = resp.dyn_into().map_err(js_err)?;
        Ok(resp.status())
    }
}

struct DomTimer;

impl Timer for DomTimer {
    async fn sleep_ms(&self, ms: i32) {
        dom::sleep_ms(ms).await;
    }
}

/// `submit` handler for `#contactForm`. Without a submit button the browser's
/// own submission goes ahead untouched.
pub fn on_submit(ev: &web::Event) {
    let Some(form) = ev
        .current_target()
        .and_then(|t| t.dyn_into::<web::HtmlFormElement>().ok())
    else {
        return;
    };
    let Some(button) = form
        .query_selector(SUBMIT_BUTTON_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
    else {
        log::debug!("[contact] no {} in form", SUBMIT_BUTTON_SELECTOR);
        return;
    };
    ev.prevent_default();

    let body = match web::FormData::new_with_form(&form) {
        Ok(b) => b,
        Err(e) => {
            log::error!("[contact] could not read form: {:?}", e);
            return;
        }
    };
    let request = ContactRequest::new(form.action());
    let mut view = FormView { form, button };
    spawn_local(async move {
        let outcome = submit_contact(&mut view, &FetchTransport { body }, &DomTimer, &request).await;
        log::info!("[contact] submission finished: {:?}", outcome);
    });
}
