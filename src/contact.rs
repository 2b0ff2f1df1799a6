use crate::constants::{CONTACT_STATUS_ID, CSRF_COOKIE, CSRF_HEADER};
use crate::dom::{self, Listener};
use crate::http;
use crate::markup;
use folio_core::constants::CONTACT_URL;
use folio_core::{contact, ContactForm, StatusBanner, SubmissionError};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Value of the named input or textarea inside `form`.
fn field_value(form: &web::HtmlFormElement, name: &str) -> String {
    let Ok(Some(el)) = form.query_selector(&format!("[name='{}']", name)) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

fn read_form(form: &web::HtmlFormElement) -> ContactForm {
    ContactForm::new(
        &field_value(form, "name"),
        &field_value(form, "email"),
        &field_value(form, "message"),
    )
}

fn submit_button(form: &web::HtmlFormElement) -> Option<web::HtmlButtonElement> {
    form.query_selector("button[type='submit'], button:not([type])")
        .ok()??
        .dyn_into::<web::HtmlButtonElement>()
        .ok()
}

/// The status line, created right after the form when the page has none.
fn status_el(document: &web::Document, form: &web::HtmlFormElement) -> Option<web::Element> {
    if let Some(el) = document.get_element_by_id(CONTACT_STATUS_ID) {
        return Some(el);
    }
    let el = document.create_element("div").ok()?;
    el.set_id(CONTACT_STATUS_ID);
    _ = el.set_attribute("role", "status");
    form.after_with_node_1(&el).ok()?;
    Some(el)
}

fn show_banner(document: &web::Document, form: &web::HtmlFormElement, banner: &StatusBanner) {
    let Some(el) = status_el(document, form) else {
        return;
    };
    let (class, style) = markup::banner_attrs(banner.kind);
    _ = el.set_attribute("class", class);
    _ = el.set_attribute("style", style);
    el.set_text_content(Some(&banner.message));
}

fn clear_banner(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(CONTACT_STATUS_ID) {
        el.set_text_content(None);
        _ = el.set_attribute("style", "display:none");
    }
}

async fn submit(document: &web::Document, form: &ContactForm) -> Result<(), SubmissionError> {
    let csrf = dom::cookie(document, CSRF_COOKIE);
    let headers: Vec<(&str, &str)> = csrf
        .as_deref()
        .map(|token| vec![(CSRF_HEADER, token)])
        .unwrap_or_default();
    let resp = http::post_json(CONTACT_URL, &form.to_json(), &headers)
        .await
        .map_err(|e| SubmissionError::Network(e.to_string()))?;
    contact::check_response(resp.status, &resp.body)
}

/// Contact form bound to `#contact-form`.
pub struct ContactMount {
    listeners: Vec<Listener>,
}

impl ContactMount {
    pub fn mount(document: &web::Document, form: web::HtmlFormElement) -> Self {
        let busy = Rc::new(Cell::new(false));
        let mut listeners = Vec::new();

        let doc = document.clone();
        let form_submit = form.clone();
        if let Some(l) = Listener::new(&form, "submit", move |ev: web::Event| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            let data = read_form(&form_submit);
            if let Err(e) = data.validate() {
                let banner = StatusBanner::from_error(&SubmissionError::from(e));
                show_banner(&doc, &form_submit, &banner);
                return;
            }
            busy.set(true);
            let button = submit_button(&form_submit);
            if let Some(b) = button.as_ref() {
                b.set_disabled(true);
            }
            let doc = doc.clone();
            let form = form_submit.clone();
            let busy = busy.clone();
            spawn_local(async move {
                let outcome = submit(&doc, &data).await;
                match &outcome {
                    Ok(()) => {
                        log::info!("[contact] message sent");
                        form.reset();
                    }
                    Err(e) => log::warn!("[contact] submission failed: {}", e),
                }
                show_banner(&doc, &form, &StatusBanner::from_outcome(&outcome));
                if let Some(b) = button {
                    b.set_disabled(false);
                }
                busy.set(false);
            });
        }) {
            listeners.push(l);
        }

        let doc = document.clone();
        if let Some(l) = Listener::new(&form, "input", move |_ev: web::Event| {
            clear_banner(&doc);
        }) {
            listeners.push(l);
        }

        log::info!("[contact] mounted");
        Self { listeners }
    }

    /// Idempotent.
    pub fn teardown(&mut self) {
        if !self.listeners.is_empty() {
            self.listeners.clear();
            log::info!("[contact] unmounted");
        }
    }
}

impl Drop for ContactMount {
    fn drop(&mut self) {
        self.teardown();
    }
}
