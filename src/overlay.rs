use crate::constants::PROJECT_MODAL_ID;
use web_sys as web;

/// The modal host, created under `<body>` on first use.
fn modal_el(document: &web::Document) -> Option<web::Element> {
    if let Some(el) = document.get_element_by_id(PROJECT_MODAL_ID) {
        return Some(el);
    }
    let el = document.create_element("div").ok()?;
    el.set_id(PROJECT_MODAL_ID);
    _ = el.set_attribute("class", "folio-modal hidden");
    document.body()?.append_child(&el).ok()?;
    Some(el)
}

/// Fill the modal with `html` and show it.
pub fn show(document: &web::Document, html: &str) {
    let Some(el) = modal_el(document) else {
        return;
    };
    el.set_inner_html(html);
    _ = el.class_list().remove_1("hidden");
    // fallback for pages without the stylesheet
    _ = el.set_attribute("style", "");
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PROJECT_MODAL_ID) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "display:none");
        el.set_inner_html("");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    match document.get_element_by_id(PROJECT_MODAL_ID) {
        Some(el) => {
            el.class_list().contains("hidden")
                || el
                    .get_attribute("style")
                    .map(|s| s.contains("display:none"))
                    .unwrap_or(false)
        }
        None => true,
    }
}

/// Drop the modal element entirely.
pub fn remove(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PROJECT_MODAL_ID) {
        el.remove();
    }
}
