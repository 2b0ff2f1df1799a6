// Host-side tests for DOM hook constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn field_selector_matches_attribute() {
    assert_eq!(FIELD_SELECTOR, format!("[{}]", FIELD_ATTR));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scheduling_and_layout_constants_are_sane() {
    assert!(FRAME_FALLBACK_MS > 0 && FRAME_FALLBACK_MS <= 33);
    assert!(CARD_TOOLS_SHOWN > 0);
    assert!(MOBILE_IMAGE_HEIGHT > 0);
}

#[test]
fn element_ids_are_distinct() {
    let ids = [PROJECTS_ROOT_ID, PROJECT_MODAL_ID, CONTACT_FORM_ID, CONTACT_STATUS_ID];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        assert!(!a.contains(' '));
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn carousel_css_defines_animations() {
    assert!(CAROUSEL_CSS.contains("@keyframes folio-spin"));
    assert!(CAROUSEL_CSS.contains("@keyframes folio-blink"));
    assert!(CAROUSEL_CSS.contains(".folio-modal.hidden"));
}

#[test]
fn modal_overlay_covers_viewport() {
    let rule = |sel: &str| {
        let start = CAROUSEL_CSS.find(&format!("{} {{", sel)).unwrap();
        let end = start + CAROUSEL_CSS[start..].find('}').unwrap();
        &CAROUSEL_CSS[start..end]
    };
    assert!(rule(".folio-modal").contains("position: fixed"));
    assert!(rule(".folio-modal").contains("inset: 0"));
    assert!(rule(".folio-modal-overlay").contains("position: absolute"));
    assert!(rule(".folio-modal-overlay").contains("inset: 0"));
    assert!(rule(".folio-modal-body").contains("position: relative"));
    // hidden rule comes last so it wins over the flex layout
    assert!(CAROUSEL_CSS.rfind(".folio-modal.hidden") > CAROUSEL_CSS.find(".folio-modal {"));
}

#[test]
fn csrf_names() {
    assert_eq!(CSRF_COOKIE, "csrftoken");
    assert_eq!(CSRF_HEADER, "X-CSRFToken");
}
