#![cfg(target_arch = "wasm32")]
use crate::contact::ContactMount;
use crate::field::FieldMount;
use crate::projects::ProjectsMount;
use folio_core::{FieldConfig, FieldError};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod contact;
mod dom;
mod events;
mod field;
mod frame;
mod http;
mod input;
mod markup;
mod overlay;
mod projects;
mod style;

/// Everything `start()` mounted, torn down by `unmount_all()`.
#[derive(Default)]
struct Registry {
    fields: Vec<FieldMount>,
    projects: Option<ProjectsMount>,
    contact: Option<ContactMount>,
}

thread_local! {
    static REGISTRY: RefCell<Registry> = RefCell::new(Registry::default());
}

/// A particle field mounted from JS. Inactive when the surface was unavailable.
#[wasm_bindgen]
pub struct FieldHandle {
    mount: Option<FieldMount>,
}

#[wasm_bindgen]
impl FieldHandle {
    /// Stop the loop and detach listeners. Safe to call more than once.
    pub fn stop(&mut self) {
        if let Some(m) = self.mount.as_mut() {
            m.teardown();
        }
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.mount.as_ref().map(|m| m.is_running()).unwrap_or(false)
    }
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Mount `config` on `container`. A missing surface yields `Ok(None)` after a
/// warning; decorative failures never reach the page.
fn try_mount(
    container: &web::Element,
    config: FieldConfig,
) -> Result<Option<FieldMount>, FieldError> {
    match FieldMount::mount(container, config) {
        Ok(m) => Ok(Some(m)),
        Err(FieldError::SurfaceUnavailable(reason)) => {
            log::warn!("[field] surface unavailable, skipping: {}", reason);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn container_by_id(container_id: &str) -> Option<web::Element> {
    dom::window_document()?.get_element_by_id(container_id)
}

fn handle_for(container_id: &str, config: FieldConfig) -> Result<FieldHandle, JsValue> {
    let Some(container) = container_by_id(container_id) else {
        log::warn!("[field] no element #{}", container_id);
        return Ok(FieldHandle { mount: None });
    };
    let mount = try_mount(&container, config).map_err(to_js)?;
    Ok(FieldHandle { mount })
}

/// Mount a named preset (`footer`, `ambient`, `home`, `about`, `skills`).
#[wasm_bindgen]
pub fn mount_field(container_id: &str, preset: &str) -> Result<FieldHandle, JsValue> {
    let config = FieldConfig::preset(preset).map_err(to_js)?;
    handle_for(container_id, config)
}

/// Mount the ambient preset overridden by a partial JSON config.
#[wasm_bindgen]
pub fn mount_field_with_config(container_id: &str, json: &str) -> Result<FieldHandle, JsValue> {
    let config = FieldConfig::ambient().merged_with_json(json).map_err(to_js)?;
    handle_for(container_id, config)
}

/// Tear down every auto-mounted view.
#[wasm_bindgen]
pub fn unmount_all() {
    let taken = REGISTRY.with(|r| std::mem::take(&mut *r.borrow_mut()));
    let n = taken.fields.len();
    drop(taken);
    log::info!("[app] unmounted {} fields and page views", n);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = auto_mount() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn auto_mount() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let mut registry = Registry::default();

    let nodes = document
        .query_selector_all(constants::FIELD_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    for i in 0..nodes.length() {
        let Some(container) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok())
        else {
            continue;
        };
        let preset = container
            .get_attribute(constants::FIELD_ATTR)
            .unwrap_or_default();
        let config = match FieldConfig::preset(&preset) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("[field] {}; using ambient", e);
                FieldConfig::ambient()
            }
        };
        match try_mount(&container, config) {
            Ok(Some(m)) => registry.fields.push(m),
            Ok(None) => {}
            Err(e) => log::error!("[field] mount failed: {}", e),
        }
    }

    if let Some(root) = document.get_element_by_id(constants::PROJECTS_ROOT_ID) {
        registry.projects = Some(ProjectsMount::mount(&document, root));
    }

    if let Some(form) = document
        .get_element_by_id(constants::CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    {
        registry.contact = Some(ContactMount::mount(&document, form));
    }

    log::info!(
        "[app] mounted fields={} projects={} contact={}",
        registry.fields.len(),
        registry.projects.is_some(),
        registry.contact.is_some()
    );
    REGISTRY.with(|r| *r.borrow_mut() = registry);
    Ok(())
}
