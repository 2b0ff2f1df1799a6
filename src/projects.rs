use crate::constants::{ACTION_ATTR, CAROUSEL_CSS, INDEX_ATTR, PROJECT_MODAL_ID};
use crate::dom::{self, Listener};
use crate::events;
use crate::frame::Interval;
use crate::http;
use crate::input::CarouselAction;
use crate::markup;
use crate::overlay;
use crate::style::ScopedStyle;
use folio_core::constants::PROJECTS_BY_CATEGORY_URL;
use folio_core::{catalog, Carousel, CarouselConfig, CatalogError, LoadState};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

struct ProjectsView {
    document: web::Document,
    root: web::Element,
    config: CarouselConfig,
    carousel: Option<Carousel>,
    rotation: Option<Interval>,
    live: bool,
}

impl ProjectsView {
    fn render_state(&self, state: &LoadState) {
        let html = match state {
            LoadState::Loading => markup::loading_html(),
            LoadState::Failed(reason) => markup::failed_html(reason),
            LoadState::Empty => markup::empty_html(),
            LoadState::Ready(_) => return self.render_slide(),
        };
        self.root.set_inner_html(&html);
    }

    fn render_slide(&self) {
        let Some(c) = self.carousel.as_ref() else {
            self.root.set_inner_html(&markup::empty_html());
            return;
        };
        self.root
            .set_inner_html(&markup::slide_html(c.categories(), c.active_index(), c.slide()));
    }

    fn dispatch(&mut self, action: CarouselAction) {
        match action {
            CarouselAction::Retry => dom::reload_page(),
            CarouselAction::Close => overlay::hide(&self.document),
            CarouselAction::Next | CarouselAction::Prev | CarouselAction::Goto(_) => {
                let Some(c) = self.carousel.as_mut() else {
                    return;
                };
                match action {
                    CarouselAction::Next => c.advance(),
                    CarouselAction::Prev => c.retreat(),
                    CarouselAction::Goto(i) => {
                        if !c.jump_to(i) {
                            return;
                        }
                    }
                    _ => {}
                }
                self.render_slide();
            }
            CarouselAction::Open(i) => {
                let Some(c) = self.carousel.as_ref() else {
                    return;
                };
                let (Some(project), Some(category)) = (c.slide().get(i), c.active_category())
                else {
                    return;
                };
                overlay::show(&self.document, &markup::modal_html(project, &category.name));
            }
        }
    }

    fn rotate(&mut self) {
        if let Some(c) = self.carousel.as_mut() {
            c.advance();
        }
        self.render_slide();
    }
}

/// Projects carousel bound to `#projects-carousel`: fetch, render, rotate.
pub struct ProjectsMount {
    view: Rc<RefCell<ProjectsView>>,
    listeners: Vec<Listener>,
    style: Option<ScopedStyle>,
}

impl ProjectsMount {
    pub fn mount(document: &web::Document, root: web::Element) -> Self {
        let style = ScopedStyle::mount(document, CAROUSEL_CSS);
        let view = Rc::new(RefCell::new(ProjectsView {
            document: document.clone(),
            root: root.clone(),
            config: CarouselConfig::default(),
            carousel: None,
            rotation: None,
            live: true,
        }));
        view.borrow().render_state(&LoadState::Loading);

        let mut listeners = Vec::new();
        // Clicks on the carousel and on the modal, which lives under <body>
        let weak = Rc::downgrade(&view);
        let root_click = root.clone();
        if let Some(l) = Listener::new(document, "click", move |ev: web::Event| {
            let Some(view) = weak.upgrade() else {
                return;
            };
            let Some(action) = action_for(&ev, &root_click) else {
                return;
            };
            view.borrow_mut().dispatch(action);
        }) {
            listeners.push(l);
        }
        let doc_esc = document.clone();
        if let Some(l) = events::wire_escape(move || {
            if !overlay::is_hidden(&doc_esc) {
                overlay::hide(&doc_esc);
            }
        }) {
            listeners.push(l);
        }

        let weak = Rc::downgrade(&view);
        spawn_local(async move {
            let state = LoadState::from_result(load_categories(PROJECTS_BY_CATEGORY_URL).await);
            apply_state(&weak, state);
        });

        log::info!("[projects] mounted");
        Self {
            view,
            listeners,
            style,
        }
    }

    /// Stops rotation, detaches listeners and removes the modal and styles. Idempotent.
    pub fn teardown(&mut self) {
        let mut view = self.view.borrow_mut();
        if !view.live {
            return;
        }
        view.live = false;
        view.rotation = None;
        overlay::remove(&view.document);
        self.listeners.clear();
        self.style = None;
        log::info!("[projects] unmounted");
    }
}

impl Drop for ProjectsMount {
    fn drop(&mut self) {
        self.teardown();
    }
}

async fn load_categories(url: &str) -> Result<Vec<folio_core::Category>, CatalogError> {
    let resp = http::get_text(url)
        .await
        .map_err(|e| CatalogError::DataUnavailable(e.to_string()))?;
    if !resp.ok() {
        return Err(CatalogError::DataUnavailable(format!(
            "HTTP error! status: {}",
            resp.status
        )));
    }
    catalog::parse_grouped(&resp.body).and_then(catalog::require_categories)
}

fn apply_state(weak: &Weak<RefCell<ProjectsView>>, state: LoadState) {
    let Some(view) = weak.upgrade() else {
        return;
    };
    let mut v = view.borrow_mut();
    if !v.live {
        return;
    }
    match &state {
        LoadState::Ready(categories) => {
            log::info!("[projects] loaded {} categories", categories.len());
            let CarouselConfig {
                sample_size,
                rotation_ms,
            } = v.config;
            v.carousel = Some(Carousel::from_entropy(categories.clone(), sample_size));
            let weak_tick = weak.clone();
            v.rotation = Interval::every(rotation_ms, move || {
                if let Some(view) = weak_tick.upgrade() {
                    view.borrow_mut().rotate();
                }
            });
        }
        LoadState::Failed(reason) => log::error!("[projects] load failed: {}", reason),
        _ => {}
    }
    v.render_state(&state);
}

/// Decode the `data-action` element under the click, if it belongs to the
/// carousel root or the project modal.
fn action_for(ev: &web::Event, root: &web::Element) -> Option<CarouselAction> {
    let target = ev.target()?.dyn_into::<web::Element>().ok()?;
    let el = target.closest(&format!("[{}]", ACTION_ATTR)).ok()??;
    let in_modal = el
        .closest(&format!("#{}", PROJECT_MODAL_ID))
        .ok()
        .flatten()
        .is_some();
    let node: &web::Node = &el;
    if !in_modal && !root.contains(Some(node)) {
        return None;
    }
    let action = el.get_attribute(ACTION_ATTR)?;
    let index = el.get_attribute(INDEX_ATTR);
    CarouselAction::parse(&action, index.as_deref())
}
