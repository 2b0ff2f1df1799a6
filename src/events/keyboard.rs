use crate::dom::Listener;
use crate::input;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window-level Escape handler, removed when the listener is dropped.
pub fn wire_escape(mut on_escape: impl FnMut() + 'static) -> Option<Listener> {
    let window = web::window()?;
    Listener::new(&window, "keydown", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        if input::is_escape(&ev.key()) {
            on_escape();
        }
    })
}
