use crate::dom::{self, Listener};
use crate::input;
use folio_core::FieldDriver;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct FieldWiring {
    pub container: web::Element,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub driver: Rc<RefCell<FieldDriver>>,
}

/// Pointer move/leave on the canvas and window resize. Dropping the returned
/// listeners unregisters them.
pub fn wire_field_handlers(w: &FieldWiring) -> Vec<Listener> {
    let mut listeners = Vec::with_capacity(3);
    listeners.extend(wire_pointermove(w));
    listeners.extend(wire_pointerleave(w));
    listeners.extend(wire_resize(w));
    listeners
}

fn wire_pointermove(w: &FieldWiring) -> Option<Listener> {
    let w = w.clone();
    let target = w.canvas.clone();
    Listener::new(&target, "mousemove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let rect = w.canvas.get_bounding_client_rect();
        let pos = input::surface_point(
            ev.client_x() as f64,
            ev.client_y() as f64,
            rect.left(),
            rect.top(),
        );
        w.driver.borrow_mut().pointer_move(pos.x, pos.y);
    })
}

fn wire_pointerleave(w: &FieldWiring) -> Option<Listener> {
    let driver = w.driver.clone();
    Listener::new(&w.canvas, "mouseleave", move |_ev: web::Event| {
        driver.borrow_mut().pointer_leave();
    })
}

fn wire_resize(w: &FieldWiring) -> Option<Listener> {
    let window = web::window()?;
    let w = w.clone();
    Listener::new(&window, "resize", move |_ev: web::Event| {
        let size = dom::measure(&w.container);
        dom::sync_canvas_backing_size(&w.canvas, &w.ctx, size);
        w.driver.borrow_mut().resize(size);
    })
}
