use crate::canvas::CanvasSurface;
use crate::dom::{self, Listener};
use crate::events::{self, FieldWiring};
use crate::frame::FrameLoop;
use folio_core::{FieldConfig, FieldDriver, FieldError, ParticleField};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// A running particle field bound to one container element.
pub struct FieldMount {
    driver: Rc<RefCell<FieldDriver>>,
    frame_loop: FrameLoop,
    listeners: Vec<Listener>,
}

impl FieldMount {
    pub fn mount(container: &web::Element, config: FieldConfig) -> Result<Self, FieldError> {
        let document = dom::window_document()
            .ok_or_else(|| FieldError::SurfaceUnavailable("no document".into()))?;
        let canvas = dom::canvas_in(&document, container)
            .map_err(|e| FieldError::SurfaceUnavailable(e.to_string()))?;
        let ctx =
            dom::context_2d(&canvas).map_err(|e| FieldError::SurfaceUnavailable(e.to_string()))?;

        let field = ParticleField::from_entropy(config)?;
        let driver = Rc::new(RefCell::new(FieldDriver::new(field)));

        let size = dom::measure(container);
        dom::sync_canvas_backing_size(&canvas, &ctx, size);
        driver.borrow_mut().attach(size);

        let listeners = events::wire_field_handlers(&FieldWiring {
            container: container.clone(),
            canvas,
            ctx: ctx.clone(),
            driver: driver.clone(),
        });

        let mut surface = CanvasSurface::new(ctx);
        let driver_tick = driver.clone();
        let started = Instant::now();
        let frame_loop = FrameLoop::start(move || {
            let now_ms = started.elapsed().as_secs_f64() * 1000.0;
            driver_tick.borrow_mut().frame(&mut surface, now_ms);
        });

        log::info!(
            "[field] mounted {}x{} particles={}",
            size.width,
            size.height,
            driver.borrow().field().particles().len()
        );
        Ok(Self {
            driver,
            frame_loop,
            listeners,
        })
    }

    /// Cancel the pending frame, detach listeners, stop the driver. Idempotent.
    pub fn teardown(&mut self) {
        self.frame_loop.stop();
        self.listeners.clear();
        if self.driver.borrow_mut().stop() {
            log::info!("[field] unmounted");
        }
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running() && self.driver.borrow().is_running()
    }
}

impl Drop for FieldMount {
    fn drop(&mut self) {
        self.teardown();
    }
}
