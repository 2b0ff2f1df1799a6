use folio_core::SurfaceSize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Event listener that unregisters itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        match target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                kind,
                closure,
            }),
            Err(e) => {
                log::warn!("[dom] add {} listener failed: {:?}", kind, e);
                None
            }
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Logical (CSS pixel) size of `container`.
pub fn measure(container: &web::Element) -> SurfaceSize {
    let rect = container.get_bounding_client_rect();
    SurfaceSize::new(
        rect.width().max(0.0).floor() as u32,
        rect.height().max(0.0).floor() as u32,
    )
}

/// Match the canvas backing store to `size` * devicePixelRatio and scale the
/// context so drawing stays in CSS pixels.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
    size: SurfaceSize,
) {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    canvas.set_width((size.width as f64 * dpr) as u32);
    canvas.set_height((size.height as f64 * dpr) as u32);
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
}

/// First `<canvas>` inside `container`, created and appended when missing.
pub fn canvas_in(
    document: &web::Document,
    container: &web::Element,
) -> anyhow::Result<web::HtmlCanvasElement> {
    if let Some(existing) = container
        .query_selector("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
    {
        return existing
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e));
    }
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    _ = canvas.set_attribute(
        "style",
        "position:absolute;inset:0;width:100%;height:100%;pointer-events:auto;opacity:0.9",
    );
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Value of cookie `name`, percent-decoded.
pub fn cookie(document: &web::Document, name: &str) -> Option<String> {
    let html = document.dyn_ref::<web::HtmlDocument>()?;
    let jar = html.cookie().ok()?;
    let value = crate::input::cookie_value(&jar, name)?;
    js_sys::decode_uri_component(&value).ok().map(String::from)
}

pub fn reload_page() {
    if let Some(w) = web::window() {
        _ = w.location().reload();
    }
}
