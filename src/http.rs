use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Readable text for a rejected promise or thrown JS value.
pub fn js_error_text(e: &JsValue) -> String {
    if let Some(err) = e.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!(js_error_text(&e))
}

async fn send(request: web::Request) -> anyhow::Result<HttpResponse> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp: web::Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    let status = resp.status();
    let body = match resp.text() {
        Ok(p) => JsFuture::from(p)
            .await
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    };
    Ok(HttpResponse { status, body })
}

pub async fn get_text(url: &str) -> anyhow::Result<HttpResponse> {
    let init = web::RequestInit::new();
    init.set_method("GET");
    init.set_mode(web::RequestMode::Cors);
    let request = web::Request::new_with_str_and_init(url, &init).map_err(js_err)?;
    _ = request.headers().set("Accept", "application/json");
    send(request).await
}

/// JSON POST with cookies included. `headers` are added after Content-Type.
pub async fn post_json(
    url: &str,
    body: &str,
    headers: &[(&str, &str)],
) -> anyhow::Result<HttpResponse> {
    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_mode(web::RequestMode::Cors);
    init.set_credentials(web::RequestCredentials::Include);
    init.set_body(&JsValue::from_str(body));
    let request = web::Request::new_with_str_and_init(url, &init).map_err(js_err)?;
    let h = request.headers();
    h.set("Content-Type", "application/json").map_err(js_err)?;
    for (name, value) in headers {
        h.set(name, value).map_err(js_err)?;
    }
    send(request).await
}
