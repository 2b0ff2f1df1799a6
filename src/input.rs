use glam::Vec2;

/// Client-space pointer position translated into surface-local CSS pixels.
#[inline]
pub fn surface_point(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> Vec2 {
    Vec2::new(
        (client_x - rect_left) as f32,
        (client_y - rect_top) as f32,
    )
}

/// Look up `name` in a `document.cookie` string. The value is returned raw.
pub fn cookie_value(jar: &str, name: &str) -> Option<String> {
    jar.split(';').find_map(|pair| {
        let (k, v) = pair.trim().split_once('=')?;
        (k == name).then(|| v.to_string())
    })
}

/// Clicks inside the carousel, decoded from `data-action` / `data-index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    Next,
    Prev,
    Goto(usize),
    Open(usize),
    Close,
    Retry,
}

impl CarouselAction {
    pub fn parse(action: &str, index: Option<&str>) -> Option<Self> {
        let index = || index.and_then(|i| i.trim().parse::<usize>().ok());
        match action {
            "next" => Some(CarouselAction::Next),
            "prev" => Some(CarouselAction::Prev),
            "goto" => index().map(CarouselAction::Goto),
            "open" => index().map(CarouselAction::Open),
            "close" => Some(CarouselAction::Close),
            "retry" => Some(CarouselAction::Retry),
            _ => None,
        }
    }
}

#[inline]
pub fn is_escape(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}
