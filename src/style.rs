use web_sys as web;

/// `<style>` element owned by one mounted view; removed from `<head>` on drop.
pub struct ScopedStyle {
    el: web::Element,
}

impl ScopedStyle {
    pub fn mount(document: &web::Document, css: &str) -> Option<Self> {
        let head = document.head()?;
        let el = document.create_element("style").ok()?;
        el.set_text_content(Some(css));
        head.append_child(&el).ok()?;
        Some(Self { el })
    }
}

impl Drop for ScopedStyle {
    fn drop(&mut self) {
        self.el.remove();
    }
}
