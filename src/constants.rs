/// DOM hooks and scheduling constants for the web front-end.
///
/// Element ids and data attributes are the contract with the page templates;
/// keep them in sync with the markup.
// Containers marked with this attribute get a particle field; the value names the preset
pub const FIELD_ATTR: &str = "data-particle-field";
pub const FIELD_SELECTOR: &str = "[data-particle-field]";

// Projects carousel
pub const PROJECTS_ROOT_ID: &str = "projects-carousel";
pub const PROJECT_MODAL_ID: &str = "project-modal";
pub const ACTION_ATTR: &str = "data-action";
pub const INDEX_ATTR: &str = "data-index";

// Contact form
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_STATUS_ID: &str = "contact-status";
pub const CSRF_COOKIE: &str = "csrftoken";
pub const CSRF_HEADER: &str = "X-CSRFToken";

// Timer fallback when requestAnimationFrame is unavailable (~60 Hz)
pub const FRAME_FALLBACK_MS: i32 = 16;

// Tool chips shown on a card before collapsing into "+N more"
pub const CARD_TOOLS_SHOWN: usize = 3;

// Image box height for mobile-screenshot categories (px)
pub const MOBILE_IMAGE_HEIGHT: u32 = 360;

pub const CAROUSEL_CSS: &str = r#"
@keyframes folio-spin { 0% { transform: rotate(0deg); } 100% { transform: rotate(360deg); } }
@keyframes folio-blink {
  0% { transform: scale(1); box-shadow: 0 6px 18px rgba(49,130,206,0.18); opacity: 1; }
  50% { transform: scale(1.03); box-shadow: 0 10px 28px rgba(49,130,206,0.30); opacity: 0.85; }
  100% { transform: scale(1); box-shadow: 0 6px 18px rgba(49,130,206,0.18); opacity: 1; }
}
.folio-spinner { width: 40px; height: 40px; border: 4px solid #e2e8f0; border-top-color: #3182ce; border-radius: 50%; animation: folio-spin 1s linear infinite; }
.folio-more { animation: folio-blink 1.6s ease-in-out infinite; }
.folio-modal { position: fixed; inset: 0; z-index: 1000; display: flex; align-items: center; justify-content: center; padding: 16px; }
.folio-modal-overlay { position: absolute; inset: 0; background: rgba(0,0,0,0.6); cursor: pointer; }
.folio-modal-body { position: relative; width: 100%; max-width: 720px; max-height: 90vh; overflow-y: auto; background: #ffffff; border-radius: 12px; padding: 24px; box-shadow: 0 20px 50px rgba(0,0,0,0.3); }
.folio-modal-body img { max-width: 100%; border-radius: 8px; }
.folio-modal-close { position: absolute; top: 12px; right: 12px; border: none; background: transparent; font-size: 28px; line-height: 1; cursor: pointer; }
.folio-modal.hidden { display: none; }
"#;
