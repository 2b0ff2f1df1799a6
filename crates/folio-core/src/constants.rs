// Shared defaults used by the field presets, the carousel and the contact form.

// Glyph palette drawn inside some particles
pub const TECH_GLYPHS: [&str; 10] = ["⚡", "🚀", "💻", "🔗", "🌐", "📱", "🔧", "🎯", "✨", "🌟"];

// Background grid tint (indigo)
pub const GRID_RGB: [u8; 3] = [99, 102, 241];

// Link alpha oscillates as (sin(phase) + 1) * SWING + FLOOR
pub const LINK_ALPHA_SWING: f32 = 0.3;
pub const LINK_ALPHA_FLOOR: f32 = 0.2;

// Glyph alpha is the particle opacity scaled by this factor (clamped to 1)
pub const GLYPH_ALPHA_SCALE: f32 = 1.5;

// Carousel
pub const CAROUSEL_SAMPLE_SIZE: usize = 3;
pub const CAROUSEL_ROTATION_MS: u32 = 5000;
pub const UNTITLED_CATEGORY: &str = "Untitled Category";
pub const MOBILE_CATEGORY_MARKERS: [&str; 4] = ["mobile", "app", "android", "ios"];

// Remote endpoints
pub const MEDIA_BASE_URL: &str = "https://mfundodev.com";
pub const PROJECTS_BY_CATEGORY_URL: &str = "https://mfundodev.com/api/projects/by_category/";
pub const CONTACT_URL: &str = "https://www.mfundodev.com/api/contact/";

// Catalog states
pub const MSG_LOADING: &str = "Loading projects...";
pub const MSG_LOAD_FAILED_TITLE: &str = "Unable to load projects";
pub const MSG_EMPTY_TITLE: &str = "No Projects Available";
pub const MSG_EMPTY_TEXT: &str = "Check back later for new projects.";

// Contact banner
pub const MSG_SENT: &str =
    "Thank you for your message! I have received it and will respond to you personally soon.";
pub const MSG_MISSING_FIELDS: &str = "Please fill in all fields.";
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const MSG_CSRF: &str = "CSRF verification failed. Please refresh the page and try again.";
pub const MSG_VALIDATION: &str = "Please check your input and try again.";
pub const MSG_SERVER: &str = "Server error. Please try again later.";
pub const MSG_CONNECT: &str = "Cannot connect to server. Please check your internet connection.";
pub const MSG_GENERIC: &str = "There was an error sending your message. Please try again.";
pub const MSG_NETWORK: &str =
    "There was a network error. Please check your connection and try again.";
pub const MSG_CORS: &str = "Connection blocked by browser security. Please contact support.";
