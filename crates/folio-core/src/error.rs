use thiserror::Error;

use crate::constants::{
    MSG_CONNECT, MSG_CSRF, MSG_CORS, MSG_GENERIC, MSG_INVALID_EMAIL, MSG_MISSING_FIELDS,
    MSG_NETWORK, MSG_SERVER, MSG_VALIDATION,
};

/// Rejected field option set.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("density divisor must be positive")]
    ZeroDensityDivisor,
    #[error("keep probability {0} is outside [0, 1]")]
    KeepProbability(f32),
    #[error("particle radius minimum {0} must be positive")]
    NonPositiveRadius(f32),
    #[error("pulse amplitude {amplitude} must stay below the radius minimum {radius_min}")]
    PulseTooLarge { amplitude: f32, radius_min: f32 },
    #[error("range `{0}` has min > max")]
    InvertedRange(&'static str),
    #[error("grid spacing must be positive")]
    GridSpacing,
    #[error("interaction radius must be positive")]
    InteractionRadius,
    #[error("glyph probability is positive but the glyph palette is empty")]
    EmptyGlyphPalette,
    #[error("unknown preset `{0}`")]
    UnknownPreset(String),
    #[error("malformed field options: {0}")]
    Malformed(String),
}

/// The host could not provide something to draw on.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FieldError {
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    /// Fetch failed or the payload had an unusable shape; the UI offers a retry.
    #[error("{0}")]
    DataUnavailable(String),
    /// Fetch succeeded but nothing is left to show; not a failure.
    #[error("no projects available")]
    EmptyDataset,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    #[error("missing fields")]
    MissingFields,
    #[error("invalid email address")]
    InvalidEmail,
}

impl ContactError {
    pub fn message(&self) -> &'static str {
        match self {
            ContactError::MissingFields => MSG_MISSING_FIELDS,
            ContactError::InvalidEmail => MSG_INVALID_EMAIL,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubmissionError {
    #[error(transparent)]
    Invalid(#[from] ContactError),
    /// Non-success response. `detail` carries the first email error from a 400 body.
    #[error("submission rejected with status {status}")]
    Rejected { status: u16, detail: Option<String> },
    #[error("network error: {0}")]
    Network(String),
}

impl SubmissionError {
    /// User-facing banner text for this failure.
    pub fn message(&self) -> String {
        match self {
            SubmissionError::Invalid(e) => e.message().to_string(),
            SubmissionError::Rejected { status, detail } => match status {
                403 => MSG_CSRF.to_string(),
                400 => match detail {
                    Some(d) => format!("Email error: {}", d),
                    None => MSG_VALIDATION.to_string(),
                },
                500 => MSG_SERVER.to_string(),
                0 => MSG_CONNECT.to_string(),
                _ => MSG_GENERIC.to_string(),
            },
            SubmissionError::Network(reason) if reason.contains("CORS") => MSG_CORS.to_string(),
            SubmissionError::Network(_) => MSG_NETWORK.to_string(),
        }
    }
}
