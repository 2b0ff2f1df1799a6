use serde::{Deserialize, Serialize};

use crate::constants::MSG_SENT;
use crate::error::{ContactError, SubmissionError};

/// Body of the contact POST.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    /// Checked before any request goes out.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.message.trim().is_empty()
        {
            return Err(ContactError::MissingFields);
        }
        if !looks_like_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// `local@host.rest` with no whitespace and a single `@`.
pub fn looks_like_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // some dot in the domain with text on both sides
    domain
        .match_indices('.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len())
}

#[derive(Deserialize)]
struct RejectionBody {
    #[serde(default)]
    email: Vec<String>,
}

/// Turn a response into success or a rejection carrying the first email
/// error of a 400 body, if it has one.
pub fn check_response(status: u16, body: &str) -> Result<(), SubmissionError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    let detail = if status == 400 {
        serde_json::from_str::<RejectionBody>(body)
            .ok()
            .and_then(|b| b.email.into_iter().next())
    } else {
        None
    };
    Err(SubmissionError::Rejected { status, detail })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// Inline status line shown under the form after a submission attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusBanner {
    pub kind: BannerKind,
    pub message: String,
}

impl StatusBanner {
    pub fn sent() -> Self {
        Self {
            kind: BannerKind::Success,
            message: MSG_SENT.to_string(),
        }
    }

    pub fn from_error(err: &SubmissionError) -> Self {
        Self {
            kind: BannerKind::Error,
            message: err.message(),
        }
    }

    pub fn from_outcome(outcome: &Result<(), SubmissionError>) -> Self {
        match outcome {
            Ok(()) => Self::sent(),
            Err(e) => Self::from_error(e),
        }
    }
}
