// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for contact submissions.

use thiserror::Error;

/// Shown when the form-backend refused the inquiry without saying why.
pub const REJECTED_FALLBACK: &str = "Form submission failed";

/// Shown when the request never completed.
pub const TRANSPORT_FALLBACK: &str = "Something went wrong";

/// Errors returned by [`ContactSubmission::submit`](crate::ContactSubmission::submit).
#[derive(Debug, Error)]
pub enum ContactError {
    /// The form-backend answered with a non-2xx status.
    #[error("Submission rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },

    /// DNS, connectivity or any other failure before a response arrived.
    #[error("Network error: {0}")]
    Transport(String),

    /// The inquiry could not be serialized.
    #[error("Could not encode inquiry: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ContactError {
    fn from(err: reqwest::Error) -> Self {
        ContactError::Transport(err.to_string())
    }
}

impl ContactError {
    /// The text a visitor sees in the form's error state.
    pub fn user_message(&self) -> String {
        match self {
            ContactError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            ContactError::Rejected { message: None, .. } => REJECTED_FALLBACK.to_string(),
            ContactError::Transport(_) | ContactError::Encode(_) => TRANSPORT_FALLBACK.to_string(),
        }
    }
}
