// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared contact-form types for the ModeOps landing site.
//!
//! This crate defines the contract between the contact form UI and the
//! form-backend it posts to. It is intentionally framework-agnostic: no
//! leptos, no reqwest, no browser APIs.

pub mod inquiry;
pub mod requests;
pub mod responses;
pub mod status;

pub use inquiry::{InquiryForm, ValidationError};
pub use requests::InquiryRequest;
pub use responses::FormspreeErrorBody;
pub use status::SubmissionStatus;

/// Interprets a build-time flag. Only `true` and `1` (any case) are truthy.
pub fn truthy(s: Option<&str>) -> bool {
    if let Some(s) = s {
        ["true".to_string(), "1".to_string()].contains(&s.trim().to_lowercase())
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::truthy;

    #[test]
    fn truthy_accepts_true_and_one() {
        assert!(truthy(Some("true")));
        assert!(truthy(Some("TRUE")));
        assert!(truthy(Some("1")));
        assert!(truthy(Some(" 1 ")));
    }

    #[test]
    fn truthy_rejects_everything_else() {
        assert!(!truthy(None));
        assert!(!truthy(Some("")));
        assert!(!truthy(Some("yes")));
        assert!(!truthy(Some("0")));
    }
}
