// SPDX-License-Identifier: MIT OR Apache-2.0

//! The inquiry a visitor fills in on the contact form.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Only as strict as `<input type="email">`: one `@` between a non-empty local
// part and domain. Dotless domains such as `localhost` are allowed.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+$").expect("email pattern is a valid regex"));

/// Field values owned by one rendered contact form.
///
/// Values are kept exactly as typed; trimming only happens when checking
/// whether a field is blank.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: String,
    pub message: String,
    /// Honeypot. Hidden from humans, so anything in here came from a bot.
    #[serde(default)]
    pub company_website: String,
}

/// Why a form cannot be submitted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your name.")]
    MissingName,

    #[error("Please enter your email address.")]
    MissingEmail,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Please tell us what you would like to improve.")]
    MissingMessage,
}

impl InquiryForm {
    /// Checks required fields in the order they appear on the form and
    /// reports the first problem.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ValidationError::MissingMessage);
        }
        Ok(())
    }

    /// Any value at all in the honeypot, whitespace included, marks spam.
    pub fn is_spam(&self) -> bool {
        !self.company_website.is_empty()
    }

    /// The company name, if the visitor gave one.
    pub fn company(&self) -> Option<&str> {
        if self.company.trim().is_empty() {
            None
        } else {
            Some(&self.company)
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
