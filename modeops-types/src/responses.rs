// SPDX-License-Identifier: MIT OR Apache-2.0

//! Response bodies returned by the form-backend.

use serde::{Deserialize, Serialize};

/// Error body Formspree attaches to rejected submissions.
///
/// Both fields are optional; older endpoints only send `error`, newer ones
/// add a per-field `errors` list.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct FormspreeErrorBody {
    #[serde(default)]
    pub error: Option<String>,

    #[serde(default)]
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl FormspreeErrorBody {
    /// The message worth showing to a visitor, if the body carried one.
    pub fn display_message(&self) -> Option<String> {
        if let Some(error) = self.error.as_deref().map(str::trim) {
            if !error.is_empty() {
                return Some(error.to_string());
            }
        }

        let joined = self
            .errors
            .iter()
            .filter_map(|e| e.message.as_deref().map(str::trim))
            .filter(|m| !m.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if joined.is_empty() {
            None
        } else {
            Some(joined)
        }
    }
}
