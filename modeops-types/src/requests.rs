// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request bodies sent to the form-backend.

use serde::{Deserialize, Serialize};

use crate::inquiry::InquiryForm;

/// JSON body for `POST /f/{form_id}`.
///
/// The honeypot never leaves the browser, and `company` is omitted when the
/// visitor left it blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryRequest {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub message: String,
}

impl From<&InquiryForm> for InquiryRequest {
    fn from(form: &InquiryForm) -> Self {
        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            company: form.company().map(str::to_string),
            message: form.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> InquiryForm {
        InquiryForm {
            name: "Grace Hopper".to_string(),
            email: "grace@navy.example".to_string(),
            company: "US Navy".to_string(),
            message: "Document review & error checks".to_string(),
            company_website: String::new(),
        }
    }

    #[test]
    fn body_carries_the_entered_values() {
        let body = serde_json::to_string(&InquiryRequest::from(&form())).unwrap();
        let back: InquiryRequest = serde_json::from_str(&body).unwrap();

        assert_eq!(back.name, "Grace Hopper");
        assert_eq!(back.email, "grace@navy.example");
        assert_eq!(back.company.as_deref(), Some("US Navy"));
        assert_eq!(back.message, "Document review & error checks");
    }

    #[test]
    fn blank_company_is_left_out() {
        let mut form = form();
        form.company = "  ".to_string();
        let value = serde_json::to_value(InquiryRequest::from(&form)).unwrap();

        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys.len(), 3);
        assert!(!keys.contains(&"company"));
        assert!(!keys.contains(&"company_website"));
    }
}
