// SPDX-License-Identifier: MIT OR Apache-2.0

//! Build-time configuration for the contact form.

use modeops_types::truthy;

pub const DEFAULT_FORMSPREE_HOST: &str = "https://formspree.io";
pub const DEFAULT_FORM_ID: &str = "xldwvnvg";
pub const DEFAULT_CONTACT_EMAIL: &str = "hello@modeops.com";

/// How inquiries leave the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryMode {
    /// POST to a Formspree form.
    Formspree { host: String, form_id: String },
    /// Open the visitor's mail client with a pre-filled message.
    Mailto,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactConfig {
    pub delivery: DeliveryMode,
    /// Shown as a fallback channel on errors, and the mailto recipient.
    pub contact_email: String,
}

impl ContactConfig {
    /// Reads the configuration baked in at compile time. Rebuild after
    /// changing any of these variables.
    ///
    /// * `MODEOPS_FORMSPREE_FORM_ID` - Formspree project id
    /// * `MODEOPS_FORMSPREE_HOST` - Formspree base URL
    /// * `MODEOPS_CONTACT_MAILTO` - `true`/`1` skips Formspree for mailto
    /// * `MODEOPS_CONTACT_EMAIL` - fallback contact address
    pub fn from_build_env() -> Self {
        Self::resolve(
            option_env!("MODEOPS_FORMSPREE_FORM_ID"),
            option_env!("MODEOPS_FORMSPREE_HOST"),
            option_env!("MODEOPS_CONTACT_MAILTO"),
            option_env!("MODEOPS_CONTACT_EMAIL"),
        )
    }

    /// Blank values count as unset and fall back to the literal defaults.
    pub fn resolve(
        form_id: Option<&str>,
        formspree_host: Option<&str>,
        mailto_only: Option<&str>,
        contact_email: Option<&str>,
    ) -> Self {
        let contact_email = non_blank(contact_email)
            .unwrap_or(DEFAULT_CONTACT_EMAIL)
            .to_string();

        let delivery = if truthy(mailto_only) {
            DeliveryMode::Mailto
        } else {
            DeliveryMode::Formspree {
                host: non_blank(formspree_host)
                    .unwrap_or(DEFAULT_FORMSPREE_HOST)
                    .to_string(),
                form_id: non_blank(form_id).unwrap_or(DEFAULT_FORM_ID).to_string(),
            }
        };

        Self {
            delivery,
            contact_email,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self::resolve(None, None, None, None)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
