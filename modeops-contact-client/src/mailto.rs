// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pre-filled `mailto:` links for sites without a form-backend.

use modeops_types::InquiryForm;

#[derive(Debug, Clone)]
pub struct MailtoComposer {
    recipient: String,
}

impl MailtoComposer {
    pub fn new(recipient: &str) -> Self {
        Self {
            recipient: recipient.trim().to_string(),
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Build `mailto:{recipient}?subject=..&body=..` from the form.
    ///
    /// Body lines end in CRLF, which encodes to `%0D%0A` as mail clients expect.
    pub fn compose(&self, form: &InquiryForm) -> String {
        let subject = format!("ModeOps inquiry from {}", form.name.trim());

        let mut body = format!(
            "Name: {}\r\nEmail: {}\r\n",
            form.name.trim(),
            form.email.trim()
        );
        if let Some(company) = form.company() {
            body.push_str(&format!("Company: {}\r\n", company.trim()));
        }
        body.push_str("\r\n");
        body.push_str(&normalize_line_breaks(&form.message));

        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        )
    }
}

/// Turn bare `\n` (what a textarea yields) into CRLF.
fn normalize_line_breaks(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\n', "\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_param<'a>(url: &'a str, key: &str) -> Option<&'a str> {
        let (_, query) = url.split_once('?')?;
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    #[test]
    fn composes_encoded_subject_and_body() {
        let composer = MailtoComposer::new("hello@modeops.com");
        let form = InquiryForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.org".to_string(),
            company: "Analytical & Co".to_string(),
            message: "Dashboards?\nAlerts too.".to_string(),
            company_website: String::new(),
        };

        let url = composer.compose(&form);
        assert!(url.starts_with("mailto:hello@modeops.com?subject="));

        let subject = urlencoding::decode(query_param(&url, "subject").unwrap()).unwrap();
        assert_eq!(subject, "ModeOps inquiry from Ada Lovelace");

        let body = urlencoding::decode(query_param(&url, "body").unwrap()).unwrap();
        assert_eq!(
            body,
            "Name: Ada Lovelace\r\nEmail: ada@example.org\r\nCompany: Analytical & Co\r\n\r\nDashboards?\r\nAlerts too."
        );
    }

    #[test]
    fn line_breaks_are_encoded_as_crlf() {
        let composer = MailtoComposer::new("hello@modeops.com");
        let form = InquiryForm {
            name: "Ada".to_string(),
            email: "ada@example.org".to_string(),
            message: "one\ntwo\r\nthree".to_string(),
            ..Default::default()
        };

        let raw_body = query_param(&composer.compose(&form), "body").unwrap().to_string();
        assert!(raw_body.contains("one%0D%0Atwo%0D%0Athree"), "{raw_body}");
        assert!(!raw_body.replace("%0D%0A", "").contains("%0A"), "{raw_body}");
    }

    #[test]
    fn company_line_is_skipped_when_blank() {
        let composer = MailtoComposer::new("hello@modeops.com");
        let form = InquiryForm {
            name: "Ada".to_string(),
            email: "ada@example.org".to_string(),
            message: "Hi".to_string(),
            ..Default::default()
        };

        let url = composer.compose(&form);
        let body = urlencoding::decode(query_param(&url, "body").unwrap()).unwrap();
        assert!(!body.contains("Company:"));
    }
}
