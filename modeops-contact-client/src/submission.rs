// SPDX-License-Identifier: MIT OR Apache-2.0

//! Turning a completed form into exactly one terminal result.

use modeops_types::{InquiryForm, InquiryRequest};

use crate::config::{ContactConfig, DeliveryMode};
use crate::error::ContactError;
use crate::mailto::MailtoComposer;
use crate::transport::{FormTransport, ReqwestTransport};
use crate::FormspreeClient;

/// What happened to an inquiry that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The form-backend accepted it.
    Delivered,
    /// The honeypot was filled in. Nothing was sent, and the visitor is
    /// told it worked.
    SpamSuppressed,
    /// The caller should navigate to this `mailto:` URL.
    OpenMailClient(String),
}

/// Chosen once at startup from [`ContactConfig`].
#[derive(Debug, Clone)]
pub enum SubmissionStrategy<T = ReqwestTransport> {
    Formspree(FormspreeClient<T>),
    Mailto(MailtoComposer),
}

#[derive(Debug, Clone)]
pub struct ContactSubmission<T = ReqwestTransport> {
    strategy: SubmissionStrategy<T>,
}

impl ContactSubmission {
    pub fn from_config(config: &ContactConfig) -> Self {
        let strategy = match &config.delivery {
            DeliveryMode::Formspree { host, form_id } => {
                SubmissionStrategy::Formspree(FormspreeClient::new(host, form_id))
            }
            DeliveryMode::Mailto => {
                SubmissionStrategy::Mailto(MailtoComposer::new(&config.contact_email))
            }
        };
        Self::new(strategy)
    }
}

impl<T: FormTransport> ContactSubmission<T> {
    pub fn new(strategy: SubmissionStrategy<T>) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> &SubmissionStrategy<T> {
        &self.strategy
    }

    /// Submit one inquiry.
    ///
    /// Issues at most one network request. Honeypot hits and the mailto
    /// strategy issue none.
    pub async fn submit(&self, form: &InquiryForm) -> Result<SubmissionOutcome, ContactError> {
        if form.is_spam() {
            log::info!("honeypot filled in, dropping inquiry");
            return Ok(SubmissionOutcome::SpamSuppressed);
        }

        match &self.strategy {
            SubmissionStrategy::Formspree(client) => {
                client.submit(&InquiryRequest::from(form)).await?;
                log::info!("inquiry delivered to form {}", client.form_id());
                Ok(SubmissionOutcome::Delivered)
            }
            SubmissionStrategy::Mailto(composer) => {
                log::debug!("handing inquiry to mail client for {}", composer.recipient());
                Ok(SubmissionOutcome::OpenMailClient(composer.compose(form)))
            }
        }
    }
}
