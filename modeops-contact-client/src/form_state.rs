// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-form submission state: field values, status and the notice shown
//! to the visitor.

use modeops_types::{InquiryForm, SubmissionStatus, ValidationError};
use thiserror::Error;

use crate::error::ContactError;
use crate::submission::SubmissionOutcome;

pub const SUCCESS_MESSAGE: &str = "Thanks! We’ll be in touch within 1 business day.";
pub const MAIL_CLIENT_MESSAGE: &str = "Your email app should open with your message ready to send.";

/// Why [`ContactFormState::begin_submit`] refused to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("A submission is already in flight")]
    AlreadySending,

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// State owned by one rendered contact form.
///
/// Transitions:
///
/// * `Idle | Error -> Sending` in [`begin_submit`](Self::begin_submit)
/// * `Sending -> Success | Error` in [`complete`](Self::complete)
/// * `Success | Error -> Idle` in [`reset`](Self::reset)
///
/// While `Sending`, further submits are refused, so each form has at most
/// one request in flight.
#[derive(Debug, Clone, Default)]
pub struct ContactFormState {
    pub fields: InquiryForm,
    status: SubmissionStatus,
    notice: Option<String>,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Confirmation or error text for the current status.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Validate the fields and move to `Sending`.
    ///
    /// Returns a snapshot of the fields to submit. A validation failure
    /// moves the form to `Error` with the validation message.
    pub fn begin_submit(&mut self) -> Result<InquiryForm, SubmitRejected> {
        if self.status.is_sending() {
            log::debug!("ignoring submit while a request is in flight");
            return Err(SubmitRejected::AlreadySending);
        }

        if let Err(err) = self.fields.validate() {
            self.status = SubmissionStatus::Error;
            self.notice = Some(err.to_string());
            return Err(err.into());
        }

        self.status = SubmissionStatus::Sending;
        self.notice = None;
        Ok(self.fields.clone())
    }

    /// Record the terminal result of the in-flight submission.
    ///
    /// Does nothing unless the form is `Sending`.
    pub fn complete(&mut self, result: Result<SubmissionOutcome, ContactError>) {
        if !self.status.is_sending() {
            log::warn!("dropping submission result, form is {}", self.status);
            return;
        }

        match result {
            Ok(outcome) => {
                self.status = SubmissionStatus::Success;
                self.fields.clear();
                self.notice = Some(
                    match outcome {
                        SubmissionOutcome::OpenMailClient(_) => MAIL_CLIENT_MESSAGE,
                        SubmissionOutcome::Delivered | SubmissionOutcome::SpamSuppressed => {
                            SUCCESS_MESSAGE
                        }
                    }
                    .to_string(),
                );
            }
            Err(err) => {
                log::warn!("inquiry not sent: {err}");
                self.status = SubmissionStatus::Error;
                self.notice = Some(err.user_message());
            }
        }
    }

    /// Back to a blank `Idle` form. Ignored while `Sending`.
    pub fn reset(&mut self) {
        if !self.status.is_sending() {
            *self = Self::default();
        }
    }
}
