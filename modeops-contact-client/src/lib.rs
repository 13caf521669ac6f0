// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cross-platform contact-form submission for the ModeOps landing site.
//!
//! Works in the browser (WASM, via `fetch`) and on native targets via
//! [`reqwest`].
//!
//! # Example
//!
//! ```no_run
//! use modeops_contact_client::{ContactConfig, ContactFormState, ContactSubmission};
//!
//! # async fn example() {
//! let submission = ContactSubmission::from_config(&ContactConfig::from_build_env());
//! let mut state = ContactFormState::new();
//! state.fields.name = "Ada".to_string();
//! state.fields.email = "ada@example.org".to_string();
//! state.fields.message = "Automate our intake forms".to_string();
//!
//! if let Ok(inquiry) = state.begin_submit() {
//!     let result = submission.submit(&inquiry).await;
//!     state.complete(result);
//! }
//! println!("{}: {:?}", state.status(), state.notice());
//! # }
//! ```

pub mod config;
pub mod error;
pub mod form_state;
pub mod mailto;
pub mod submission;
pub mod transport;

pub use config::{ContactConfig, DeliveryMode};
pub use error::ContactError;
pub use form_state::{ContactFormState, SubmitRejected};
pub use mailto::MailtoComposer;
pub use modeops_types;
pub use submission::{ContactSubmission, SubmissionOutcome, SubmissionStrategy};
pub use transport::{FormTransport, ReqwestTransport, TransportResponse};

use modeops_types::{FormspreeErrorBody, InquiryRequest};

/// A client for one Formspree form.
///
/// Every call to [`FormspreeClient::submit`] issues exactly one POST; there
/// are no retries.
#[derive(Debug, Clone)]
pub struct FormspreeClient<T = ReqwestTransport> {
    host: String,
    form_id: String,
    transport: T,
}

impl FormspreeClient {
    /// Create a client for `form_id` on the given host.
    ///
    /// # Arguments
    ///
    /// * `host` - e.g. `"https://formspree.io"`
    /// * `form_id` - the opaque project id, e.g. `"xldwvnvg"`
    pub fn new(host: &str, form_id: &str) -> Self {
        Self::with_transport(host, form_id, ReqwestTransport::default())
    }
}

impl<T: FormTransport> FormspreeClient<T> {
    pub fn with_transport(host: &str, form_id: &str, transport: T) -> Self {
        Self {
            host: host.trim_end_matches('/').to_string(),
            form_id: form_id.trim().to_string(),
            transport,
        }
    }

    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    /// Full URL the inquiry is posted to: `{host}/f/{form_id}`.
    pub fn endpoint(&self) -> String {
        format!("{}/f/{}", self.host, self.form_id)
    }

    /// Post one inquiry.
    ///
    /// Calls `POST /f/{form_id}`. Any 2xx is success.
    pub async fn submit(&self, request: &InquiryRequest) -> Result<(), ContactError> {
        let url = self.endpoint();
        let body = serde_json::to_vec(request)?;
        log::debug!("posting inquiry to {url} ({} bytes)", body.len());
        let response = self.transport.post_json(&url, body).await?;
        parse_submission_response(response)
    }
}

/// Map a form-backend response to success or a [`ContactError::Rejected`].
///
/// The error body is read best-effort: empty or non-JSON bodies simply yield
/// no message.
pub(crate) fn parse_submission_response(response: TransportResponse) -> Result<(), ContactError> {
    match response.status {
        200..=299 => Ok(()),
        status => {
            let message = serde_json::from_str::<FormspreeErrorBody>(&response.body)
                .ok()
                .and_then(|body| body.display_message());
            log::warn!("form-backend rejected inquiry with status {status}: {message:?}");
            Err(ContactError::Rejected { status, message })
        }
    }
}
