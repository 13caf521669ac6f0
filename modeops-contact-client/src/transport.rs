// SPDX-License-Identifier: MIT OR Apache-2.0

//! The single outbound HTTP call a submission makes.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;

use crate::error::ContactError;

/// Status and raw body of a completed request.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// Posts a JSON body and hands back whatever the server answered.
///
/// `Err` means the request never completed. Non-2xx responses are still
/// `Ok`; mapping them is the caller's job.
#[allow(async_fn_in_trait)]
pub trait FormTransport {
    async fn post_json(&self, url: &str, body: Vec<u8>)
        -> Result<TransportResponse, ContactError>;
}

/// [`FormTransport`] backed by `reqwest`, which uses `fetch` on wasm32.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

impl FormTransport for ReqwestTransport {
    async fn post_json(
        &self,
        url: &str,
        body: Vec<u8>,
    ) -> Result<TransportResponse, ContactError> {
        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Ok(TransportResponse { status, body })
    }
}
