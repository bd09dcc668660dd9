//! Messaging gateway HTTP client.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{StatusCode, header};
use serde_json::Value;
use tracing::{debug, error};

use super::dto::SendRequest;
use super::session::TransportSession;
use crate::domain::entities::{ApiKey, DeliveryResult, MessageChain};
use crate::domain::errors::DeliveryError;
use crate::domain::ports::DeliveryPort;

/// Path of the send endpoint under the gateway base URL.
pub const SEND_ENDPOINT: &str = "/api/v1/send";

/// Where and how to deliver messages.
#[derive(Debug, Clone)]
pub struct GatewayTarget {
    /// Gateway base URL, e.g. `http://127.0.0.1:6185`.
    pub base_url: String,
    /// Destination conversation identifier.
    pub unified_msg_origin: String,
    /// Optional bearer credential.
    pub api_key: Option<ApiKey>,
    /// Endpoint path appended to the base URL.
    pub endpoint_path: String,
}

impl GatewayTarget {
    /// Creates a target using the default endpoint and no credential.
    #[must_use]
    pub fn new(base_url: impl Into<String>, unified_msg_origin: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            unified_msg_origin: unified_msg_origin.into(),
            api_key: None,
            endpoint_path: SEND_ENDPOINT.to_string(),
        }
    }

    /// Sets the bearer credential.
    #[must_use]
    pub fn with_api_key(mut self, api_key: Option<ApiKey>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Returns the full send URL.
    #[must_use]
    pub fn send_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.endpoint_path.trim_start_matches('/')
        )
    }
}

/// Posts message chains to the gateway over a shared [`TransportSession`].
///
/// No retries happen here; failures are logged and returned to the caller.
pub struct HttpDeliveryClient {
    session: Arc<TransportSession>,
    target: GatewayTarget,
}

impl std::fmt::Debug for HttpDeliveryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpDeliveryClient")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

impl HttpDeliveryClient {
    /// Creates a client for `target`.
    #[must_use]
    pub fn new(session: Arc<TransportSession>, target: GatewayTarget) -> Self {
        Self { session, target }
    }

    async fn send(&self, chain: &MessageChain) -> Result<DeliveryResult, DeliveryError> {
        let client = self.session.acquire().await?;
        let url = self.target.send_url();
        let body = SendRequest::new(&self.target.unified_msg_origin, chain);

        let mut request = client
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&body);
        if let Some(key) = &self.target.api_key {
            request = request.header(header::AUTHORIZATION, key.bearer());
        }

        debug!(url = %url, segments = chain.len(), "Posting message chain");

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status != StatusCode::OK {
            return Err(DeliveryError::status(status.as_u16(), text));
        }

        let payload: Value = serde_json::from_str(&text)
            .map_err(|e| DeliveryError::invalid_response(format!("body is not JSON: {e}")))?;

        debug!(response = %payload, "Message delivered");
        Ok(DeliveryResult::accepted(payload))
    }
}

#[async_trait]
impl DeliveryPort for HttpDeliveryClient {
    async fn post(&self, chain: &MessageChain) -> Result<DeliveryResult, DeliveryError> {
        self.send(chain).await.map_err(|e| {
            match &e {
                DeliveryError::Status { status, body } => {
                    error!(status = *status, body = %body, "Gateway rejected message");
                }
                DeliveryError::Timeout => error!("Gateway request timed out"),
                other => error!(error = %other, "Gateway request failed"),
            }
            e
        })
    }

    async fn close(&self) {
        self.session.close().await;
    }
}
