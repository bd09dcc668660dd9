//! Lazily created HTTP session shared by the gateway client and image fetcher.

use std::time::Duration;

use reqwest::Client;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::errors::DeliveryError;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const USER_AGENT: &str = concat!("illust-notifier/", env!("CARGO_PKG_VERSION"));

/// Reusable HTTP connection pool created on first use.
///
/// The pool stays open until [`TransportSession::close`] is called; the next
/// acquire after a close builds a fresh one.
#[derive(Debug)]
pub struct TransportSession {
    client: Mutex<Option<Client>>,
    timeout: Duration,
}

impl Default for TransportSession {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }
}

impl TransportSession {
    /// Creates a closed session whose requests time out after `timeout`.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: Mutex::new(None),
            timeout,
        }
    }

    /// Returns the open client, building it if needed.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub async fn acquire(&self) -> Result<Client, DeliveryError> {
        let mut guard = self.client.lock().await;
        if let Some(client) = guard.as_ref() {
            return Ok(client.clone());
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(self.timeout)
            .build()
            .map_err(|e| DeliveryError::session(format!("failed to create HTTP client: {e}")))?;

        debug!(timeout_secs = self.timeout.as_secs(), "HTTP session opened");
        *guard = Some(client.clone());
        Ok(client)
    }

    /// Returns true while a client is held.
    pub async fn is_open(&self) -> bool {
        self.client.lock().await.is_some()
    }

    /// Drops the held client. Does nothing if already closed.
    pub async fn close(&self) {
        if self.client.lock().await.take().is_some() {
            debug!("HTTP session closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lazy_open_and_idempotent_close() {
        let session = TransportSession::default();
        assert!(!session.is_open().await);

        session.acquire().await.unwrap();
        assert!(session.is_open().await);

        session.close().await;
        session.close().await;
        assert!(!session.is_open().await);

        session.acquire().await.unwrap();
        assert!(session.is_open().await);
    }
}
