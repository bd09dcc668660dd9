//! Image host downloads with referer.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header;
use tracing::debug;

use crate::domain::errors::ImageError;
use crate::domain::ports::{ImageFetchPort, ImageResult};
use crate::infrastructure::gateway::TransportSession;

/// Referer the image host expects on direct downloads.
pub const DEFAULT_REFERER: &str = "https://www.pixiv.net/";

/// Downloads images over the shared transport session.
#[derive(Debug)]
pub struct HttpImageFetcher {
    session: Arc<TransportSession>,
    referer: String,
}

impl HttpImageFetcher {
    /// Creates a fetcher sending `referer` with every request.
    #[must_use]
    pub fn new(session: Arc<TransportSession>, referer: impl Into<String>) -> Self {
        Self {
            session,
            referer: referer.into(),
        }
    }
}

#[async_trait]
impl ImageFetchPort for HttpImageFetcher {
    async fn fetch(&self, url: &str) -> ImageResult<Bytes> {
        let client = self
            .session
            .acquire()
            .await
            .map_err(|e| ImageError::Fetch(e.to_string()))?;

        debug!(url = %url, "Downloading image");

        let response = client
            .get(url)
            .header(header::REFERER, &self.referer)
            .send()
            .await
            .map_err(|e| ImageError::Fetch(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(ImageError::Status(response.status().as_u16()));
        }

        response
            .bytes()
            .await
            .map_err(|e| ImageError::Fetch(format!("failed to read body: {e}")))
    }
}
