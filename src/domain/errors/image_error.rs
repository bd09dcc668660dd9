//! Image acquisition and transcoding error types.

use thiserror::Error;

/// Image error variants.
#[derive(Debug, Clone, Error)]
#[allow(missing_docs)]
pub enum ImageError {
    #[error("image download failed: {0}")]
    Fetch(String),

    #[error("image host returned HTTP {0}")]
    Status(u16),

    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("failed to encode image: {0}")]
    Encode(String),

    #[error("transcode task failed: {0}")]
    Task(String),
}

impl ImageError {
    /// Returns whether the failure happened before any bytes were decoded.
    #[must_use]
    pub const fn is_fetch_error(&self) -> bool {
        matches!(self, Self::Fetch(_) | Self::Status(_))
    }
}
