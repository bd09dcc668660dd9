//! Port definitions for image acquisition and transcoding.

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::errors::ImageError;

/// Result type for image operations.
pub type ImageResult<T> = std::result::Result<T, ImageError>;

/// Target limits for re-encoded images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscodeOptions {
    /// JPEG quality, 1-100.
    pub quality: u8,
    /// Longest allowed edge in pixels.
    pub max_edge: u32,
}

impl TranscodeOptions {
    /// Default JPEG quality.
    pub const DEFAULT_QUALITY: u8 = 85;
    /// Default longest edge.
    pub const DEFAULT_MAX_EDGE: u32 = 1500;
}

impl Default for TranscodeOptions {
    fn default() -> Self {
        Self {
            quality: Self::DEFAULT_QUALITY,
            max_edge: Self::DEFAULT_MAX_EDGE,
        }
    }
}

/// Port for downloading raw image bytes.
#[async_trait]
pub trait ImageFetchPort: Send + Sync {
    /// Downloads the image at `url`.
    async fn fetch(&self, url: &str) -> ImageResult<Bytes>;
}

/// Port for re-encoding downloaded images.
/// Implementations are CPU bound and called from a blocking task.
#[cfg_attr(test, mockall::automock)]
pub trait ImageCodecPort: Send + Sync {
    /// Decodes `data`, normalizes and bounds it, and re-encodes it.
    fn compress(&self, data: &[u8], options: &TranscodeOptions) -> ImageResult<Vec<u8>>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use parking_lot::Mutex;

    /// Fetcher returning canned bytes or a canned error, recording requested URLs.
    pub struct MockImageFetcher {
        outcome: ImageResult<Bytes>,
        requested: Mutex<Vec<String>>,
    }

    impl MockImageFetcher {
        /// Creates a fetcher that always returns `data`.
        pub fn returning(data: impl Into<Bytes>) -> Self {
            Self {
                outcome: Ok(data.into()),
                requested: Mutex::new(Vec::new()),
            }
        }

        /// Creates a fetcher that always fails with `error`.
        pub fn failing(error: ImageError) -> Self {
            Self {
                outcome: Err(error),
                requested: Mutex::new(Vec::new()),
            }
        }

        /// Returns the URLs requested so far.
        pub fn requested(&self) -> Vec<String> {
            self.requested.lock().clone()
        }
    }

    #[async_trait]
    impl ImageFetchPort for MockImageFetcher {
        async fn fetch(&self, url: &str) -> ImageResult<Bytes> {
            self.requested.lock().push(url.to_string());
            self.outcome.clone()
        }
    }
}
