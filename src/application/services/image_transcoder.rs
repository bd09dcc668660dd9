//! Download-and-compress step for notification preview images.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::errors::ImageError;
use crate::domain::ports::{ImageCodecPort, ImageFetchPort, ImageResult, TranscodeOptions};

/// Fetches a source image and re-encodes it for chat delivery.
///
/// Failures never escape: every error is logged and reported as `None` so the
/// caller can fall back to a link.
#[derive(Clone)]
pub struct ImageTranscoder {
    fetcher: Arc<dyn ImageFetchPort>,
    codec: Arc<dyn ImageCodecPort>,
    options: TranscodeOptions,
}

impl std::fmt::Debug for ImageTranscoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageTranscoder")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl ImageTranscoder {
    /// Creates a transcoder from its collaborators.
    #[must_use]
    pub fn new(
        fetcher: Arc<dyn ImageFetchPort>,
        codec: Arc<dyn ImageCodecPort>,
        options: TranscodeOptions,
    ) -> Self {
        Self {
            fetcher,
            codec,
            options,
        }
    }

    /// Downloads `url` and returns compressed JPEG bytes, or `None` on any failure.
    pub async fn fetch_and_compress(&self, url: &str) -> Option<Vec<u8>> {
        match self.try_fetch_and_compress(url).await {
            Ok(data) => {
                debug!(url = %url, bytes = data.len(), "Image transcoded");
                Some(data)
            }
            Err(e) => {
                warn!(url = %url, error = %e, "Image processing failed");
                None
            }
        }
    }

    async fn try_fetch_and_compress(&self, url: &str) -> ImageResult<Vec<u8>> {
        let raw = self.fetcher.fetch(url).await?;

        let codec = Arc::clone(&self.codec);
        let options = self.options;
        tokio::task::spawn_blocking(move || codec.compress(&raw, &options))
            .await
            .map_err(|e| ImageError::Task(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockImageCodecPort;
    use crate::domain::ports::mocks::MockImageFetcher;

    fn transcoder(fetcher: MockImageFetcher, codec: MockImageCodecPort) -> ImageTranscoder {
        ImageTranscoder::new(
            Arc::new(fetcher),
            Arc::new(codec),
            TranscodeOptions::default(),
        )
    }

    #[tokio::test]
    async fn test_success_returns_codec_output() {
        let mut codec = MockImageCodecPort::new();
        codec
            .expect_compress()
            .withf(|data, options| data == b"raw".as_slice() && options.quality == 85)
            .times(1)
            .returning(|_, _| Ok(vec![0xFF, 0xD8, 0xFF]));

        let result = transcoder(MockImageFetcher::returning(&b"raw"[..]), codec)
            .fetch_and_compress("https://img/1.png")
            .await;

        assert_eq!(result, Some(vec![0xFF, 0xD8, 0xFF]));
    }

    #[tokio::test]
    async fn test_fetch_failure_is_absent_and_skips_codec() {
        let mut codec = MockImageCodecPort::new();
        codec.expect_compress().never();

        let result = transcoder(MockImageFetcher::failing(ImageError::Status(403)), codec)
            .fetch_and_compress("https://img/1.png")
            .await;

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_codec_failure_is_absent() {
        let mut codec = MockImageCodecPort::new();
        codec
            .expect_compress()
            .returning(|_, _| Err(ImageError::Decode("not an image".into())));

        let result = transcoder(MockImageFetcher::returning(&b"garbage"[..]), codec)
            .fetch_and_compress("https://img/1.png")
            .await;

        assert!(result.is_none());
    }
}
