//! Image download and transcoding adapters.

mod downloader;
mod jpeg_codec;

pub use downloader::{DEFAULT_REFERER, HttpImageFetcher};
pub use jpeg_codec::JpegCodec;
