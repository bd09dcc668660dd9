//! JPEG re-encoding for chat delivery.
//!
//! Decodes any supported input, flattens transparency onto white, bounds the
//! longest edge and encodes a baseline JPEG with optimized Huffman tables.

use image::imageops::FilterType;
use image::{DynamicImage, Rgb, RgbImage};
use jpeg_encoder::{ColorType, Encoder};

use crate::domain::errors::ImageError;
use crate::domain::ports::{ImageCodecPort, ImageResult, TranscodeOptions};

/// [`ImageCodecPort`] decoding with the `image` crate and encoding with
/// `jpeg-encoder`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JpegCodec;

impl JpegCodec {
    /// Creates the codec.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ImageCodecPort for JpegCodec {
    fn compress(&self, data: &[u8], options: &TranscodeOptions) -> ImageResult<Vec<u8>> {
        let decoded =
            image::load_from_memory(data).map_err(|e| ImageError::Decode(e.to_string()))?;

        let rgb = flatten_onto_white(&decoded);
        let bounded = bound_longest_edge(rgb, options.max_edge);
        encode_jpeg(&bounded, options.quality)
    }
}

/// Converts to RGB, compositing any alpha channel over opaque white.
fn flatten_onto_white(img: &DynamicImage) -> RgbImage {
    if !img.color().has_alpha() {
        return img.to_rgb8();
    }

    let rgba = img.to_rgba8();
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        Rgb([blend_white(r, a), blend_white(g, a), blend_white(b, a)])
    })
}

fn blend_white(channel: u8, alpha: u8) -> u8 {
    let c = u16::from(channel);
    let a = u16::from(alpha);
    let blended = (c * a + 255 * (255 - a) + 127) / 255;
    u8::try_from(blended).unwrap_or(u8::MAX)
}

fn bound_longest_edge(img: RgbImage, max_edge: u32) -> RgbImage {
    if max_edge == 0 || img.width().max(img.height()) <= max_edge {
        return img;
    }

    DynamicImage::ImageRgb8(img)
        .resize(max_edge, max_edge, FilterType::Lanczos3)
        .into_rgb8()
}

fn encode_jpeg(img: &RgbImage, quality: u8) -> ImageResult<Vec<u8>> {
    let width = u16::try_from(img.width())
        .map_err(|_| ImageError::Encode(format!("width {} exceeds JPEG limit", img.width())))?;
    let height = u16::try_from(img.height())
        .map_err(|_| ImageError::Encode(format!("height {} exceeds JPEG limit", img.height())))?;

    let mut output = Vec::new();
    let mut encoder = Encoder::new(&mut output, quality.clamp(1, 100));
    encoder.set_optimized_huffman_tables(true);
    encoder
        .encode(img.as_raw(), width, height, ColorType::Rgb)
        .map_err(|e| ImageError::Encode(e.to_string()))?;
    Ok(output)
}
