//! Rasterization: turning a crop rectangle into encoded image bytes.
//!
//! The crop rectangle lives in display coordinates; the photo may be
//! rendered smaller (or letterboxed) than its natural resolution. Mapping
//! uses an independent scale per axis:
//!
//! ```text
//! native_x = display_x * (natural_width  / displayed_width)
//! native_y = display_y * (natural_height / displayed_height)
//! ```
//!
//! The native pixel block is copied without resampling and encoded as
//! JPEG.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use tracing::debug;

use bodegacats_core::constants::JPEG_QUALITY;
use bodegacats_core::error::CropError;

use crate::geometry::CropRect;
use crate::source::SourceImage;

/// The committed crop: encoded JPEG bytes at the photo's native
/// resolution. Ownership transfers to the caller on commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropOutput {
    /// Encoded JPEG bytes.
    pub bytes: Vec<u8>,
    /// Output width in native pixels.
    pub width: u32,
    /// Output height in native pixels.
    pub height: u32,
}

impl CropOutput {
    /// MIME type of the encoded bytes.
    pub fn content_type(&self) -> &'static str {
        "image/jpeg"
    }
}

/// Rasterizes the selection: maps the rectangle from display to native
/// coordinates, copies that pixel block, and encodes it.
///
/// Fails with `ImageNotReady` if the source has not finished loading and
/// `UnsupportedFormat` if it failed to decode.
pub fn render_crop(source: &SourceImage, rect: &CropRect) -> Result<CropOutput, CropError> {
    let image = source.pixels()?;

    let scale_x = f64::from(image.width()) / source.displayed_width();
    let scale_y = f64::from(image.height()) / source.displayed_height();

    let native_left = (rect.left * scale_x).round().max(0.0) as u32;
    let native_top = (rect.top * scale_y).round().max(0.0) as u32;
    let native_left = native_left.min(image.width().saturating_sub(1));
    let native_top = native_top.min(image.height().saturating_sub(1));

    let native_width = ((rect.width * scale_x).round() as u32)
        .clamp(1, image.width() - native_left);
    let native_height = ((rect.height * scale_y).round() as u32)
        .clamp(1, image.height() - native_top);

    debug!(
        native_left,
        native_top, native_width, native_height, "rasterizing crop"
    );

    let block = image.crop_imm(native_left, native_top, native_width, native_height);

    let mut bytes = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY);
    block
        .to_rgb8()
        .write_with_encoder(encoder)
        .map_err(|err| CropError::EncodeFailed {
            reason: err.to_string(),
        })?;

    Ok(CropOutput {
        bytes: bytes.into_inner(),
        width: native_width,
        height: native_height,
    })
}
