//! The source photo and its load state.
//!
//! Image decoding is the one asynchronous boundary of the crop tool, so
//! readiness is an explicit flag set by a completion signal rather than an
//! assumption about event ordering. A `SourceImage` is created as soon as
//! the calling UI knows the displayed size, and flips to `Ready` or
//! `Failed` when decoding finishes.

use image::DynamicImage;
use tracing::{debug, warn};

use bodegacats_core::error::CropError;

/// Where the photo is in its load/decode lifecycle.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    /// Decode has not completed; commit must fail fast.
    #[default]
    Loading,
    /// Decoded pixels at the photo's natural resolution.
    Ready(DynamicImage),
    /// The decoder rejected the photo (HEIC/HEIF uploads in practice).
    Failed {
        /// Decoder message describing the failure.
        reason: String,
    },
}

/// The photo being cropped: decoded pixels (once available) plus its
/// on-screen display size. Never mutated by the crop tool beyond the load
/// transition.
#[derive(Debug, Clone)]
pub struct SourceImage {
    displayed_width: f64,
    displayed_height: f64,
    state: LoadState,
}

impl SourceImage {
    /// Creates a not-yet-loaded source with a known display size.
    pub fn new(displayed_width: f64, displayed_height: f64) -> Self {
        Self {
            displayed_width,
            displayed_height,
            state: LoadState::Loading,
        }
    }

    /// Decodes encoded photo bytes into a ready (or failed) source.
    pub fn from_bytes(bytes: &[u8], displayed_width: f64, displayed_height: f64) -> Self {
        let mut source = Self::new(displayed_width, displayed_height);
        match image::load_from_memory(bytes) {
            Ok(img) => source.complete_load(img),
            Err(err) => source.fail_load(err.to_string()),
        }
        source
    }

    /// The external load-completion signal: decoding succeeded.
    pub fn complete_load(&mut self, image: DynamicImage) {
        debug!(
            natural_width = image.width(),
            natural_height = image.height(),
            "source image ready"
        );
        self.state = LoadState::Ready(image);
    }

    /// The external load-completion signal: decoding failed.
    pub fn fail_load(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        warn!(%reason, "source image failed to decode");
        self.state = LoadState::Failed { reason };
    }

    /// Whether the photo is decoded and commit may proceed.
    pub fn is_ready(&self) -> bool {
        matches!(self.state, LoadState::Ready(_))
    }

    /// The current load state.
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// On-screen width the photo is rendered at.
    pub fn displayed_width(&self) -> f64 {
        self.displayed_width
    }

    /// On-screen height the photo is rendered at.
    pub fn displayed_height(&self) -> f64 {
        self.displayed_height
    }

    /// The decoded pixels, or the readiness error commit would report:
    /// `ImageNotReady` while loading, `UnsupportedFormat` after a decode
    /// failure.
    pub fn pixels(&self) -> Result<&DynamicImage, CropError> {
        match &self.state {
            LoadState::Loading => Err(CropError::ImageNotReady),
            LoadState::Failed { reason } => Err(CropError::UnsupportedFormat {
                reason: reason.clone(),
            }),
            LoadState::Ready(image) => Ok(image),
        }
    }

    /// Natural (unscaled) pixel size, once decoded.
    pub fn natural_size(&self) -> Option<(u32, u32)> {
        match &self.state {
            LoadState::Ready(image) => Some((image.width(), image.height())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn pixels_fail_fast_before_load() {
        let source = SourceImage::new(400.0, 300.0);
        assert!(matches!(source.pixels(), Err(CropError::ImageNotReady)));
        assert!(!source.is_ready());
    }

    #[test]
    fn failed_decode_reports_unsupported_format() {
        let source = SourceImage::from_bytes(b"not an image", 400.0, 300.0);
        assert!(matches!(
            source.pixels(),
            Err(CropError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn load_signal_makes_source_ready() {
        let mut source = SourceImage::new(400.0, 300.0);
        source.complete_load(DynamicImage::ImageRgb8(RgbImage::new(800, 600)));
        assert!(source.is_ready());
        assert_eq!(source.natural_size(), Some((800, 600)));
    }
}
