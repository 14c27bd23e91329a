//! Shared constants for crop geometry and image encoding.

/// Fixed width-to-height ratio every crop rectangle must keep.
///
/// Matches the 247x146 photo slot on a sighting card, so a crop committed
/// here renders on the card without letterboxing.
pub const CARD_ASPECT_RATIO: f64 = 247.0 / 146.0;

/// Smallest allowed crop-rectangle width in display pixels.
pub const MIN_CROP_SIZE: f64 = 50.0;

/// Default crop-rectangle width when a session opens.
pub const DEFAULT_CROP_WIDTH: f64 = 200.0;

/// Default crop-rectangle origin (both axes) when a session opens.
pub const DEFAULT_CROP_ORIGIN: f64 = 50.0;

/// Pointer distance (display pixels) within which a corner handle wins the
/// hit test over the rectangle interior.
pub const HANDLE_GRAB_RADIUS: f64 = 12.0;

/// JPEG quality used when rasterizing a committed crop.
pub const JPEG_QUALITY: u8 = 80;

/// Upper bound on an uploaded photo, in bytes (10 MiB).
pub const MAX_PHOTO_BYTES: usize = 10 * 1024 * 1024;

/// Relative tolerance used when checking the aspect-ratio invariant.
pub const ASPECT_TOLERANCE: f64 = 1e-6;
