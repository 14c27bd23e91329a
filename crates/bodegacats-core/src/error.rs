//! Error handling for Bodega Cats
//!
//! Provides error types for all layers of the application:
//! - Crop errors (image readiness / rasterization)
//! - Catalog errors (cat-catalog service communication)
//! - Form errors (sighting validation before submission)
//!
//! All error types use `thiserror` for ergonomic error handling. No error
//! is retried automatically; every retry is user-initiated.

use thiserror::Error;

/// Crop error type
///
/// Represents failures of the crop tool itself: committing before the
/// source photo is ready, undecodable sources, and encoder failures.
#[derive(Error, Debug, Clone)]
pub enum CropError {
    /// Commit was attempted before the source image finished loading.
    /// Recoverable: the caller should wait for the load signal and retry.
    #[error("Source image has not finished loading")]
    ImageNotReady,

    /// The source image could not be decoded. Terminal for this attempt;
    /// the caller must prompt for a different photo. Seen in practice with
    /// HEIC/HEIF phone-camera formats.
    #[error("Unsupported image format: {reason}")]
    UnsupportedFormat {
        /// Decoder message describing the failure.
        reason: String,
    },

    /// The cropped pixel block could not be encoded.
    #[error("Failed to encode cropped image: {reason}")]
    EncodeFailed {
        /// Encoder message describing the failure.
        reason: String,
    },
}

/// Catalog error type
///
/// Represents errors talking to the cat-catalog service.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    /// The service could not be reached at all.
    #[error("Cat catalog unavailable: {reason}")]
    ServiceUnavailable {
        /// Transport-level reason the service was unreachable.
        reason: String,
    },

    /// The service answered with a non-success status. The message is the
    /// `error` field of the response body when one was present, otherwise a
    /// generic failure message.
    #[error("Cat catalog rejected the request ({status}): {message}")]
    Rejected {
        /// HTTP status code returned by the service.
        status: u16,
        /// Human-readable rejection reason.
        message: String,
    },

    /// The service answered successfully but the body did not parse.
    #[error("Malformed catalog response: {reason}")]
    InvalidResponse {
        /// Parser message describing the failure.
        reason: String,
    },
}

/// Form error type
///
/// Validation failures caught before a sighting ever reaches the network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// No cropped photo is attached to the sighting.
    #[error("Please add a photo of the cat")]
    MissingPhoto,

    /// Latitude or longitude was left empty.
    #[error("Please provide the cat's location")]
    MissingLocation,

    /// A coordinate field did not parse as a number.
    #[error("Invalid {field}: {reason}")]
    InvalidCoordinate {
        /// The offending field, `latitude` or `longitude`.
        field: &'static str,
        /// Why the value did not parse.
        reason: String,
    },

    /// The photo exceeds the upload size cap.
    #[error("Photo is {size} bytes, larger than the {limit} byte limit")]
    PhotoTooLarge {
        /// Actual photo size in bytes.
        size: usize,
        /// Maximum allowed size in bytes.
        limit: usize,
    },
}

/// Main error type for Bodega Cats
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Crop tool error
    #[error(transparent)]
    Crop(#[from] CropError),

    /// Catalog service error
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Sighting form validation error
    #[error(transparent)]
    Form(#[from] FormError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if the caller can recover by waiting and retrying the same
    /// operation (currently only commit-before-load).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Crop(CropError::ImageNotReady))
    }

    /// Check if this is a crop error
    pub fn is_crop_error(&self) -> bool {
        matches!(self, Error::Crop(_))
    }

    /// Check if this is a catalog error
    pub fn is_catalog_error(&self) -> bool {
        matches!(self, Error::Catalog(_))
    }

    /// Check if this is a validation error
    pub fn is_form_error(&self) -> bool {
        matches!(self, Error::Form(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
