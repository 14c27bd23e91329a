//! The sighting form: raw user input and its validation into a
//! submittable record.
//!
//! The form is validated without being consumed, so a failed submission
//! leaves every field (and the cropped photo) intact for the user to fix
//! and resubmit. Only a successful submission resets it.

use bodegacats_core::constants::MAX_PHOTO_BYTES;
use bodegacats_core::data::GeoPoint;
use bodegacats_core::error::FormError;
use bodegacats_cropper::CropOutput;

/// A sighting that passed validation and is ready to submit.
#[derive(Debug, Clone)]
pub struct NewSighting {
    /// The cat's name, if known.
    pub name: Option<String>,
    /// Name of the bodega or store.
    pub bodega_name: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Where the cat was seen.
    pub location: GeoPoint,
    /// The cropped photo to upload.
    pub photo: CropOutput,
}

/// Raw form state as the user typed it. Coordinates stay strings until
/// validation; the photo arrives from the crop tool's commit.
#[derive(Debug, Clone, Default)]
pub struct SightingForm {
    pub name: String,
    pub bodega_name: String,
    pub description: String,
    pub latitude: String,
    pub longitude: String,
    pub photo: Option<CropOutput>,
}

impl SightingForm {
    /// Attaches the committed crop to the form.
    pub fn set_photo(&mut self, photo: CropOutput) {
        self.photo = Some(photo);
    }

    /// Removes the photo (the user discarded the crop).
    pub fn clear_photo(&mut self) {
        self.photo = None;
    }

    /// Validates the form into a submittable sighting. Checked before any
    /// network I/O, in the order the user sees the fields: photo first,
    /// then location. The form itself is untouched, so callers keep state
    /// across failures.
    pub fn validate(&self) -> Result<NewSighting, FormError> {
        let photo = self.photo.clone().ok_or(FormError::MissingPhoto)?;
        if photo.bytes.len() > MAX_PHOTO_BYTES {
            return Err(FormError::PhotoTooLarge {
                size: photo.bytes.len(),
                limit: MAX_PHOTO_BYTES,
            });
        }

        let lat_text = self.latitude.trim();
        let lon_text = self.longitude.trim();
        if lat_text.is_empty() || lon_text.is_empty() {
            return Err(FormError::MissingLocation);
        }
        let latitude = lat_text
            .parse::<f64>()
            .map_err(|err| FormError::InvalidCoordinate {
                field: "latitude",
                reason: err.to_string(),
            })?;
        let longitude = lon_text
            .parse::<f64>()
            .map_err(|err| FormError::InvalidCoordinate {
                field: "longitude",
                reason: err.to_string(),
            })?;

        Ok(NewSighting {
            name: non_blank(&self.name),
            bodega_name: non_blank(&self.bodega_name),
            description: non_blank(&self.description),
            location: GeoPoint::new(latitude, longitude),
            photo,
        })
    }

    /// Clears every field; called after a successful submission.
    pub fn reset(&mut self) {
        *self = SightingForm::default();
    }
}

/// Trims a field; blank fields become `None` (the service stores them as
/// null).
fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
