//! Sighting-form validation: every check runs before the network is
//! touched, and a failed validation leaves the form intact.

use bodegacats_catalog::SightingForm;
use bodegacats_core::constants::MAX_PHOTO_BYTES;
use bodegacats_core::error::FormError;
use bodegacats_cropper::CropOutput;

fn test_photo() -> CropOutput {
    CropOutput {
        bytes: vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10],
        width: 400,
        height: 236,
    }
}

fn filled_form() -> SightingForm {
    let mut form = SightingForm {
        name: "Oreo".to_string(),
        bodega_name: "Lucky Deli".to_string(),
        description: "Sleeping on the register".to_string(),
        latitude: "40.7128".to_string(),
        longitude: "-74.0060".to_string(),
        photo: None,
    };
    form.set_photo(test_photo());
    form
}

#[test]
fn valid_form_produces_a_sighting() {
    let sighting = filled_form().validate().unwrap();
    assert_eq!(sighting.name.as_deref(), Some("Oreo"));
    assert_eq!(sighting.bodega_name.as_deref(), Some("Lucky Deli"));
    assert!((sighting.location.latitude - 40.7128).abs() < 1e-9);
    assert!((sighting.location.longitude - -74.006).abs() < 1e-9);
}

#[test]
fn blank_optional_fields_become_none() {
    let mut form = filled_form();
    form.name = "   ".to_string();
    form.bodega_name = String::new();
    let sighting = form.validate().unwrap();
    assert!(sighting.name.is_none());
    assert!(sighting.bodega_name.is_none());
}

#[test]
fn photo_is_required() {
    let mut form = filled_form();
    form.clear_photo();
    assert_eq!(form.validate().unwrap_err(), FormError::MissingPhoto);
}

#[test]
fn location_is_required() {
    let mut form = filled_form();
    form.latitude = String::new();
    assert_eq!(form.validate().unwrap_err(), FormError::MissingLocation);

    let mut form = filled_form();
    form.longitude = "  ".to_string();
    assert_eq!(form.validate().unwrap_err(), FormError::MissingLocation);
}

#[test]
fn unparseable_coordinates_are_rejected() {
    let mut form = filled_form();
    form.latitude = "forty".to_string();
    match form.validate().unwrap_err() {
        FormError::InvalidCoordinate { field, .. } => assert_eq!(field, "latitude"),
        other => panic!("expected InvalidCoordinate, got {other:?}"),
    }
}

#[test]
fn oversized_photos_are_rejected() {
    let mut form = filled_form();
    form.set_photo(CropOutput {
        bytes: vec![0; MAX_PHOTO_BYTES + 1],
        width: 4000,
        height: 2364,
    });
    assert!(matches!(
        form.validate().unwrap_err(),
        FormError::PhotoTooLarge { .. }
    ));
}

#[test]
fn failed_validation_preserves_form_state() {
    let mut form = filled_form();
    form.latitude = String::new();

    assert!(form.validate().is_err());

    // Nothing the user typed is lost.
    assert_eq!(form.name, "Oreo");
    assert_eq!(form.description, "Sleeping on the register");
    assert!(form.photo.is_some());
}

#[test]
fn reset_clears_everything_after_success() {
    let mut form = filled_form();
    assert!(form.validate().is_ok());
    form.reset();
    assert!(form.name.is_empty());
    assert!(form.photo.is_none());
}
