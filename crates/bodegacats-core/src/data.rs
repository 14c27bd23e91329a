//! Shared data model: the cat sighting record as served by the catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees, positive north.
    pub latitude: f64,
    /// Longitude in decimal degrees, positive east.
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A cat sighting as returned by `GET /api/cats`.
///
/// `name`, `bodega_name`, and `description` are optional: the service stores
/// blank form fields as null. `image_url` is a path relative to the service
/// origin (e.g. `/api/uploads/<uuid>.jpg`) and must be resolved by the
/// catalog client before display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatRecord {
    /// Service-assigned record id.
    pub id: i64,
    /// The cat's name, if the reporter knew it.
    #[serde(default)]
    pub name: Option<String>,
    /// Name of the bodega or store where the cat was seen.
    #[serde(default)]
    pub bodega_name: Option<String>,
    /// Free-text description of the sighting.
    #[serde(default)]
    pub description: Option<String>,
    /// Sighting latitude in decimal degrees.
    pub latitude: f64,
    /// Sighting longitude in decimal degrees.
    pub longitude: f64,
    /// Photo path relative to the service origin.
    pub image_url: String,
    /// When the sighting was recorded by the service.
    pub created_at: DateTime<Utc>,
}

impl CatRecord {
    /// The sighting location as a point.
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    /// Display name for lists and map popups: the cat's name when known,
    /// otherwise a generic label.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed cat")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_parses_with_null_optionals() {
        let json = r#"{
            "id": 7,
            "name": null,
            "bodega_name": null,
            "description": null,
            "latitude": 40.7128,
            "longitude": -74.006,
            "image_url": "/api/uploads/abc.jpg",
            "created_at": "2025-06-01T12:00:00Z"
        }"#;
        let cat: CatRecord = serde_json::from_str(json).unwrap();
        assert_eq!(cat.display_name(), "Unnamed cat");
        assert_eq!(cat.location(), GeoPoint::new(40.7128, -74.006));
    }

    #[test]
    fn record_parses_with_missing_optionals() {
        let json = r#"{
            "id": 8,
            "latitude": 40.73,
            "longitude": -73.99,
            "image_url": "/api/uploads/def.jpg",
            "created_at": "2025-06-02T09:30:00Z"
        }"#;
        let cat: CatRecord = serde_json::from_str(json).unwrap();
        assert!(cat.name.is_none());
        assert!(cat.bodega_name.is_none());
    }
}
