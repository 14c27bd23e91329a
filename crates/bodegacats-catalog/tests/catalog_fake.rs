//! Exercises the `CatalogService` seam with an in-memory fake: list
//! ordering, the empty catalog, and how a rejection surfaces to the
//! calling form.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use bodegacats_catalog::{CatalogService, NewSighting, SightingForm};
use bodegacats_core::data::CatRecord;
use bodegacats_core::error::{CatalogError, Error, Result};
use bodegacats_cropper::CropOutput;

/// In-memory stand-in for the catalog service.
struct FakeCatalog {
    cats: Mutex<Vec<CatRecord>>,
    reject_adds_with: Option<(u16, String)>,
}

impl FakeCatalog {
    fn empty() -> Self {
        Self {
            cats: Mutex::new(Vec::new()),
            reject_adds_with: None,
        }
    }

    fn rejecting(status: u16, message: &str) -> Self {
        Self {
            cats: Mutex::new(Vec::new()),
            reject_adds_with: Some((status, message.to_string())),
        }
    }
}

#[async_trait]
impl CatalogService for FakeCatalog {
    async fn list_cats(&self) -> Result<Vec<CatRecord>> {
        let mut cats = self.cats.lock().unwrap().clone();
        cats.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(cats)
    }

    async fn add_cat(&self, sighting: NewSighting) -> Result<CatRecord> {
        if let Some((status, message)) = &self.reject_adds_with {
            return Err(CatalogError::Rejected {
                status: *status,
                message: message.clone(),
            }
            .into());
        }
        let mut cats = self.cats.lock().unwrap();
        let cat = CatRecord {
            id: cats.len() as i64 + 1,
            name: sighting.name,
            bodega_name: sighting.bodega_name,
            description: sighting.description,
            latitude: sighting.location.latitude,
            longitude: sighting.location.longitude,
            image_url: format!("/api/uploads/{}.jpg", cats.len() + 1),
            created_at: timestamp(2025, cats.len() as u32 + 1),
        };
        cats.push(cat.clone());
        Ok(cat)
    }

    async fn health(&self) -> Result<()> {
        Ok(())
    }

    fn image_url(&self, relative: &str) -> String {
        format!("http://fake.test{relative}")
    }
}

fn timestamp(year: i32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, 6, day, 12, 0, 0).unwrap()
}

fn sighting(name: &str) -> NewSighting {
    let mut form = SightingForm {
        name: name.to_string(),
        latitude: "40.71".to_string(),
        longitude: "-74.00".to_string(),
        ..SightingForm::default()
    };
    form.set_photo(CropOutput {
        bytes: vec![0xFF, 0xD8],
        width: 247,
        height: 146,
    });
    form.validate().unwrap()
}

#[tokio::test]
async fn empty_catalog_lists_zero_cats() {
    let catalog = FakeCatalog::empty();
    let cats = catalog.list_cats().await.unwrap();
    assert!(cats.is_empty());
}

#[tokio::test]
async fn listing_is_newest_first() {
    let catalog = FakeCatalog::empty();
    catalog.add_cat(sighting("First")).await.unwrap();
    catalog.add_cat(sighting("Second")).await.unwrap();
    catalog.add_cat(sighting("Third")).await.unwrap();

    let cats = catalog.list_cats().await.unwrap();
    let names: Vec<_> = cats.iter().map(|c| c.display_name()).collect();
    assert_eq!(names, ["Third", "Second", "First"]);
}

#[tokio::test]
async fn rejection_surfaces_the_service_message() {
    let catalog = FakeCatalog::rejecting(400, "missing image");

    let mut form = SightingForm {
        name: "Mittens".to_string(),
        latitude: "40.71".to_string(),
        longitude: "-74.00".to_string(),
        ..SightingForm::default()
    };
    form.set_photo(CropOutput {
        bytes: vec![0xFF, 0xD8],
        width: 247,
        height: 146,
    });

    let err = catalog.add_cat(form.validate().unwrap()).await.unwrap_err();
    match err {
        Error::Catalog(CatalogError::Rejected { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "missing image");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }

    // The form survives the failed submission untouched.
    assert_eq!(form.name, "Mittens");
    assert!(form.photo.is_some());
}

#[tokio::test]
async fn trait_objects_compose() {
    let catalog: Box<dyn CatalogService> = Box::new(FakeCatalog::empty());
    assert!(catalog.health().await.is_ok());
    assert_eq!(
        catalog.image_url("/api/uploads/a.jpg"),
        "http://fake.test/api/uploads/a.jpg"
    );
}
