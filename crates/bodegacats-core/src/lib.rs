//! # Bodega Cats Core
//!
//! Core types, errors, and the shared data model for the Bodega Cats
//! sighting tracker. Provides the fundamental abstractions used by the
//! cropper and catalog crates: the unified error taxonomy, geometry and
//! encoding constants, and the `CatRecord` wire model.

pub mod constants;
pub mod data;
pub mod error;

pub use data::{CatRecord, GeoPoint};
pub use error::{CatalogError, CropError, Error, FormError, Result};
