//! # Bodega Cats
//!
//! Crowdsourced tracker of bodega cats in New York City. Users browse
//! recorded sightings and submit new ones: a photo cropped to the card
//! aspect ratio, plus a name, bodega, description, and location.
//!
//! ## Architecture
//!
//! The project is organized as a workspace with focused crates:
//!
//! 1. **bodegacats-core** - shared types, the error taxonomy, constants,
//!    and the `CatRecord` data model
//! 2. **bodegacats-cropper** - the interactive fixed-aspect crop tool:
//!    drag/resize geometry, pointer state machine, rasterization
//! 3. **bodegacats-catalog** - the cat-catalog service client and the
//!    sighting form with its validation
//! 4. **bodegacats** - this crate: the library facade and the CLI binary
//!    that acts as the crop tool's calling context

pub use bodegacats_core::constants;
pub use bodegacats_core::{
    CatRecord, CatalogError, CropError, Error, FormError, GeoPoint, Result,
};

pub use bodegacats_cropper::{
    hit_test, resized, CropOutput, CropRect, CropSession, CropTool, DragState, Handle,
    HitTarget, LoadState, SourceImage,
};

pub use bodegacats_catalog::{
    rejection_message, CatalogService, HttpCatalog, NewSighting, SightingForm,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
