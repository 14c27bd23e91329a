//! The narrow interface the rest of the app consumes the catalog through.

use async_trait::async_trait;

use bodegacats_core::data::CatRecord;
use bodegacats_core::error::Result;

use crate::sighting::NewSighting;

/// The cat-catalog collaborator.
///
/// One production implementation exists ([`crate::HttpCatalog`]); tests
/// use in-memory fakes. All failures surface as
/// [`bodegacats_core::CatalogError`] variants; nothing is retried
/// automatically.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Fetches every recorded sighting, newest first.
    async fn list_cats(&self) -> Result<Vec<CatRecord>>;

    /// Submits a validated sighting; returns the record the service
    /// created for it.
    async fn add_cat(&self, sighting: NewSighting) -> Result<CatRecord>;

    /// Checks the service's health endpoint.
    async fn health(&self) -> Result<()>;

    /// Resolves a service-relative photo path (e.g. `/api/uploads/x.jpg`)
    /// to an absolute URL.
    fn image_url(&self, relative: &str) -> String;
}
