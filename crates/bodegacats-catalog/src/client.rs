//! HTTP implementation of the catalog service.
//!
//! The service speaks plain REST: `GET /api/cats` for the sighting list,
//! `POST /api/cats` (multipart) to add one, `GET /api/health` for
//! liveness. Photo paths in responses are relative and are resolved
//! against the service origin here. Rejection bodies carry a single
//! `{"error": "..."}` field; when it is missing or unparseable a generic
//! message is surfaced instead.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Response, StatusCode};
use tracing::{debug, info, warn};
use uuid::Uuid;

use bodegacats_core::data::CatRecord;
use bodegacats_core::error::{CatalogError, Error, Result};

use crate::service::CatalogService;
use crate::sighting::NewSighting;

/// Fallback message when a rejection body carries no `error` field.
const GENERIC_FAILURE: &str = "The cat catalog could not process the request";

/// HTTP client for one catalog service origin.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    base: String,
    http: reqwest::Client,
}

impl HttpCatalog {
    /// Creates a client for the given origin, e.g.
    /// `http://127.0.0.1:5050`.
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self {
            base,
            http: reqwest::Client::new(),
        }
    }

    /// The service origin this client talks to.
    pub fn base(&self) -> &str {
        &self.base
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.base, path)
    }

    /// Maps a non-success response to a `Rejected` error, pulling the
    /// message out of the body when one is there.
    async fn reject(response: Response) -> CatalogError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message =
            rejection_message(&body).unwrap_or_else(|| GENERIC_FAILURE.to_string());
        warn!(status = status.as_u16(), %message, "catalog rejected request");
        CatalogError::Rejected {
            status: status.as_u16(),
            message,
        }
    }
}

/// Extracts the `error` field from a rejection body, if the body is JSON
/// and carries one.
pub fn rejection_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("error")?.as_str().map(str::to_string)
}

#[async_trait]
impl CatalogService for HttpCatalog {
    async fn list_cats(&self) -> Result<Vec<CatRecord>> {
        let response = self
            .http
            .get(self.api_url("/cats"))
            .send()
            .await
            .map_err(|err| CatalogError::ServiceUnavailable {
                reason: err.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(Self::reject(response).await.into());
        }

        let mut cats: Vec<CatRecord> =
            response
                .json()
                .await
                .map_err(|err| CatalogError::InvalidResponse {
                    reason: err.to_string(),
                })?;

        // Newest sightings first; the service returns insertion order.
        cats.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        debug!(count = cats.len(), "fetched cat sightings");
        Ok(cats)
    }

    async fn add_cat(&self, sighting: NewSighting) -> Result<CatRecord> {
        // The service stores blank text fields as null; send them empty.
        let photo_name = format!("{}.jpg", Uuid::new_v4());
        let content_type = sighting.photo.content_type();
        let photo_part = Part::bytes(sighting.photo.bytes)
            .file_name(photo_name)
            .mime_str(content_type)
            .map_err(|err| Error::other(format!("building photo part: {err}")))?;

        let form = Form::new()
            .text("name", sighting.name.unwrap_or_default())
            .text("bodega_name", sighting.bodega_name.unwrap_or_default())
            .text("description", sighting.description.unwrap_or_default())
            .text("latitude", sighting.location.latitude.to_string())
            .text("longitude", sighting.location.longitude.to_string())
            .part("image", photo_part);

        let response = self
            .http
            .post(self.api_url("/cats"))
            .multipart(form)
            .send()
            .await
            .map_err(|err| CatalogError::ServiceUnavailable {
                reason: err.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(Self::reject(response).await.into());
        }

        let cat: CatRecord =
            response
                .json()
                .await
                .map_err(|err| CatalogError::InvalidResponse {
                    reason: err.to_string(),
                })?;
        info!(id = cat.id, "sighting recorded");
        Ok(cat)
    }

    async fn health(&self) -> Result<()> {
        let response = self
            .http
            .get(self.api_url("/health"))
            .send()
            .await
            .map_err(|err| CatalogError::ServiceUnavailable {
                reason: err.to_string(),
            })?;

        if response.status() == StatusCode::OK {
            Ok(())
        } else {
            Err(Self::reject(response).await.into())
        }
    }

    fn image_url(&self, relative: &str) -> String {
        format!("{}{}", self.base, relative)
    }
}
