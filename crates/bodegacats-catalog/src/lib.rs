//! # Bodega Cats Catalog
//!
//! Client for the cat-catalog service: the external collaborator that
//! stores sightings and serves photos. The service is consumed through the
//! narrow [`CatalogService`] trait; [`HttpCatalog`] is the HTTP
//! implementation used in production, and tests substitute in-memory
//! fakes.
//!
//! Also home to the sighting form model: field validation happens here,
//! before anything reaches the network.

pub mod client;
pub mod service;
pub mod sighting;

pub use client::{rejection_message, HttpCatalog};
pub use service::CatalogService;
pub use sighting::{NewSighting, SightingForm};
