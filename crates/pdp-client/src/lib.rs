//! Remote catalog client for the product detail page.
//!
//! A thin wrapper over the browser fetch API: one GET per product, no
//! retry, no timeout, no caching. Every failure kind collapses to
//! `CatalogError::NotFound` at the public boundary.

mod client;

pub use client::{FetchFailure, ProductClient};
