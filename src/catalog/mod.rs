//! Remote artwork catalog integration.
//!
//! This module provides functionality for:
//! - Describing the artwork records served by the catalog API
//! - Fetching one page of records at a time over HTTP
//! - Bridging async fetches with egui's synchronous update loop

mod client;
mod config;
mod error;
mod fetch_channel;
mod types;

#[cfg(test)]
pub mod testing;

pub use client::{ArticClient, CatalogClient};
pub use config::{CatalogConfig, PAGE_SIZE};
pub use error::{BulkFetchError, FetchError};
pub use fetch_channel::{FetchChannel, FetchOutcome};
pub use types::{Artwork, ArtworkId, ArtworkPage};
