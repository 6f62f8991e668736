//! Catalog endpoint configuration.

/// Number of records per page. Fixed for the lifetime of a session.
pub const PAGE_SIZE: usize = 12;

/// Environment variable overriding the endpoint on native builds.
#[cfg(not(target_arch = "wasm32"))]
const BASE_URL_ENV: &str = "ARTWORK_API_URL";

/// Default artworks endpoint.
const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1/artworks";

/// Fields requested from the API; matches the [`Artwork`](super::Artwork) model.
const DEFAULT_FIELDS: &[&str] = &[
    "id",
    "title",
    "place_of_origin",
    "artist_display",
    "inscriptions",
    "date_start",
    "date_end",
];

/// Configuration for the remote catalog client.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the paged artworks endpoint.
    pub base_url: String,
    /// Records requested per page.
    pub page_size: usize,
    /// Field projection sent as the `fields` query parameter.
    pub fields: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: PAGE_SIZE,
            fields: DEFAULT_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl CatalogConfig {
    /// Default configuration, with the endpoint taken from
    /// `ARTWORK_API_URL` when set.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::default().with_base_url(url.trim()),
            _ => Self::default(),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Points the client at a different endpoint.
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Builds the request URL for a 1-indexed page.
    pub fn page_url(&self, page: u32) -> String {
        format!(
            "{}?page={}&limit={}&fields={}",
            self.base_url.trim_end_matches('/'),
            page,
            self.page_size,
            self.fields.join(",")
        )
    }
}
