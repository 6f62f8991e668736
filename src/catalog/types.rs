//! Type definitions for catalog records.
//!
//! Field names follow the Rust side of the model; serde renames map them
//! onto the JSON produced by the artworks API.

use serde::{Deserialize, Serialize};

/// Catalog identifier of a single artwork.
///
/// Stable across fetches and unique within the catalog. No other
/// field of an [`Artwork`] is assumed to be unique.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ArtworkId(pub u64);

/// A single artwork record as returned by the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: ArtworkId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "place_of_origin")]
    pub origin_place: Option<String>,
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub inscriptions: Option<String>,
    #[serde(default)]
    pub date_start: Option<i32>,
    #[serde(default)]
    pub date_end: Option<i32>,
}

/// Placeholder shown for missing text fields.
const MISSING: &str = "N/A";

impl Artwork {
    pub fn display_title(&self) -> &str {
        non_empty(&self.title).unwrap_or("Untitled")
    }

    pub fn display_origin(&self) -> &str {
        non_empty(&self.origin_place).unwrap_or(MISSING)
    }

    pub fn display_artist(&self) -> &str {
        non_empty(&self.artist_display).unwrap_or(MISSING)
    }

    pub fn display_inscriptions(&self) -> &str {
        non_empty(&self.inscriptions).unwrap_or(MISSING)
    }

    pub fn display_start_date(&self) -> String {
        display_year(self.date_start)
    }

    pub fn display_end_date(&self) -> String {
        display_year(self.date_end)
    }
}

fn display_year(year: Option<i32>) -> String {
    year.map_or_else(|| MISSING.to_string(), |y| y.to_string())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Pagination block of an API response.
///
/// Only `total` is required. Page numbers are always chosen by the
/// client, so the echoed position fields are informational.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub current_page: u32,
}

/// One page of records plus the catalog's reported pagination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtworkPage {
    pub pagination: Pagination,
    pub data: Vec<Artwork>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_response() {
        let json = r#"{
            "pagination": {
                "total": 129884,
                "limit": 12,
                "offset": 0,
                "total_pages": 10824,
                "current_page": 1,
                "next_url": "https://api.artic.edu/api/v1/artworks?page=2&limit=12"
            },
            "data": [
                {
                    "id": 16568,
                    "title": "Water Lilies",
                    "place_of_origin": "France",
                    "artist_display": "Claude Monet\nFrench, 1840-1926",
                    "inscriptions": null,
                    "date_start": 1906,
                    "date_end": 1906
                },
                { "id": 27992 }
            ],
            "info": { "license_text": "..." }
        }"#;

        let page: ArtworkPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.pagination.total, 129884);
        assert_eq!(page.pagination.total_pages, 10824);
        assert_eq!(page.pagination.offset, 0);
        let ids: Vec<ArtworkId> = page.data.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![ArtworkId(16568), ArtworkId(27992)]);

        let lilies = &page.data[0];
        assert_eq!(lilies.origin_place.as_deref(), Some("France"));
        assert_eq!(lilies.inscriptions, None);
        assert_eq!(lilies.display_start_date(), "1906");
        assert_eq!(lilies.display_end_date(), "1906");

        let bare = &page.data[1];
        assert_eq!(bare.display_title(), "Untitled");
        assert_eq!(bare.display_origin(), "N/A");
    }

    #[test]
    fn test_pagination_defaults_missing_fields() {
        let page: ArtworkPage =
            serde_json::from_str(r#"{ "pagination": { "total": 5 }, "data": [] }"#).unwrap();

        assert_eq!(
            page.pagination,
            Pagination {
                total: 5,
                ..Default::default()
            }
        );
        assert!(page.data.is_empty());
    }

    #[test]
    fn test_display_dates() {
        let mut artwork = Artwork {
            id: ArtworkId(1),
            ..Default::default()
        };
        assert_eq!(artwork.display_start_date(), "N/A");
        assert_eq!(artwork.display_end_date(), "N/A");

        artwork.date_start = Some(1890);
        artwork.date_end = Some(1892);
        assert_eq!(artwork.display_start_date(), "1890");
        assert_eq!(artwork.display_end_date(), "1892");

        artwork.date_start = Some(-200);
        assert_eq!(artwork.display_start_date(), "-200");
    }

    #[test]
    fn test_blank_title_falls_back() {
        let artwork = Artwork {
            id: ArtworkId(7),
            title: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(artwork.display_title(), "Untitled");
    }
}
