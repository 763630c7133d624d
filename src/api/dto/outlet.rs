//! DTOs for the outlet catalog endpoint.

use serde::Serialize;

use crate::application::services::CatalogEntry;

/// One selectable outlet in the catalog listing.
#[derive(Debug, Serialize)]
pub struct CatalogEntryResponse {
    pub id: i64,
    pub website_name: String,
    pub published_url: Option<String>,
    pub domain: Option<String>,
    /// Display logo from the best-effort catalog inference; not what badge
    /// generation uses.
    pub logo_url: Option<String>,
}

impl From<CatalogEntry> for CatalogEntryResponse {
    fn from(entry: CatalogEntry) -> Self {
        Self {
            id: entry.outlet.id,
            website_name: entry.outlet.website_name,
            published_url: entry.outlet.published_url,
            domain: entry.outlet.derived_domain,
            logo_url: entry.logo_url,
        }
    }
}
