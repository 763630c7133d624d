//! Outlet entity representing one media placement in a report.

use serde::{Deserialize, Serialize};

use crate::utils::derive_domain;

/// A media placement available for badge inclusion.
///
/// Loaded from report rows and immutable afterwards. `website_name` doubles
/// as the logo lookup key. `derived_domain` is computed once from
/// `published_url` and is `None` when the URL is absent or unparsable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outlet {
    pub id: i64,
    pub website_name: String,
    pub published_url: Option<String>,
    pub derived_domain: Option<String>,
}

impl Outlet {
    /// Creates an outlet, deriving the domain from the published URL.
    pub fn new(id: i64, website_name: String, published_url: Option<String>) -> Self {
        let derived_domain = derive_domain(published_url.as_deref());
        Self {
            id,
            website_name,
            published_url,
            derived_domain,
        }
    }
}
