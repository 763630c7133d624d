use std::sync::Arc;

use crate::application::services::CatalogService;
use crate::domain::repositories::{BadgeStore, ReportStore};

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub badge_store: Arc<dyn BadgeStore>,
    pub catalog_service: Arc<CatalogService>,
    /// Base URL embedded into generated embed codes and preview links.
    pub public_base_url: String,
}

impl AppState {
    pub fn new(
        badge_store: Arc<dyn BadgeStore>,
        report_store: Arc<dyn ReportStore>,
        public_base_url: String,
    ) -> Self {
        Self {
            badge_store,
            catalog_service: Arc::new(CatalogService::new(report_store)),
            public_base_url,
        }
    }
}
