//! Outlet catalog service: the read-only selection source.

use std::sync::Arc;

use crate::domain::entities::Outlet;
use crate::domain::repositories::{ReportStore, StoreError};
use crate::synthesis::logo;

/// An outlet decorated for the generic catalog display.
///
/// `logo_url` here comes from best-effort domain inference and is display
/// sugar only; badge generation resolves logos independently through the
/// exact-match table.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub outlet: Outlet,
    pub logo_url: Option<String>,
}

/// Read-only view over the outlets of a report.
pub struct CatalogService {
    report_store: Arc<dyn ReportStore>,
}

impl CatalogService {
    pub fn new(report_store: Arc<dyn ReportStore>) -> Self {
        Self { report_store }
    }

    /// Lists candidate outlets for a grid in report order.
    pub async fn outlets_for_grid(&self, grid_id: i64) -> Result<Vec<Outlet>, StoreError> {
        self.report_store.outlets_for_grid(grid_id).await
    }

    /// Lists outlets decorated with display logos for the catalog view.
    pub async fn catalog_for_grid(&self, grid_id: i64) -> Result<Vec<CatalogEntry>, StoreError> {
        let outlets = self.report_store.outlets_for_grid(grid_id).await?;

        Ok(outlets
            .into_iter()
            .map(|outlet| {
                let logo_url = logo::resolve(&outlet.website_name)
                    .or_else(|| {
                        outlet
                            .derived_domain
                            .as_deref()
                            .and_then(logo::infer_from_domain)
                    })
                    .map(str::to_string);
                CatalogEntry { outlet, logo_url }
            })
            .collect())
    }
}
