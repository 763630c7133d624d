//! Read-only access to report rows: the outlet catalog.

use crate::domain::entities::Outlet;
use crate::domain::repositories::StoreError;
use async_trait::async_trait;

/// Read-only view over the outlets of a PR distribution report.
///
/// Report rows are owned by the upload pipeline, an external collaborator;
/// this interface only exposes what badge selection needs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Lists the candidate outlets of a grid in report order.
    ///
    /// An unknown grid yields an empty list, not an error.
    async fn outlets_for_grid(&self, grid_id: i64) -> Result<Vec<Outlet>, StoreError>;
}
