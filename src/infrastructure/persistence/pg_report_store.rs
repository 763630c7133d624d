//! PostgreSQL implementation of the outlet catalog.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::entities::Outlet;
use crate::domain::repositories::{ReportStore, StoreError};

/// Read-only catalog over the `report_outlets` table.
pub struct PgReportStore {
    pool: Arc<PgPool>,
}

impl PgReportStore {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct OutletRow {
    id: i64,
    website_name: String,
    published_url: Option<String>,
}

#[async_trait]
impl ReportStore for PgReportStore {
    async fn outlets_for_grid(&self, grid_id: i64) -> Result<Vec<Outlet>, StoreError> {
        let rows = sqlx::query_as::<_, OutletRow>(
            "SELECT id, website_name, published_url FROM report_outlets \
             WHERE grid_id = $1 ORDER BY position, id",
        )
        .bind(grid_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| Outlet::new(row.id, row.website_name, row.published_url))
            .collect())
    }
}
