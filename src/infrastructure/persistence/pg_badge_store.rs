//! PostgreSQL implementation of the badge store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entities::{Badge, BadgePatch, NewBadge};
use crate::domain::repositories::{BadgeStore, StoreError};

/// Badge persistence backed by the `trust_badges` table.
///
/// `websites` and `config` are stored as JSONB snapshots so a badge renders
/// without joins against report data.
pub struct PgBadgeStore {
    pool: Arc<PgPool>,
}

impl PgBadgeStore {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BadgeRow {
    id: i64,
    grid_id: i64,
    name: String,
    description: Option<String>,
    websites: serde_json::Value,
    config: serde_json::Value,
    html_document: String,
    generated_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl BadgeRow {
    fn into_badge(self) -> Result<Badge, StoreError> {
        Ok(Badge {
            id: self.id,
            grid_id: self.grid_id,
            name: self.name,
            description: self.description,
            websites: serde_json::from_value(self.websites)
                .map_err(|e| StoreError::Backend(format!("corrupt websites snapshot: {e}")))?,
            config: serde_json::from_value(self.config)
                .map_err(|e| StoreError::Backend(format!("corrupt config snapshot: {e}")))?,
            html_document: self.html_document,
            generated_at: self.generated_at,
            updated_at: self.updated_at,
        })
    }
}

const BADGE_COLUMNS: &str =
    "id, grid_id, name, description, websites, config, html_document, generated_at, updated_at";

#[async_trait]
impl BadgeStore for PgBadgeStore {
    async fn create(&self, badge: NewBadge) -> Result<Badge, StoreError> {
        let websites = serde_json::to_value(&badge.websites)
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        let config = serde_json::to_value(&badge.config)
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        let row = sqlx::query_as::<_, BadgeRow>(&format!(
            "INSERT INTO trust_badges (grid_id, name, description, websites, config, html_document) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {BADGE_COLUMNS}"
        ))
        .bind(badge.grid_id)
        .bind(&badge.name)
        .bind(&badge.description)
        .bind(websites)
        .bind(config)
        .bind(&badge.html_document)
        .fetch_one(self.pool.as_ref())
        .await?;

        row.into_badge()
    }

    async fn get(&self, badge_id: i64) -> Result<Option<Badge>, StoreError> {
        let row = sqlx::query_as::<_, BadgeRow>(&format!(
            "SELECT {BADGE_COLUMNS} FROM trust_badges WHERE id = $1"
        ))
        .bind(badge_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(BadgeRow::into_badge).transpose()
    }

    async fn get_by_grid(&self, grid_id: i64) -> Result<Option<Badge>, StoreError> {
        let row = sqlx::query_as::<_, BadgeRow>(&format!(
            "SELECT {BADGE_COLUMNS} FROM trust_badges \
             WHERE grid_id = $1 ORDER BY updated_at DESC LIMIT 1"
        ))
        .bind(grid_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(BadgeRow::into_badge).transpose()
    }

    async fn list_by_grid(&self, grid_id: i64) -> Result<Vec<Badge>, StoreError> {
        let rows = sqlx::query_as::<_, BadgeRow>(&format!(
            "SELECT {BADGE_COLUMNS} FROM trust_badges \
             WHERE grid_id = $1 ORDER BY updated_at DESC"
        ))
        .bind(grid_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(BadgeRow::into_badge).collect()
    }

    async fn update(&self, badge_id: i64, patch: BadgePatch) -> Result<Badge, StoreError> {
        let websites = patch
            .websites
            .as_ref()
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        let config = patch
            .config
            .as_ref()
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        let row = sqlx::query_as::<_, BadgeRow>(&format!(
            "UPDATE trust_badges SET \
               name = COALESCE($2, name), \
               description = CASE WHEN $3 THEN $4 ELSE description END, \
               websites = COALESCE($5, websites), \
               config = COALESCE($6, config), \
               html_document = COALESCE($7, html_document), \
               updated_at = now() \
             WHERE id = $1 \
             RETURNING {BADGE_COLUMNS}"
        ))
        .bind(badge_id)
        .bind(&patch.name)
        .bind(patch.description.is_some())
        .bind(patch.description.clone().flatten())
        .bind(websites)
        .bind(config)
        .bind(&patch.html_document)
        .fetch_optional(self.pool.as_ref())
        .await?;

        match row {
            Some(row) => row.into_badge(),
            None => Err(StoreError::NotFound { badge_id }),
        }
    }

    async fn delete(&self, badge_id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM trust_badges WHERE id = $1")
            .bind(badge_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
