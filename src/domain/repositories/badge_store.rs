//! Store interface for persisted badges.

use crate::domain::entities::{Badge, BadgePatch, NewBadge};
use async_trait::async_trait;

/// Failure modes of the badge store.
///
/// A missing badge on `get`/`get_by_grid` is NOT an error; those return
/// `Ok(None)`. `NotFound` only occurs on id-addressed mutations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("badge {badge_id} not found")]
    NotFound { badge_id: i64 },

    #[error("badge store backend error: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Backend(e.to_string())
    }
}

/// Persistence interface for badges.
///
/// The lifecycle engine only ever talks to this trait; the backend store is
/// an external collaborator behind it.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBadgeStore`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BadgeStore: Send + Sync {
    /// Creates a new badge and assigns its id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on persistence failure.
    async fn create(&self, badge: NewBadge) -> Result<Badge, StoreError>;

    /// Fetches a badge by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Badge))` if found
    /// - `Ok(None)` if not found
    async fn get(&self, badge_id: i64) -> Result<Option<Badge>, StoreError>;

    /// Fetches the badge attached to a grid, if any.
    ///
    /// Used by lifecycle discovery as its lowest-priority lookup.
    async fn get_by_grid(&self, grid_id: i64) -> Result<Option<Badge>, StoreError>;

    /// Lists all badges for a grid, most recently updated first.
    ///
    /// Used by the management view.
    async fn list_by_grid(&self, grid_id: i64) -> Result<Vec<Badge>, StoreError>;

    /// Partially updates a badge.
    ///
    /// Only fields present in [`BadgePatch`] are modified. The badge id is
    /// never changed by an update.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no badge matches `badge_id`.
    async fn update(&self, badge_id: i64, patch: BadgePatch) -> Result<Badge, StoreError>;

    /// Deletes a badge.
    ///
    /// Returns `Ok(true)` if the badge existed and was removed, `Ok(false)`
    /// if there was nothing to delete.
    async fn delete(&self, badge_id: i64) -> Result<bool, StoreError>;
}
