//! DTOs for badge lifecycle endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::embed_service;
use crate::domain::entities::{Badge, BadgeConfig, BadgeWebsite};

/// Request to generate (create or update) a badge for a grid.
#[derive(Debug, Deserialize, Validate)]
pub struct GenerateBadgeRequest {
    /// Display name rendered inside the badge.
    #[validate(length(min = 1, max = 120))]
    pub name: String,

    #[validate(length(max = 500))]
    pub description: Option<String>,

    /// Outlet ids from the grid's catalog, in display order. A badge
    /// showcases between 3 and 6 outlets.
    #[validate(length(min = 1, max = 6))]
    pub outlet_ids: Vec<i64>,

    /// Explicit badge id to update. Without it, discovery falls back to the
    /// grid lookup before deciding between create and update.
    pub badge_id: Option<i64>,

    /// Style overrides; omitted fields keep their defaults (or, when
    /// updating, the persisted values).
    pub config: Option<BadgeConfig>,
}

/// Full badge representation, including the embed surface.
#[derive(Debug, Serialize)]
pub struct BadgeResponse {
    pub badge_id: i64,
    pub grid_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub websites: Vec<BadgeWebsite>,
    pub config: BadgeConfig,
    pub html_document: String,
    pub embed_code: String,
    pub preview_url: String,
    pub preview_generated: bool,
    pub generated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BadgeResponse {
    pub fn from_badge(badge: &Badge, public_base_url: &str) -> Self {
        Self {
            badge_id: badge.id,
            grid_id: badge.grid_id,
            name: badge.name.clone(),
            description: badge.description.clone(),
            websites: badge.websites.clone(),
            config: badge.config.clone(),
            html_document: badge.html_document.clone(),
            embed_code: embed_service::embed_code(public_base_url, badge.id),
            preview_url: embed_service::preview_url(public_base_url, badge.id),
            preview_generated: badge.preview_generated(),
            generated_at: badge.generated_at,
            updated_at: badge.updated_at,
        }
    }
}

/// Compact badge representation for the management listing.
#[derive(Debug, Serialize)]
pub struct BadgeSummaryResponse {
    pub badge_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub website_count: usize,
    pub preview_generated: bool,
    pub preview_url: String,
    pub updated_at: DateTime<Utc>,
}

impl BadgeSummaryResponse {
    pub fn from_badge(badge: &Badge, public_base_url: &str) -> Self {
        Self {
            badge_id: badge.id,
            name: badge.name.clone(),
            description: badge.description.clone(),
            website_count: badge.websites.len(),
            preview_generated: badge.preview_generated(),
            preview_url: embed_service::preview_url(public_base_url, badge.id),
            updated_at: badge.updated_at,
        }
    }
}
