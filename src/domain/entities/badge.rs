//! Badge entity and its style configuration.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Compiled regex for `#rrggbb` color validation.
static HEX_COLOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap());

/// Layout mode for the generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Primary row above the overflow row.
    Stacked,
    /// Both rows flow on one line where width allows.
    Inline,
}

/// Logo size class applied to every tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoSize {
    Small,
    Medium,
    Large,
}

impl LogoSize {
    /// Tile height in pixels for the size class.
    pub fn tile_height(&self) -> u32 {
        match self {
            LogoSize::Small => 28,
            LogoSize::Medium => 40,
            LogoSize::Large => 56,
        }
    }
}

/// Spacing class between tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    Compact,
    Comfortable,
    Wide,
}

impl Spacing {
    /// Gap in pixels for the spacing class.
    pub fn gap(&self) -> u32 {
        match self {
            Spacing::Compact => 8,
            Spacing::Comfortable => 16,
            Spacing::Wide => 28,
        }
    }
}

/// Style and behavior parameters for document synthesis.
///
/// Immutable per generation and persisted alongside the badge so
/// regeneration is reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeConfig {
    pub show_logos: bool,
    pub show_ornaments: bool,
    pub show_verified_mark: bool,
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub layout: Layout,
    pub max_logos_per_row: usize,
    pub logo_size: LogoSize,
    pub spacing: Spacing,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            show_logos: true,
            show_ornaments: true,
            show_verified_mark: true,
            primary_color: "#1a1a2e".to_string(),
            secondary_color: "#f5f5f7".to_string(),
            accent_color: "#c9a227".to_string(),
            layout: Layout::Stacked,
            max_logos_per_row: 3,
            logo_size: LogoSize::Medium,
            spacing: Spacing::Comfortable,
        }
    }
}

/// Configuration field rejected by [`BadgeConfig::validate`].
#[derive(Debug, thiserror::Error)]
pub enum InvalidConfig {
    #[error("{field} must be a #rrggbb hex color, got '{value}'")]
    Color { field: &'static str, value: String },

    #[error("max_logos_per_row must be between 1 and 6, got {0}")]
    LogosPerRow(usize),
}

impl BadgeConfig {
    /// Validates user-supplied configuration values.
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        for (field, value) in [
            ("primary_color", &self.primary_color),
            ("secondary_color", &self.secondary_color),
            ("accent_color", &self.accent_color),
        ] {
            if !HEX_COLOR_REGEX.is_match(value) {
                return Err(InvalidConfig::Color {
                    field,
                    value: value.clone(),
                });
            }
        }

        if self.max_logos_per_row == 0 || self.max_logos_per_row > 6 {
            return Err(InvalidConfig::LogosPerRow(self.max_logos_per_row));
        }

        Ok(())
    }
}

/// Persisted snapshot of one selected outlet.
///
/// `logo_url` and `domain` are denormalized at persist time so the stored
/// badge renders without re-resolving either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeWebsite {
    pub outlet_id: i64,
    pub website_name: String,
    pub published_url: Option<String>,
    pub logo_url: Option<String>,
    pub domain: Option<String>,
}

/// The persisted badge artifact.
#[derive(Debug, Clone)]
pub struct Badge {
    pub id: i64,
    pub grid_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub websites: Vec<BadgeWebsite>,
    pub config: BadgeConfig,
    pub html_document: String,
    pub generated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Badge {
    /// Whether a preview document has been generated.
    ///
    /// Derived from the document itself rather than stored separately, so it
    /// cannot drift out of sync.
    pub fn preview_generated(&self) -> bool {
        !self.html_document.is_empty()
    }
}

/// Input data for creating a new badge.
#[derive(Debug, Clone)]
pub struct NewBadge {
    pub grid_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub websites: Vec<BadgeWebsite>,
    pub config: BadgeConfig,
    pub html_document: String,
}

/// Partial update for an existing badge.
///
/// `None` fields are left unchanged. A preview-only refresh sets
/// `html_document` alone.
#[derive(Debug, Clone, Default)]
pub struct BadgePatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub websites: Option<Vec<BadgeWebsite>>,
    pub config: Option<BadgeConfig>,
    pub html_document: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn badge(html_document: &str) -> Badge {
        Badge {
            id: 1,
            grid_id: 10,
            name: "Launch coverage".to_string(),
            description: None,
            websites: vec![],
            config: BadgeConfig::default(),
            html_document: html_document.to_string(),
            generated_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_preview_generated_is_derived_from_document() {
        assert!(!badge("").preview_generated());
        assert!(badge("<!DOCTYPE html>").preview_generated());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(BadgeConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_rejects_bad_colors() {
        let mut config = BadgeConfig::default();
        config.accent_color = "gold".to_string();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, InvalidConfig::Color { field: "accent_color", .. }));
    }

    #[test]
    fn test_config_rejects_bad_row_width() {
        let mut config = BadgeConfig::default();
        config.max_logos_per_row = 0;
        assert!(matches!(
            config.validate().unwrap_err(),
            InvalidConfig::LogosPerRow(0)
        ));

        config.max_logos_per_row = 7;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_roundtrips_through_json() {
        let config = BadgeConfig::default();
        let value = serde_json::to_value(&config).unwrap();
        let back: BadgeConfig = serde_json::from_value(value).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_config_deserializes_partial_json_with_defaults() {
        let back: BadgeConfig =
            serde_json::from_value(serde_json::json!({ "show_logos": false })).unwrap();
        assert!(!back.show_logos);
        assert_eq!(back.primary_color, "#1a1a2e");
    }
}
