#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use trust_badge_service::domain::entities::{Badge, BadgePatch, NewBadge, Outlet};
use trust_badge_service::domain::repositories::{BadgeStore, ReportStore, StoreError};
use trust_badge_service::state::AppState;

pub const PUBLIC_BASE_URL: &str = "https://badges.example.com";

/// In-memory badge store so handler tests run without a database.
#[derive(Default)]
pub struct MemoryBadgeStore {
    inner: Mutex<MemoryBadgeStoreInner>,
}

#[derive(Default)]
struct MemoryBadgeStoreInner {
    next_id: i64,
    badges: Vec<Badge>,
}

impl MemoryBadgeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn badge_count(&self) -> usize {
        self.inner.lock().unwrap().badges.len()
    }

    pub fn insert(&self, badge: Badge) {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id = inner.next_id.max(badge.id);
        inner.badges.push(badge);
    }
}

#[async_trait]
impl BadgeStore for MemoryBadgeStore {
    async fn create(&self, badge: NewBadge) -> Result<Badge, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let now = Utc::now();
        let badge = Badge {
            id: inner.next_id,
            grid_id: badge.grid_id,
            name: badge.name,
            description: badge.description,
            websites: badge.websites,
            config: badge.config,
            html_document: badge.html_document,
            generated_at: now,
            updated_at: now,
        };
        inner.badges.push(badge.clone());
        Ok(badge)
    }

    async fn get(&self, badge_id: i64) -> Result<Option<Badge>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.badges.iter().find(|b| b.id == badge_id).cloned())
    }

    async fn get_by_grid(&self, grid_id: i64) -> Result<Option<Badge>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .badges
            .iter()
            .filter(|b| b.grid_id == grid_id)
            .max_by_key(|b| (b.updated_at, b.id))
            .cloned())
    }

    async fn list_by_grid(&self, grid_id: i64) -> Result<Vec<Badge>, StoreError> {
        let inner = self.inner.lock().unwrap();
        let mut badges: Vec<Badge> = inner
            .badges
            .iter()
            .filter(|b| b.grid_id == grid_id)
            .cloned()
            .collect();
        badges.sort_by(|a, b| (b.updated_at, b.id).cmp(&(a.updated_at, a.id)));
        Ok(badges)
    }

    async fn update(&self, badge_id: i64, patch: BadgePatch) -> Result<Badge, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let badge = inner
            .badges
            .iter_mut()
            .find(|b| b.id == badge_id)
            .ok_or(StoreError::NotFound { badge_id })?;

        if let Some(name) = patch.name {
            badge.name = name;
        }
        if let Some(description) = patch.description {
            badge.description = description;
        }
        if let Some(websites) = patch.websites {
            badge.websites = websites;
        }
        if let Some(config) = patch.config {
            badge.config = config;
        }
        if let Some(html_document) = patch.html_document {
            badge.html_document = html_document;
        }
        badge.updated_at = Utc::now();

        Ok(badge.clone())
    }

    async fn delete(&self, badge_id: i64) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.badges.len();
        inner.badges.retain(|b| b.id != badge_id);
        Ok(inner.badges.len() < before)
    }
}

/// In-memory outlet catalog keyed by grid id.
#[derive(Default)]
pub struct MemoryReportStore {
    grids: Mutex<HashMap<i64, Vec<Outlet>>>,
}

impl MemoryReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_grid(&self, grid_id: i64, outlets: Vec<Outlet>) {
        self.grids.lock().unwrap().insert(grid_id, outlets);
    }
}

#[async_trait]
impl ReportStore for MemoryReportStore {
    async fn outlets_for_grid(&self, grid_id: i64) -> Result<Vec<Outlet>, StoreError> {
        let grids = self.grids.lock().unwrap();
        Ok(grids.get(&grid_id).cloned().unwrap_or_default())
    }
}

/// Eight outlets for the default test grid: a mix of table hits and misses.
pub fn seed_outlets() -> Vec<Outlet> {
    vec![
        Outlet::new(
            1,
            "Business Insider".to_string(),
            Some("https://markets.businessinsider.com/news/acme".to_string()),
        ),
        Outlet::new(
            2,
            "Yahoo Finance".to_string(),
            Some("https://finance.yahoo.com/news/acme".to_string()),
        ),
        Outlet::new(
            3,
            "MarketWatch".to_string(),
            Some("https://www.marketwatch.com/press-release/acme".to_string()),
        ),
        Outlet::new(
            4,
            "Forbes".to_string(),
            Some("https://www.forbes.com/sites/acme".to_string()),
        ),
        Outlet::new(5, "Regional Gazette".to_string(), None),
        Outlet::new(
            6,
            "Daily Chronicle".to_string(),
            Some("https://dailychronicle.example/acme".to_string()),
        ),
        Outlet::new(
            7,
            "Benzinga".to_string(),
            Some("https://www.benzinga.com/pressreleases/acme".to_string()),
        ),
        Outlet::new(8, "Tiny Blog".to_string(), Some("not a url".to_string())),
    ]
}

/// Builds test state with grid 1 seeded; returns the badge store for direct
/// seeding and assertions.
pub fn create_test_state() -> (AppState, Arc<MemoryBadgeStore>) {
    let badge_store = Arc::new(MemoryBadgeStore::new());
    let report_store = Arc::new(MemoryReportStore::new());
    report_store.seed_grid(1, seed_outlets());

    let state = AppState::new(
        badge_store.clone(),
        report_store,
        PUBLIC_BASE_URL.to_string(),
    );

    (state, badge_store)
}
