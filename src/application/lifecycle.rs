//! Badge lifecycle state machine.
//!
//! Owns the badge identity, editing state, and in-progress selection, and
//! orchestrates discovery, generation, preview refresh, deletion and reset
//! against the badge store.

use std::sync::Arc;

use crate::domain::entities::{
    Badge, BadgeConfig, BadgePatch, BadgeWebsite, NewBadge, Outlet, Selection, SelectionStatus,
};
use crate::domain::repositories::{BadgeStore, StoreError};
use crate::synthesis::{self, SynthesisError};

/// Lifecycle failures surfaced to callers.
///
/// Discovery misses are not represented here: absence of a badge is an
/// expected outcome, reported through [`Discovery::Miss`].
#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    /// Selection count outside [3, 6] at generation time. Never reaches the
    /// store.
    #[error("selection must contain between 3 and 6 outlets")]
    InvalidSelection(SelectionStatus),

    /// An operation that needs a persisted badge was called without one.
    #[error("no badge to operate on")]
    NoBadge,

    #[error(transparent)]
    Synthesis(#[from] SynthesisError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result of a discovery pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discovery {
    /// An existing badge was found and adopted for editing.
    Existing { badge_id: i64 },
    /// No badge exists for this context.
    Miss,
}

/// Lifecycle position, as a tagged union so invalid flag combinations
/// ("editing" without a badge id) cannot be represented.
///
/// The transient discovering/generating/deleting phases of the flow are not
/// states: every operation takes `&mut self`, so at most one can be in
/// flight per controller and intermediate positions are never observable.
#[derive(Debug, Clone)]
pub enum LifecycleState {
    /// Discovery has not run yet.
    Uninitialized,
    /// Discovery ran and found nothing; a generate will create.
    NoBadge,
    /// An existing badge was adopted; a generate will update it in place.
    Editing { persisted: Badge },
    /// The last generate or preview refresh succeeded.
    PreviewReady { badge: Badge },
}

/// Orchestrates one badge editing context for a grid.
pub struct BadgeLifecycle {
    store: Arc<dyn BadgeStore>,
    grid_id: i64,
    name: String,
    description: Option<String>,
    config: BadgeConfig,
    selection: Selection,
    state: LifecycleState,
}

impl BadgeLifecycle {
    pub fn new(store: Arc<dyn BadgeStore>, grid_id: i64) -> Self {
        Self {
            store,
            grid_id,
            name: String::new(),
            description: None,
            config: BadgeConfig::default(),
            selection: Selection::new(),
            state: LifecycleState::Uninitialized,
        }
    }

    pub fn state(&self) -> &LifecycleState {
        &self.state
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn config(&self) -> &BadgeConfig {
        &self.config
    }

    /// The persisted badge id, if one exists in the current state.
    pub fn badge_id(&self) -> Option<i64> {
        match &self.state {
            LifecycleState::Editing { persisted } => Some(persisted.id),
            LifecycleState::PreviewReady { badge } => Some(badge.id),
            _ => None,
        }
    }

    /// The last persisted badge, if any.
    pub fn persisted(&self) -> Option<&Badge> {
        match &self.state {
            LifecycleState::Editing { persisted } => Some(persisted),
            LifecycleState::PreviewReady { badge } => Some(badge),
            _ => None,
        }
    }

    /// Locates an existing badge: explicit id first, then a caller-known id,
    /// then lookup by grid id. First match wins.
    ///
    /// Lookup failures are logged and treated as misses; absence of a badge
    /// is an expected outcome, not a fault. On a miss the selection starts
    /// empty; on a hit it is populated from the badge's website snapshot and
    /// the controller enters editing mode.
    pub async fn discover(
        &mut self,
        explicit_id: Option<i64>,
        known_id: Option<i64>,
    ) -> Discovery {
        let mut found: Option<Badge> = None;

        for badge_id in [explicit_id, known_id].into_iter().flatten() {
            match self.store.get(badge_id).await {
                Ok(Some(badge)) => {
                    found = Some(badge);
                    break;
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(badge_id, error = %e, "badge lookup failed during discovery");
                }
            }
        }

        if found.is_none() {
            match self.store.get_by_grid(self.grid_id).await {
                Ok(hit) => found = hit,
                Err(e) => {
                    tracing::warn!(grid_id = self.grid_id, error = %e, "grid lookup failed during discovery");
                }
            }
        }

        match found {
            Some(badge) => {
                let badge_id = badge.id;
                self.adopt(badge);
                Discovery::Existing { badge_id }
            }
            None => {
                self.selection.clear();
                self.state = LifecycleState::NoBadge;
                Discovery::Miss
            }
        }
    }

    /// Toggles an outlet in the selection. Adding past the cap is a silent
    /// no-op; removing always succeeds.
    pub fn toggle(&mut self, outlet: Outlet) -> bool {
        self.selection.toggle(outlet)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn set_metadata(&mut self, name: String, description: Option<String>) {
        self.name = name;
        self.description = description;
    }

    pub fn set_config(&mut self, config: BadgeConfig) {
        self.config = config;
    }

    /// Synthesizes the document and persists the badge.
    ///
    /// Creates on first generation, updates in place afterwards; the badge
    /// id never changes across edits. On any failure the controller keeps
    /// its state and selection so the caller can retry without re-entering
    /// anything.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::InvalidSelection`] without contacting the
    /// store when the selection is outside [3, 6].
    pub async fn generate(&mut self) -> Result<Badge, LifecycleError> {
        let status = self.selection.classify();
        if !status.is_valid() {
            return Err(LifecycleError::InvalidSelection(status));
        }

        let document =
            synthesis::synthesize(self.selection.as_slice(), &self.config, &self.name)?;
        let websites = self.snapshot_websites();

        let badge = match self.badge_id() {
            None => {
                self.store
                    .create(NewBadge {
                        grid_id: self.grid_id,
                        name: self.name.clone(),
                        description: self.description.clone(),
                        websites,
                        config: self.config.clone(),
                        html_document: document,
                    })
                    .await?
            }
            Some(badge_id) => {
                self.store
                    .update(
                        badge_id,
                        BadgePatch {
                            name: Some(self.name.clone()),
                            description: Some(self.description.clone()),
                            websites: Some(websites),
                            config: Some(self.config.clone()),
                            html_document: Some(document),
                        },
                    )
                    .await?
            }
        };

        self.state = LifecycleState::PreviewReady {
            badge: badge.clone(),
        };
        Ok(badge)
    }

    /// Re-synthesizes the document from the current selection and config and
    /// persists it alone, with no metadata or identity change.
    pub async fn regenerate_preview(&mut self) -> Result<Badge, LifecycleError> {
        let badge_id = self.badge_id().ok_or(LifecycleError::NoBadge)?;

        let status = self.selection.classify();
        if !status.is_valid() {
            return Err(LifecycleError::InvalidSelection(status));
        }

        let document =
            synthesis::synthesize(self.selection.as_slice(), &self.config, &self.name)?;

        let badge = self
            .store
            .update(
                badge_id,
                BadgePatch {
                    html_document: Some(document),
                    ..BadgePatch::default()
                },
            )
            .await?;

        self.state = LifecycleState::PreviewReady {
            badge: badge.clone(),
        };
        Ok(badge)
    }

    /// Deletes the persisted badge and resets all local state.
    ///
    /// Deletion is never partial: on failure nothing local is cleared, since the
    /// badge still exists.
    pub async fn delete(&mut self) -> Result<(), LifecycleError> {
        let badge_id = self.badge_id().ok_or(LifecycleError::NoBadge)?;

        let deleted = self.store.delete(badge_id).await?;
        if !deleted {
            return Err(LifecycleError::Store(StoreError::NotFound { badge_id }));
        }

        self.name.clear();
        self.description = None;
        self.config = BadgeConfig::default();
        self.selection.clear();
        self.state = LifecycleState::NoBadge;
        Ok(())
    }

    /// Discards in-memory edits and returns to the last persisted badge
    /// state, or to the empty state if none exists. Never contacts the store.
    pub fn reset(&mut self) {
        match std::mem::replace(&mut self.state, LifecycleState::Uninitialized) {
            LifecycleState::Editing { persisted } => self.adopt(persisted),
            LifecycleState::PreviewReady { badge } => self.adopt(badge),
            LifecycleState::Uninitialized | LifecycleState::NoBadge => {
                self.name.clear();
                self.description = None;
                self.config = BadgeConfig::default();
                self.selection.clear();
                self.state = LifecycleState::NoBadge;
            }
        }
    }

    /// Adopts a persisted badge: metadata, config and selection are restored
    /// from its snapshot and the controller enters editing mode.
    fn adopt(&mut self, badge: Badge) {
        self.name = badge.name.clone();
        self.description = badge.description.clone();
        self.config = badge.config.clone();
        self.selection = Selection::from_outlets(badge.websites.iter().map(|w| Outlet {
            id: w.outlet_id,
            website_name: w.website_name.clone(),
            published_url: w.published_url.clone(),
            derived_domain: w.domain.clone(),
        }));
        self.state = LifecycleState::Editing { persisted: badge };
    }

    /// Denormalizes the selection for persistence: logo references and
    /// domains are resolved now and stored with the badge.
    fn snapshot_websites(&self) -> Vec<BadgeWebsite> {
        self.selection
            .as_slice()
            .iter()
            .map(|outlet| BadgeWebsite {
                outlet_id: outlet.id,
                website_name: outlet.website_name.clone(),
                published_url: outlet.published_url.clone(),
                logo_url: crate::synthesis::logo::resolve(&outlet.website_name)
                    .map(str::to_string),
                domain: outlet.derived_domain.clone(),
            })
            .collect()
    }
}
