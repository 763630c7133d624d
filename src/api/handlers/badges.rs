//! Handlers for the badge lifecycle endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::badge::{BadgeResponse, BadgeSummaryResponse, GenerateBadgeRequest};
use crate::application::{BadgeLifecycle, Discovery};
use crate::domain::entities::{MAX_SELECTION, Outlet};
use crate::error::{AppError, StoreAction, map_lifecycle_error, map_store_error};
use crate::state::AppState;

/// Generates a badge for a grid: creates on first generation, updates in
/// place afterwards.
///
/// # Endpoint
///
/// `POST /api/grids/{grid_id}/badges`
///
/// # Lifecycle
///
/// Discovery runs first (explicit `badge_id`, then grid lookup); the
/// requested outlet selection replaces whatever the discovered badge
/// carried; generation synthesizes the document and persists it. The badge
/// id never changes across updates.
///
/// Returns `201 Created` when a badge was created, `200 OK` when an
/// existing badge was updated.
pub async fn generate_badge_handler(
    State(state): State<AppState>,
    Path(grid_id): Path<i64>,
    Json(payload): Json<GenerateBadgeRequest>,
) -> Result<(StatusCode, Json<BadgeResponse>), AppError> {
    payload.validate()?;

    if let Some(config) = &payload.config {
        config.validate().map_err(|e| {
            AppError::bad_request("Invalid badge configuration", json!({ "reason": e.to_string() }))
        })?;
    }

    let requested = resolve_outlets(&state, grid_id, &payload.outlet_ids).await?;

    let mut lifecycle = BadgeLifecycle::new(state.badge_store.clone(), grid_id);
    let discovery = lifecycle.discover(payload.badge_id, None).await;

    // The request states the full desired selection; rebuild it in order.
    lifecycle.clear_selection();
    for outlet in requested {
        lifecycle.toggle(outlet);
    }

    lifecycle.set_metadata(payload.name, payload.description);
    if let Some(config) = payload.config {
        lifecycle.set_config(config);
    }

    let badge = lifecycle
        .generate()
        .await
        .map_err(|e| map_lifecycle_error(StoreAction::Save, e))?;

    let status = match discovery {
        Discovery::Miss => StatusCode::CREATED,
        Discovery::Existing { .. } => StatusCode::OK,
    };

    Ok((
        status,
        Json(BadgeResponse::from_badge(&badge, &state.public_base_url)),
    ))
}

/// Fetches a badge by id.
///
/// # Endpoint
///
/// `GET /api/badges/{badge_id}`
pub async fn get_badge_handler(
    State(state): State<AppState>,
    Path(badge_id): Path<i64>,
) -> Result<Json<BadgeResponse>, AppError> {
    let badge = state
        .badge_store
        .get(badge_id)
        .await
        .map_err(|e| map_store_error(StoreAction::Load, e))?
        .ok_or_else(|| AppError::not_found("Badge not found", json!({ "badge_id": badge_id })))?;

    Ok(Json(BadgeResponse::from_badge(&badge, &state.public_base_url)))
}

/// Discovers the badge attached to a grid.
///
/// # Endpoint
///
/// `GET /api/grids/{grid_id}/badge`
///
/// A miss is reported as 404; the dashboard treats that as "no badge yet",
/// not as a failure.
pub async fn discover_badge_handler(
    State(state): State<AppState>,
    Path(grid_id): Path<i64>,
) -> Result<Json<BadgeResponse>, AppError> {
    let badge = state
        .badge_store
        .get_by_grid(grid_id)
        .await
        .map_err(|e| map_store_error(StoreAction::Load, e))?
        .ok_or_else(|| {
            AppError::not_found("No badge for this grid", json!({ "grid_id": grid_id }))
        })?;

    Ok(Json(BadgeResponse::from_badge(&badge, &state.public_base_url)))
}

/// Lists all badges of a grid for the management view.
///
/// # Endpoint
///
/// `GET /api/grids/{grid_id}/badges`
pub async fn list_badges_handler(
    State(state): State<AppState>,
    Path(grid_id): Path<i64>,
) -> Result<Json<Vec<BadgeSummaryResponse>>, AppError> {
    let badges = state
        .badge_store
        .list_by_grid(grid_id)
        .await
        .map_err(|e| map_store_error(StoreAction::Load, e))?;

    Ok(Json(
        badges
            .iter()
            .map(|badge| BadgeSummaryResponse::from_badge(badge, &state.public_base_url))
            .collect(),
    ))
}

/// Re-synthesizes an existing badge's preview document without touching its
/// metadata or identity.
///
/// # Endpoint
///
/// `POST /api/badges/{badge_id}/regenerate`
pub async fn regenerate_badge_handler(
    State(state): State<AppState>,
    Path(badge_id): Path<i64>,
) -> Result<Json<BadgeResponse>, AppError> {
    let grid_id = require_badge_grid(&state, badge_id).await?;

    let mut lifecycle = BadgeLifecycle::new(state.badge_store.clone(), grid_id);
    lifecycle.discover(Some(badge_id), None).await;

    let badge = lifecycle
        .regenerate_preview()
        .await
        .map_err(|e| map_lifecycle_error(StoreAction::Save, e))?;

    Ok(Json(BadgeResponse::from_badge(&badge, &state.public_base_url)))
}

/// Deletes a badge. Deletion is never partial.
///
/// # Endpoint
///
/// `DELETE /api/badges/{badge_id}`
pub async fn delete_badge_handler(
    State(state): State<AppState>,
    Path(badge_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let grid_id = require_badge_grid(&state, badge_id).await?;

    let mut lifecycle = BadgeLifecycle::new(state.badge_store.clone(), grid_id);
    lifecycle.discover(Some(badge_id), None).await;

    lifecycle
        .delete()
        .await
        .map_err(|e| map_lifecycle_error(StoreAction::Delete, e))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Resolves requested outlet ids against the grid's catalog, preserving
/// request order and dropping duplicate ids.
async fn resolve_outlets(
    state: &AppState,
    grid_id: i64,
    outlet_ids: &[i64],
) -> Result<Vec<Outlet>, AppError> {
    let catalog = state
        .catalog_service
        .outlets_for_grid(grid_id)
        .await
        .map_err(|e| map_store_error(StoreAction::Load, e))?;

    let mut seen = Vec::with_capacity(outlet_ids.len());
    let mut outlets = Vec::with_capacity(outlet_ids.len());
    for &id in outlet_ids {
        if seen.contains(&id) {
            continue;
        }
        seen.push(id);

        let outlet = catalog.iter().find(|o| o.id == id).cloned().ok_or_else(|| {
            AppError::bad_request(
                "Outlet does not belong to this grid",
                json!({ "outlet_id": id, "grid_id": grid_id }),
            )
        })?;
        outlets.push(outlet);
    }

    // The selection itself caps at six; reject here so an oversized request
    // fails loudly instead of silently dropping outlets.
    if outlets.len() > MAX_SELECTION {
        return Err(AppError::bad_request(
            "Selection must contain between 3 and 6 outlets",
            json!({ "count": outlets.len() }),
        ));
    }

    Ok(outlets)
}

/// Loads a badge's grid id or reports 404.
async fn require_badge_grid(state: &AppState, badge_id: i64) -> Result<i64, AppError> {
    state
        .badge_store
        .get(badge_id)
        .await
        .map_err(|e| map_store_error(StoreAction::Load, e))?
        .map(|badge| badge.grid_id)
        .ok_or_else(|| AppError::not_found("Badge not found", json!({ "badge_id": badge_id })))
}
