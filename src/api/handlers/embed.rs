//! Handlers for the externally-facing embed surface.
//!
//! These routes are what publishers' pages hit; they serve the persisted
//! document as-is, without resynthesis.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use serde_json::json;

use crate::domain::entities::Badge;
use crate::error::{AppError, StoreAction, map_store_error};
use crate::state::AppState;

/// Serves the embed loader script.
///
/// # Endpoint
///
/// `GET /trust-badges/{badge_id}.js`
///
/// The loader injects the badge document into the host page inside a
/// sandboxed iframe via `srcdoc`, keeping badge styles from leaking into
/// the page and vice versa. Output is a pure function of the stored
/// document.
pub async fn embed_script_handler(
    State(state): State<AppState>,
    Path(resource): Path<String>,
) -> Result<Response, AppError> {
    let badge_id = resource
        .strip_suffix(".js")
        .and_then(|id| id.parse::<i64>().ok())
        .ok_or_else(|| {
            AppError::not_found("Badge not found", json!({ "resource": resource }))
        })?;

    let badge = require_badge(&state, badge_id).await?;

    // serde_json escaping doubles as safe JS string embedding.
    let document = serde_json::to_string(&badge.html_document)
        .map_err(|_| AppError::internal("Failed to load badge", json!({})))?;

    let script = format!(
        "(function(){{\
var s=document.currentScript;\
var f=document.createElement('iframe');\
f.setAttribute('style','border:0;width:100%;max-width:600px;min-height:220px');\
f.setAttribute('title','Trust badge');\
f.setAttribute('loading','lazy');\
f.srcdoc={document};\
s.parentNode.insertBefore(f,s);\
}})();\n"
    );

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        script,
    )
        .into_response())
}

/// Serves the rendered preview document.
///
/// # Endpoint
///
/// `GET /trust-badges/{badge_id}/preview`
pub async fn preview_handler(
    State(state): State<AppState>,
    Path(badge_id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let badge = require_badge(&state, badge_id).await?;
    Ok(Html(badge.html_document))
}

async fn require_badge(state: &AppState, badge_id: i64) -> Result<Badge, AppError> {
    state
        .badge_store
        .get(badge_id)
        .await
        .map_err(|e| map_store_error(StoreAction::Load, e))?
        .ok_or_else(|| AppError::not_found("Badge not found", json!({ "badge_id": badge_id })))
}
