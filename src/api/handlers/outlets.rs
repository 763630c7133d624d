//! Handler for the outlet catalog endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::outlet::CatalogEntryResponse;
use crate::error::{AppError, StoreAction, map_store_error};
use crate::state::AppState;

/// Lists the candidate outlets of a grid, decorated with display logos.
///
/// # Endpoint
///
/// `GET /api/grids/{grid_id}/outlets`
///
/// An unknown grid yields an empty list.
pub async fn catalog_handler(
    State(state): State<AppState>,
    Path(grid_id): Path<i64>,
) -> Result<Json<Vec<CatalogEntryResponse>>, AppError> {
    let entries = state
        .catalog_service
        .catalog_for_grid(grid_id)
        .await
        .map_err(|e| map_store_error(StoreAction::Load, e))?;

    Ok(Json(entries.into_iter().map(Into::into).collect()))
}
