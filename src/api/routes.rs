//! API route configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{
    catalog_handler, delete_badge_handler, discover_badge_handler, generate_badge_handler,
    get_badge_handler, list_badges_handler, regenerate_badge_handler,
};
use crate::state::AppState;

/// Management API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET    /grids/{grid_id}/outlets`    - Outlet catalog for selection
/// - `GET    /grids/{grid_id}/badge`      - Discover the grid's badge
/// - `GET    /grids/{grid_id}/badges`     - Management listing
/// - `POST   /grids/{grid_id}/badges`     - Generate (create or update)
/// - `GET    /badges/{badge_id}`          - Fetch one badge
/// - `POST   /badges/{badge_id}/regenerate` - Refresh the preview document
/// - `DELETE /badges/{badge_id}`          - Delete a badge
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/grids/{grid_id}/outlets", get(catalog_handler))
        .route("/grids/{grid_id}/badge", get(discover_badge_handler))
        .route(
            "/grids/{grid_id}/badges",
            get(list_badges_handler).post(generate_badge_handler),
        )
        .route(
            "/badges/{badge_id}",
            get(get_badge_handler).delete(delete_badge_handler),
        )
        .route("/badges/{badge_id}/regenerate", post(regenerate_badge_handler))
}
