//! Top-level router assembly.

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{embed_script_handler, health_handler, preview_handler};
use crate::api::routes::api_routes;
use crate::state::AppState;

/// Builds the full application router.
///
/// - `/api/...`                     - management API
/// - `/trust-badges/{id}.js`        - embed loader script (public)
/// - `/trust-badges/{id}/preview`   - rendered preview (public)
/// - `/health`                      - liveness probe
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        // Same parameter name in both routes; the `.js` suffix is parsed by
        // the handler since path segments capture whole.
        .route("/trust-badges/{badge_id}", get(embed_script_handler))
        .route("/trust-badges/{badge_id}/preview", get(preview_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
