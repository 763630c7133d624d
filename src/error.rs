use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::application::LifecycleError;
use crate::domain::entities::SelectionStatus;
use crate::domain::repositories::StoreError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request(
            "Request validation failed",
            serde_json::to_value(&e).unwrap_or_else(|_| json!({})),
        )
    }
}

/// The store operation a failure occurred in, so user-visible messages can
/// distinguish load from save from delete without leaking transport detail.
#[derive(Debug, Clone, Copy)]
pub enum StoreAction {
    Load,
    Save,
    Delete,
}

impl StoreAction {
    fn failure_message(self) -> &'static str {
        match self {
            StoreAction::Load => "Failed to load badge",
            StoreAction::Save => "Failed to save badge",
            StoreAction::Delete => "Failed to delete badge",
        }
    }
}

/// Maps a lifecycle failure to an API error.
///
/// Validation outcomes carry enough detail for the client to fix the
/// selection; store failures keep the backend detail in the logs only.
pub fn map_lifecycle_error(action: StoreAction, e: LifecycleError) -> AppError {
    match e {
        LifecycleError::InvalidSelection(status) => {
            let details = match status {
                SelectionStatus::Empty => json!({ "count": 0 }),
                SelectionStatus::Insufficient { needed } => json!({ "needed": needed }),
                SelectionStatus::Excess { count } => json!({ "count": count }),
                SelectionStatus::Valid { count } => json!({ "count": count }),
            };
            AppError::bad_request("Selection must contain between 3 and 6 outlets", details)
        }
        LifecycleError::NoBadge => AppError::not_found("Badge not found", json!({})),
        LifecycleError::Store(StoreError::NotFound { badge_id }) => {
            AppError::not_found("Badge not found", json!({ "badge_id": badge_id }))
        }
        LifecycleError::Store(StoreError::Backend(detail)) => {
            tracing::error!(error = %detail, "badge store operation failed");
            AppError::internal(action.failure_message(), json!({}))
        }
        LifecycleError::Synthesis(e) => {
            // Unreachable when the selection validator is honored upstream.
            tracing::error!(error = %e, "document synthesis precondition violated");
            AppError::internal("Badge generation failed", json!({}))
        }
    }
}

/// Maps a bare store failure (outside a lifecycle flow) to an API error.
pub fn map_store_error(action: StoreAction, e: StoreError) -> AppError {
    map_lifecycle_error(action, LifecycleError::Store(e))
}
