//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Message returned for any price that falls outside the allowed range or a body that cannot be read.
pub const GENERIC_VALIDATION_MESSAGE: &str = "validation errors";

/// Message returned when a referenced pizza or restaurant does not exist.
pub const INVALID_REFERENCE_MESSAGE: &str = "Invalid pizza_id or restaurant_id";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum AppError {
    /// Carries the entity name, e.g. "Restaurant".
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("validation: {}", .0.join(", "))]
    Validation(Vec<String>),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(vec![message.into()])
    }
}

/// Body for lookups that failed: `{"error": "..."}`.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Body for rejected input: `{"errors": [...]}`.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorsBody {
    pub errors: Vec<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            AppError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(ErrorsBody { errors })).into_response()
            }
            AppError::Db(_) => {
                tracing::error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "internal server error".into(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
