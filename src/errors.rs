use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::fruits::models::{HttpValidationError, ValidationIssue};

/// Errors a handler can return to the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request body failed validation ({} issue(s))", .0.len())]
    Validation(Vec<ValidationIssue>),

    #[error("Not Found")]
    NotFound,

    /// `allow` lists the methods the matched path does serve.
    #[error("Method Not Allowed")]
    MethodNotAllowed { allow: &'static str },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(detail) => {
                tracing::warn!(issues = detail.len(), "rejected request body");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(HttpValidationError { detail }),
                )
                    .into_response()
            }
            ApiError::NotFound => {
                (StatusCode::NOT_FOUND, Json(json!({ "detail": self.to_string() }))).into_response()
            }
            ApiError::MethodNotAllowed { allow } => (
                StatusCode::METHOD_NOT_ALLOWED,
                [(header::ALLOW, allow)],
                Json(json!({ "detail": self.to_string() })),
            )
                .into_response(),
        }
    }
}

/// Fallback for paths no route matches.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
