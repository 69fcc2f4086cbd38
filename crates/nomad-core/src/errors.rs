//! Application error type.
//!
//! Every stage of the request pipeline terminates with an [`AppError`]. The
//! error carries the HTTP status, the JSON shape the client sees, and the
//! underlying [`anyhow::Error`] for logging.

use anyhow::{Error, anyhow};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// JSON body shapes returned for errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorBody {
    /// `{"status": "error", "error": "..."}`
    Error(String),
    /// `{"status": "error", "message": "..."}`
    Message(String),
    /// `{"status": "error", "error": {"message": "..."}}`
    Nested(String),
    /// `{"status": "error", "error": [{"field": "...", "message": "..."}]}`
    Fields(Vec<FieldError>),
}

impl ErrorBody {
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            ErrorBody::Error(msg) => json!({ "status": "error", "error": msg }),
            ErrorBody::Message(msg) => json!({ "status": "error", "message": msg }),
            ErrorBody::Nested(msg) => json!({ "status": "error", "error": { "message": msg } }),
            ErrorBody::Fields(errors) => json!({ "status": "error", "error": errors }),
        }
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub body: ErrorBody,
    pub error: Error,
}

impl AppError {
    fn with_body(status: StatusCode, body: ErrorBody, message: String) -> Self {
        Self {
            status,
            body,
            error: anyhow!(message),
        }
    }

    /// 500; the cause is logged, never returned to the client.
    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ErrorBody::Error(INTERNAL_SERVER_ERROR.to_string()),
            error: err.into(),
        }
    }

    pub fn internal_error(message: String) -> Self {
        Self::internal(anyhow!(message))
    }

    pub fn database<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::internal(err)
    }

    /// Missing/invalid token and role-guard rejections.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::with_body(
            StatusCode::UNAUTHORIZED,
            ErrorBody::Error(message.clone()),
            message,
        )
    }

    /// Credential failures, reported with the nested `error.message` shape.
    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::with_body(
            StatusCode::UNAUTHORIZED,
            ErrorBody::Nested(message.clone()),
            message,
        )
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::with_body(
            StatusCode::NOT_FOUND,
            ErrorBody::Message(message.clone()),
            message,
        )
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::with_body(
            StatusCode::CONFLICT,
            ErrorBody::Message(message.clone()),
            message,
        )
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::with_body(
            StatusCode::BAD_REQUEST,
            ErrorBody::Error(message.clone()),
            message,
        )
    }

    /// 422 carrying a single message (e.g. an empty request body).
    pub fn unprocessable(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::with_body(
            StatusCode::UNPROCESSABLE_ENTITY,
            ErrorBody::Error(message.clone()),
            message,
        )
    }

    /// 422 carrying field-level failures in rule-declaration order.
    pub fn validation(errors: Vec<FieldError>) -> Self {
        let summary = errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join(", ");
        Self::with_body(
            StatusCode::UNPROCESSABLE_ENTITY,
            ErrorBody::Fields(errors),
            summary,
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(error = ?self.error, status = %self.status.as_u16(), "Request failed");
        }

        (self.status, Json(self.body.to_json())).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
