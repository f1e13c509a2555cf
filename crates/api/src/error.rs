//! HTTP error mapping.
//!
//! | Error                  | Status | Body                                   |
//! |------------------------|--------|----------------------------------------|
//! | `Validation`           | 422    | `{"detail": [{loc, msg, type, ctx?}]}`  |
//! | `InvalidBody`          | 422    | `{"detail": [{loc: ["body"], ...}]}`    |
//! | `InvalidPath`          | 422    | `{"detail": [{loc: ["path","id"], ...}]}` |
//! | `NotFound`             | 404    | `{"detail": "Transporte no encontrado"}` |
//! | `Storage`              | 500    | `{"detail": "Error interno del servidor"}` |

use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use db::DbError;
use domain::{Constraint, FieldViolation, ValidationError};
use serde_json::{json, Value};
use thiserror::Error;

pub const NOT_FOUND_DETAIL: &str = "Transporte no encontrado";
pub const INTERNAL_DETAIL: &str = "Error interno del servidor";

/// Everything a handler can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The body as a whole was empty, not JSON, or not an object.
    #[error("invalid request body: {message}")]
    InvalidBody { kind: &'static str, message: String },

    /// The `{id}` segment was not an integer.
    #[error("invalid path parameter: {0}")]
    InvalidPath(String),

    #[error("Transporte no encontrado")]
    NotFound,

    #[error("storage failure: {0}")]
    Storage(#[source] DbError),
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound => Self::NotFound,
            other => Self::Storage(other),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        Self::Storage(DbError::Sqlx(err))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidPath(rejection.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidBody { .. } | Self::InvalidPath(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> Value {
        match self {
            Self::Validation(err) => err.violations.iter().map(violation_entry).collect(),
            Self::InvalidBody { kind, message } => json!([{
                "loc": ["body"],
                "msg": message,
                "type": kind,
            }]),
            Self::InvalidPath(msg) => json!([{
                "loc": ["path", "id"],
                "msg": msg,
                "type": "int_parsing",
            }]),
            Self::NotFound => json!(NOT_FOUND_DETAIL),
            Self::Storage(_) => json!(INTERNAL_DETAIL),
        }
    }
}

fn violation_entry(violation: &FieldViolation) -> Value {
    let ctx = match violation.constraint {
        Constraint::TooShort { min }         => Some(json!({ "min_length": min })),
        Constraint::TooLong { max }          => Some(json!({ "max_length": max })),
        Constraint::NotGreaterThan { bound } => Some(json!({ "gt": bound })),
        _ => None,
    };
    let mut entry = json!({
        "loc": ["body", violation.field],
        "msg": violation.constraint.to_string(),
        "type": violation.constraint.kind(),
    });
    if let (Some(ctx), Some(obj)) = (ctx, entry.as_object_mut()) {
        obj.insert("ctx".to_string(), ctx);
    }
    entry
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let Self::Storage(err) = &self {
            tracing::error!("request failed: {err}");
        } else {
            tracing::debug!(%status, "request rejected: {}", self);
        }
        (status, Json(json!({ "detail": self.detail() }))).into_response()
    }
}

/// Failures while starting or running the server.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("invalid allowed origin '{0}'")]
    InvalidOrigin(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
