//! Typed errors and their mapping onto the wire envelope.
//!
//! Every failure class serializes to the same 404 envelope
//! `{statusMessage, errors}`. Existing clients depend on that shape, so the
//! taxonomy stays internal.

use crate::response::Envelope;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed request fields. Carries the action's status
    /// message and one entry per violation.
    #[error("{message}")]
    Validation { message: String, errors: Vec<String> },
    /// Query execution failure, labelled with the action's status message.
    #[error("{context}")]
    Store {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },
    /// Unknown resource, unmatched verb, or a path with nothing to dispatch.
    #[error("not found")]
    NotFound,
}

impl AppError {
    pub fn validation(message: impl Into<String>, errors: Vec<String>) -> AppError {
        AppError::Validation {
            message: message.into(),
            errors,
        }
    }
}

/// Adapter for `map_err` on store calls: wraps the query failure with the
/// action's status message.
pub fn store_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |source| AppError::Store { context, source }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match self {
            AppError::Validation { message, errors } => Envelope {
                status_message: message,
                errors: Some(errors),
            },
            AppError::Store { context, source } => Envelope {
                status_message: context.to_string(),
                errors: Some(vec![source.to_string()]),
            },
            AppError::NotFound => Envelope {
                status_message: "Not Found".to_string(),
                errors: None,
            },
        };
        (StatusCode::NOT_FOUND, Json(body)).into_response()
    }
}
