//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::pricing::PricingError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Unknown service: {0}")]
    UnknownService(String),

    #[error("Missing x-session-id header")]
    MissingSession,

    #[error("{collaborator} service not available. Please refresh the page and try again.")]
    Unavailable { collaborator: &'static str },

    #[error("Email sending failed: {0}")]
    EmailDelivery(String),

    #[error("No receipt data available. Please preview your booking first.")]
    NoReceipt,

    #[error("A booking submission is already in progress")]
    SubmissionInProgress,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Document error: {0}")]
    Document(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        match err {
            PricingError::UnknownService(name) => AppError::UnknownService(name),
        }
    }
}

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error_type: &'static str,
    pub message: String,
}

impl AppError {
    fn status_and_type(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation"),
            AppError::UnknownService(_) => (StatusCode::NOT_FOUND, "unknown_service"),
            AppError::MissingSession => (StatusCode::BAD_REQUEST, "missing_session"),
            AppError::Unavailable { .. } => (StatusCode::SERVICE_UNAVAILABLE, "unavailable"),
            AppError::EmailDelivery(_) => (StatusCode::BAD_GATEWAY, "email_delivery"),
            AppError::NoReceipt => (StatusCode::NOT_FOUND, "no_receipt"),
            AppError::SubmissionInProgress => (StatusCode::CONFLICT, "submission_in_progress"),
            AppError::Configuration(_)
            | AppError::Document(_)
            | AppError::Template(_)
            | AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status_and_type();

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("{}", self);
            "Something went wrong. Please try again or contact us directly.".to_string()
        } else {
            tracing::debug!("Request rejected ({}): {}", status.as_u16(), self);
            self.to_string()
        };

        (status, Json(ErrorResponse { error_type, message })).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
