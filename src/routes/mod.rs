//! HTTP route handlers

pub mod booking;
pub mod cart;

use axum::{async_trait, extract::FromRequestParts, extract::State, http::request::Parts, Json};
use axum_extra::extract::cookie::CookieJar;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::AppState;

pub const SESSION_HEADER: &str = "x-session-id";
pub const SESSION_COOKIE: &str = "slay_session";

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Session id taken from the `x-session-id` header, or from the
/// `slay_session` cookie for plain browser links
#[derive(Debug, Clone)]
pub struct SessionId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for SessionId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let from_header = parts
            .headers
            .get(SESSION_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(non_empty);
        let from_cookie = || {
            CookieJar::from_headers(&parts.headers)
                .get(SESSION_COOKIE)
                .and_then(|cookie| non_empty(cookie.value()))
        };

        from_header
            .or_else(from_cookie)
            .map(SessionId)
            .ok_or(AppError::MissingSession)
    }
}

/// Health check with session statistics
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "slay-booking",
        "email_configured": state.collaborators.email().is_ok(),
        "sessions": state.sessions.stats(),
    }))
}
