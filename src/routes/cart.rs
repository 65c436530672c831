//! Catalog, session and cart handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde_json::{json, Value};
use tracing::{debug, info};
use uuid::Uuid;

use super::{SessionId, SESSION_COOKIE};
use crate::error::{AppError, Result};
use crate::pricing::requests::AddServiceRequest;
use crate::pricing::responses::{CartResponse, CatalogResponse};
use crate::AppState;

/// Start a new visitor session.
///
/// The id is returned in the body for API clients and set as a cookie so
/// the receipt page and PDF link work from a plain browser navigation.
pub async fn create_session(jar: CookieJar) -> (StatusCode, CookieJar, Json<Value>) {
    let session_id = Uuid::new_v4().to_string();
    debug!("Created session {}", session_id);

    let cookie = Cookie::build((SESSION_COOKIE, session_id.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    (
        StatusCode::CREATED,
        jar.add(cookie),
        Json(json!({ "session_id": session_id })),
    )
}

pub async fn catalog(State(state): State<AppState>) -> Json<CatalogResponse> {
    let business = state.engine.business();
    Json(CatalogResponse::new(
        &business.catalog,
        &business.fee,
        &business.currency,
    ))
}

/// Current cart priced as a quote
pub async fn get_cart(
    State(state): State<AppState>,
    SessionId(session): SessionId,
) -> Json<CartResponse> {
    let selection = state.sessions.selection(&session).await;
    Json(CartResponse::new(&state.engine.quote(&selection), false))
}

/// Add a catalog service to the cart
pub async fn add_item(
    State(state): State<AppState>,
    SessionId(session): SessionId,
    Json(request): Json<AddServiceRequest>,
) -> Result<Json<CartResponse>> {
    let engine = &state.engine;
    let (selection, added) = state
        .sessions
        .update_selection(&session, |selection| {
            engine
                .select(selection, &request.name)
                .map_err(AppError::from)
        })
        .await?;

    info!(
        "Session {} added {} (changed: {}, {} selected)",
        session,
        request.name,
        added,
        selection.len()
    );
    Ok(Json(CartResponse::new(&engine.quote(&selection), added)))
}

/// Remove the service at a cart position. Out-of-range positions leave
/// the cart unchanged.
pub async fn remove_item(
    State(state): State<AppState>,
    SessionId(session): SessionId,
    Path(position): Path<usize>,
) -> Result<Json<CartResponse>> {
    let (selection, removed) = state
        .sessions
        .update_selection(&session, |selection| Ok(selection.remove_at(position)))
        .await?;

    match &removed {
        Some(service) => info!("Session {} removed {}", session, service.name),
        None => debug!("Session {} has no service at position {}", session, position),
    }
    Ok(Json(CartResponse::new(
        &state.engine.quote(&selection),
        removed.is_some(),
    )))
}

pub async fn clear_cart(
    State(state): State<AppState>,
    SessionId(session): SessionId,
) -> Json<CartResponse> {
    state.sessions.clear_selection(&session).await;
    info!("Session {} cleared its cart", session);
    let selection = state.sessions.selection(&session).await;
    Json(CartResponse::new(&state.engine.quote(&selection), true))
}
