//! SLAY BodyPiercing booking backend.
//!
//! Prices a session's cart of piercing services, keeps a receipt snapshot
//! per session, renders it as text or PDF and emails submitted bookings to
//! the studio and the client.

pub mod booking;
pub mod clock;
pub mod collaborators;
pub mod config;
pub mod error;
pub mod notify;
pub mod pricing;
pub mod receipt;
pub mod routes;
pub mod session;

use std::path::Path;
use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

pub use clock::{Clock, FixedClock, SystemClock};
pub use collaborators::Collaborators;
pub use config::{BusinessConfig, Config};
pub use error::{AppError, Result};
pub use pricing::PricingEngine;
pub use session::SessionStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: PricingEngine,
    pub sessions: SessionStore,
    pub collaborators: Collaborators,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Production state: wall clock and collaborators from configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            engine: PricingEngine::new(Arc::new(config.business.clone())),
            sessions: SessionStore::new(config.session_ttl),
            collaborators: Collaborators::from_config(config),
            clock: Arc::new(SystemClock),
        }
    }
}

/// API routes without static file serving
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/api/session", post(routes::cart::create_session))
        .route("/api/catalog", get(routes::cart::catalog))
        .route("/api/cart", get(routes::cart::get_cart).delete(routes::cart::clear_cart))
        .route("/api/cart/items", post(routes::cart::add_item))
        .route("/api/cart/items/:position", delete(routes::cart::remove_item))
        .route("/api/booking/preview", post(routes::booking::preview))
        .route("/booking/receipt", get(routes::booking::receipt_page))
        .route("/api/booking/receipt.pdf", get(routes::booking::receipt_pdf))
        .route("/api/booking/submit", post(routes::booking::submit))
        .with_state(state)
}

/// Full application: API plus the site's static files
pub fn app(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    api_router(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
