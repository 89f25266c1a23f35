// KAI Admin Backend
// JSON API behind the admin dashboard pages

pub mod config;
pub mod handlers;
pub mod models;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use kai_ledger::{
    seed, AdminSettings, ConfirmationLedger, Credentials, LedgerError, RefundLedger, RequestStatus,
    Train,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
pub struct AppState {
    pub refunds: RwLock<RefundLedger>,
    pub confirmations: RwLock<ConfirmationLedger>,
    /// Read-only for the session
    pub trains: Vec<Train>,
    pub settings: RwLock<AdminSettings>,
    /// Password can be changed from the settings page
    pub credentials: RwLock<Credentials>,
}

impl AppState {
    /// State built from the startup data set
    pub fn seeded(credentials: Credentials) -> Self {
        Self {
            refunds: RwLock::new(seed::refund_ledger()),
            confirmations: RwLock::new(seed::confirmation_ledger()),
            trains: seed::trains(),
            settings: RwLock::new(AdminSettings::default()),
            credentials: RwLock::new(credentials),
        }
    }
}

/// Errors surfaced to the dashboard
#[derive(Debug, Error)]
pub enum AdminError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("{kind} '{id}' was already {status}")]
    AlreadyProcessed {
        kind: &'static str,
        id: String,
        status: RequestStatus,
    },
    #[error(transparent)]
    Auth(#[from] kai_ledger::AuthError),
    #[error(transparent)]
    InvalidSettings(#[from] kai_ledger::SettingsError),
    #[error(transparent)]
    InvalidFilter(#[from] kai_ledger::ParseStatusError),
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
    #[error("invalid query string: {0}")]
    InvalidQuery(#[from] QueryRejection),
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let status = match &self {
            AdminError::Ledger(LedgerError::NotFound { .. }) => StatusCode::NOT_FOUND,
            AdminError::AlreadyProcessed { .. } => StatusCode::CONFLICT,
            AdminError::Auth(_) => StatusCode::UNAUTHORIZED,
            AdminError::InvalidSettings(_)
            | AdminError::InvalidFilter(_)
            | AdminError::InvalidBody(_)
            | AdminError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        };
        let body = Json(json!({
            "error": self.to_string(),
        }));
        (status, body).into_response()
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/login", post(handlers::login))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/trains", get(handlers::list_trains))
        .route("/api/refunds", get(handlers::list_refunds))
        .route("/api/refunds/:id/approve", post(handlers::approve_refund))
        .route("/api/refunds/:id/reject", post(handlers::reject_refund))
        .route("/api/confirmations", get(handlers::list_confirmations))
        .route("/api/confirmations/:id/confirm", post(handlers::confirm_ticket))
        .route("/api/confirmations/:id/cancel", post(handlers::cancel_ticket))
        .route("/api/statistics", get(handlers::get_statistics))
        .route(
            "/api/settings",
            get(handlers::get_settings).put(handlers::update_settings),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
