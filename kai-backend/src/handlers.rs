// Handlers for the admin dashboard endpoints

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use kai_ledger::{
    stats, AdminSettings, LedgerRecord, RecordAction, RequestLedger, RequestStatus, SettingsError,
    TrainFilter, TrainStatusFilter,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::models::*;
use crate::{AdminError, AppState};

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let refunds = state.refunds.read().await.len();
    let confirmations = state.confirmations.read().await.len();

    Json(serde_json::json!({
        "status": "healthy",
        "refunds": refunds,
        "confirmations": confirmations,
        "trains": state.trains.len(),
    }))
}

/// Check the admin credentials
pub async fn login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AdminError> {
    let Json(req) = payload.map_err(|e| {
        warn!("Rejected login body: {}", e.body_text());
        e
    })?;

    if let Err(e) = state.credentials.read().await.verify(&req.email, &req.password) {
        warn!("Login failed for '{}'", req.email);
        return Err(e.into());
    }

    let profile = state.settings.read().await.profile.clone();
    info!("Admin '{}' logged in", req.email);

    Ok(Json(LoginResponse {
        ok: true,
        message: format!("Welcome to the KAI admin dashboard, {}", profile.name),
        name: profile.name,
        email: req.email,
    }))
}

pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardResponse> {
    let refunds = state.refunds.read().await;
    let confirmations = state.confirmations.read().await;

    Json(DashboardResponse {
        summary: stats::dashboard_summary(&state.trains, &refunds, &confirmations),
        weekly_activity: stats::weekly_activity(),
        recent_activity: stats::recent_activity(),
    })
}

/// Search and filter the monitored trains
pub async fn list_trains(
    State(state): State<Arc<AppState>>,
    query: Result<Query<TrainsQuery>, QueryRejection>,
) -> Result<Json<TrainsResponse>, AdminError> {
    let Query(query) = query?;
    let status: TrainStatusFilter = query.status.parse()?;
    let filter = TrainFilter::new(query.q, status);

    let trains: Vec<TrainView> = filter
        .apply(&state.trains)
        .into_iter()
        .map(TrainView::from)
        .collect();

    Ok(Json(TrainsResponse {
        total: trains.len(),
        trains,
        query: filter.query,
        status: filter.status.to_string(),
    }))
}

pub async fn list_refunds(State(state): State<Arc<AppState>>) -> Json<RefundsResponse> {
    let ledger = state.refunds.read().await;

    Json(RefundsResponse {
        refunds: ledger.list().iter().map(RefundView::from).collect(),
        counts: ledger.status_counts(),
    })
}

pub async fn approve_refund(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ActionResponse>, AdminError> {
    let status = apply_action(&state.refunds, &id, RecordAction::Approve).await?;
    Ok(Json(ActionResponse {
        message: format!("Refund {} approved, funds will be processed.", id),
        id,
        status,
    }))
}

pub async fn reject_refund(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ActionResponse>, AdminError> {
    let status = apply_action(&state.refunds, &id, RecordAction::Reject).await?;
    Ok(Json(ActionResponse {
        message: format!("Refund {} rejected.", id),
        id,
        status,
    }))
}

pub async fn list_confirmations(
    State(state): State<Arc<AppState>>,
) -> Json<ConfirmationsResponse> {
    let ledger = state.confirmations.read().await;

    Json(ConfirmationsResponse {
        confirmations: ledger.list().iter().map(ConfirmationView::from).collect(),
        counts: ledger.status_counts(),
    })
}

pub async fn confirm_ticket(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ActionResponse>, AdminError> {
    let status = apply_action(&state.confirmations, &id, RecordAction::Approve).await?;
    Ok(Json(ActionResponse {
        message: format!(
            "Ticket {} confirmed. The passenger will be notified by email/SMS.",
            id
        ),
        id,
        status,
    }))
}

pub async fn cancel_ticket(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ActionResponse>, AdminError> {
    let status = apply_action(&state.confirmations, &id, RecordAction::Reject).await?;
    Ok(Json(ActionResponse {
        message: format!("Ticket {} cancelled. The passenger will be notified.", id),
        id,
        status,
    }))
}

pub async fn get_statistics() -> Json<StatisticsResponse> {
    let monthly_revenue = stats::monthly_revenue();

    Json(StatisticsResponse {
        key_metrics: stats::key_metrics(&monthly_revenue),
        monthly_revenue,
        route_distribution: stats::route_distribution(),
    })
}

pub async fn get_settings(State(state): State<Arc<AppState>>) -> Json<AdminSettings> {
    Json(state.settings.read().await.clone())
}

pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SettingsUpdate>, JsonRejection>,
) -> Result<Json<AdminSettings>, AdminError> {
    let Json(update) = payload.map_err(|e| {
        warn!("Rejected settings body: {}", e.body_text());
        e
    })?;
    let (settings, password) = update.into_parts();

    if let Err(e) = settings.validate() {
        warn!("Rejected settings update: {}", e);
        return Err(e.into());
    }

    if let Some(password) = password.filter(|p| !p.is_empty()) {
        if !state.credentials.write().await.change_password(&password) {
            warn!("Rejected blank admin password");
            return Err(SettingsError::EmptyField("password").into());
        }
        info!("Admin password changed");
    }

    *state.settings.write().await = settings.clone();
    info!("Settings saved");

    Ok(Json(settings))
}

/// Apply an admin action to a record that is still pending.
///
/// The ledger itself accepts any transition; the dashboard only offers
/// actions on pending rows, so processed rows answer with a conflict here.
async fn apply_action<R: LedgerRecord>(
    ledger: &RwLock<RequestLedger<R>>,
    id: &str,
    action: RecordAction,
) -> Result<RequestStatus, AdminError> {
    let mut ledger = ledger.write().await;

    if let Some(record) = ledger.get(id) {
        if !record.status().is_actionable() {
            warn!("{} '{}' already {}, ignoring {:?}", R::KIND, id, record.status(), action);
            return Err(AdminError::AlreadyProcessed {
                kind: R::KIND,
                id: id.to_string(),
                status: record.status(),
            });
        }
    }

    let target = action.target_status();
    ledger.set_status(id, target).map_err(|e| {
        warn!("{}", e);
        e
    })?;

    info!("{} '{}' -> {}", R::KIND, id, target);
    Ok(target)
}
