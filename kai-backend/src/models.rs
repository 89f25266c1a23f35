// Request and response models for the admin API

use kai_ledger::settings::{AdminProfile, NotificationSettings, SmtpSettings};
use kai_ledger::stats::{
    ActivityEntry, DailyActivity, DashboardSummary, KeyMetrics, MonthlyRevenue, RouteShare,
};
use kai_ledger::{
    format_idr, AdminSettings, RefundRequest, RequestStatus, StatusCounts, TicketConfirmation,
    Train,
};
use serde::{Deserialize, Serialize};

/// Login form submission
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub ok: bool,
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Query string of the train monitoring page
#[derive(Debug, Deserialize)]
pub struct TrainsQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default = "default_status_filter")]
    pub status: String,
}

fn default_status_filter() -> String {
    "all".to_string()
}

#[derive(Debug, Serialize)]
pub struct TrainView {
    #[serde(flatten)]
    pub train: Train,
    pub status_label: &'static str,
}

impl From<&Train> for TrainView {
    fn from(train: &Train) -> Self {
        Self {
            train: train.clone(),
            status_label: train.status.label(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TrainsResponse {
    pub trains: Vec<TrainView>,
    pub total: usize,
    pub query: String,
    pub status: String,
}

/// Refund row as shown in the refund table
#[derive(Debug, Serialize)]
pub struct RefundView {
    #[serde(flatten)]
    pub refund: RefundRequest,
    pub amount_display: String,
    pub status_label: &'static str,
    pub actionable: bool,
}

impl From<&RefundRequest> for RefundView {
    fn from(refund: &RefundRequest) -> Self {
        Self {
            refund: refund.clone(),
            amount_display: format_idr(refund.amount),
            status_label: refund.status.label(),
            actionable: refund.status.is_actionable(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RefundsResponse {
    pub refunds: Vec<RefundView>,
    pub counts: StatusCounts,
}

#[derive(Debug, Serialize)]
pub struct ConfirmationView {
    #[serde(flatten)]
    pub confirmation: TicketConfirmation,
    pub amount_display: String,
    pub status_label: &'static str,
    pub actionable: bool,
}

impl From<&TicketConfirmation> for ConfirmationView {
    fn from(confirmation: &TicketConfirmation) -> Self {
        Self {
            confirmation: confirmation.clone(),
            amount_display: format_idr(confirmation.amount),
            status_label: confirmation.status.label(),
            actionable: confirmation.status.is_actionable(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ConfirmationsResponse {
    pub confirmations: Vec<ConfirmationView>,
    pub counts: StatusCounts,
}

/// Acknowledgment for an approve/reject action
#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub id: String,
    pub status: RequestStatus,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub summary: DashboardSummary,
    pub weekly_activity: Vec<DailyActivity>,
    pub recent_activity: Vec<ActivityEntry>,
}

#[derive(Debug, Serialize)]
pub struct StatisticsResponse {
    pub key_metrics: KeyMetrics,
    pub monthly_revenue: Vec<MonthlyRevenue>,
    pub route_distribution: Vec<RouteShare>,
}

/// Settings form submission
#[derive(Debug, Deserialize)]
pub struct SettingsUpdate {
    pub profile: AdminProfile,
    pub notifications: NotificationSettings,
    pub smtp: SmtpSettings,
    /// New admin password; blank or absent keeps the current one
    #[serde(default)]
    pub password: Option<String>,
}

impl SettingsUpdate {
    pub fn into_parts(self) -> (AdminSettings, Option<String>) {
        let settings = AdminSettings {
            profile: self.profile,
            notifications: self.notifications,
            smtp: self.smtp,
        };
        (settings, self.password)
    }
}
