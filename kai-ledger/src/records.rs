// Copyright (c) KAI
// SPDX-License-Identifier: Apache-2.0

//! Record types held by the request ledgers
//!
//! Refund requests and ticket confirmations share one lifecycle: a single
//! [`RequestStatus`] tag that starts at `pending` and is moved by admin actions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ParseStatusError;

// ============================================================================
// STATUS
// ============================================================================

/// Lifecycle tag for a refund or confirmation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 3] = [
        RequestStatus::Pending,
        RequestStatus::Approved,
        RequestStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
        }
    }

    /// Badge label shown next to the record
    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Approved => "Approved",
            RequestStatus::Rejected => "Rejected",
        }
    }

    /// Whether the dashboard still offers approve/reject for this record.
    pub fn is_actionable(&self) -> bool {
        matches!(self, RequestStatus::Pending)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(RequestStatus::Pending),
            "approved" => Ok(RequestStatus::Approved),
            "rejected" => Ok(RequestStatus::Rejected),
            other => Err(ParseStatusError::new("request", other)),
        }
    }
}

/// Admin action on a pending record.
///
/// The confirmation page calls these "confirm" and "cancel"; they map to the
/// same two transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordAction {
    Approve,
    Reject,
}

impl RecordAction {
    pub fn target_status(&self) -> RequestStatus {
        match self {
            RecordAction::Approve => RequestStatus::Approved,
            RecordAction::Reject => RequestStatus::Rejected,
        }
    }
}

// ============================================================================
// RECORD TRAIT
// ============================================================================

/// A row the ledger can index by identifier and move through the lifecycle.
pub trait LedgerRecord {
    /// Short record kind used in logs and errors ("refund", "confirmation")
    const KIND: &'static str;

    fn id(&self) -> &str;
    fn status(&self) -> RequestStatus;
    fn set_status(&mut self, status: RequestStatus);
}

// ============================================================================
// RECORD TYPES
// ============================================================================

/// Customer refund request for a purchased ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundRequest {
    pub id: String,
    pub ticket_id: String,
    pub user_name: String,
    pub train_name: String,
    pub amount: u64, // Whole rupiah
    pub reason: String,
    pub date: NaiveDate,
    pub status: RequestStatus,
}

impl LedgerRecord for RefundRequest {
    const KIND: &'static str = "refund";

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> RequestStatus {
        self.status
    }

    fn set_status(&mut self, status: RequestStatus) {
        self.status = status;
    }
}

/// Booking waiting for an admin to confirm the issued ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketConfirmation {
    pub id: String,
    pub booking_id: String,
    pub user_name: String,
    pub train_name: String,
    pub route: String,
    pub date: NaiveDate,       // Travel date
    pub seat_number: String,
    pub amount: u64,           // Whole rupiah
    pub payment_status: String, // Verified upstream, not part of the lifecycle
    pub status: RequestStatus,
}

impl LedgerRecord for TicketConfirmation {
    const KIND: &'static str = "confirmation";

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> RequestStatus {
        self.status
    }

    fn set_status(&mut self, status: RequestStatus) {
        self.status = status;
    }
}
