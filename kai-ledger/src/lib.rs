// Copyright (c) KAI
// SPDX-License-Identifier: Apache-2.0

//! KAI admin dashboard domain
//!
//! In-memory state behind the admin dashboard pages.
//!
//! ## Module Structure
//!
//! - `records`: refund/confirmation rows and their status lifecycle
//! - `ledger`: ordered record store with status transitions and tallies
//! - `trains`: train monitoring data and the search/status filter
//! - `seed`: the fixed startup data set
//! - `stats`: dashboard and statistics figures
//! - `settings`: admin preferences
//! - `auth`: login credential check
//! - `currency`: rupiah formatting

use thiserror::Error;

pub mod auth;
pub mod currency;
pub mod ledger;
pub mod records;
pub mod seed;
pub mod settings;
pub mod stats;
pub mod trains;

pub use auth::Credentials;
pub use currency::format_idr;
pub use ledger::{ConfirmationLedger, RefundLedger, RequestLedger, StatusCounts};
pub use records::{LedgerRecord, RecordAction, RefundRequest, RequestStatus, TicketConfirmation};
pub use settings::AdminSettings;
pub use trains::{filter_trains, Train, TrainFilter, TrainState, TrainStatusFilter};

/// Ledger errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },
}

/// Unknown status tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} status '{value}'")]
pub struct ParseStatusError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseStatusError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("{field} is not a valid email address: '{value}'")]
    InvalidEmail { field: &'static str, value: String },
    #[error("smtp.port must be between 1 and 65535")]
    InvalidPort,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("email or password is incorrect")]
    InvalidCredentials,
}
