// Copyright (c) KAI
// SPDX-License-Identifier: Apache-2.0

//! Request status ledger
//!
//! Owns an ordered set of request records, moves their status on admin
//! actions and derives per-status tallies on demand. Counts are never stored.

use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;

use crate::records::{LedgerRecord, RefundRequest, RequestStatus, TicketConfirmation};
use crate::LedgerError;

pub type RefundLedger = RequestLedger<RefundRequest>;
pub type ConfirmationLedger = RequestLedger<TicketConfirmation>;

/// Per-status tallies derived from the ledger rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusCounts {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    pub total: usize,
}

#[derive(Debug, Clone)]
pub struct RequestLedger<R> {
    records: Vec<R>,
    index: HashMap<String, usize>,
}

impl<R: LedgerRecord> RequestLedger<R> {
    /// Build a ledger from records in display order.
    ///
    /// A repeated identifier stays in the listing but only its first
    /// occurrence can be addressed.
    pub fn seed(records: impl IntoIterator<Item = R>) -> Self {
        let records: Vec<R> = records.into_iter().collect();
        let mut index = HashMap::with_capacity(records.len());

        for (pos, record) in records.iter().enumerate() {
            if index.contains_key(record.id()) {
                warn!("Duplicate {} id '{}' in seed set, keeping first", R::KIND, record.id());
                continue;
            }
            index.insert(record.id().to_string(), pos);
        }

        Self { records, index }
    }

    /// Replace the status of one record, returning the status it had before.
    ///
    /// Any status may be set from any other; callers decide which actions
    /// they offer.
    pub fn set_status(
        &mut self,
        id: &str,
        status: RequestStatus,
    ) -> Result<RequestStatus, LedgerError> {
        let pos = *self.index.get(id).ok_or_else(|| LedgerError::NotFound {
            kind: R::KIND,
            id: id.to_string(),
        })?;

        let record = &mut self.records[pos];
        let previous = record.status();
        record.set_status(status);
        Ok(previous)
    }

    pub fn count_by_status(&self, status: RequestStatus) -> usize {
        self.records.iter().filter(|r| r.status() == status).count()
    }

    pub fn status_counts(&self) -> StatusCounts {
        StatusCounts {
            pending: self.count_by_status(RequestStatus::Pending),
            approved: self.count_by_status(RequestStatus::Approved),
            rejected: self.count_by_status(RequestStatus::Rejected),
            total: self.records.len(),
        }
    }

    /// All records in insertion order
    pub fn list(&self) -> &[R] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.index.get(id).map(|&pos| &self.records[pos])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use chrono::NaiveDate;

    fn refund(id: &str, status: RequestStatus) -> RefundRequest {
        RefundRequest {
            id: id.to_string(),
            ticket_id: format!("TK-{}", id),
            user_name: "Ahmad Wijaya".to_string(),
            train_name: "Argo Bromo Anggrek".to_string(),
            amount: 450_000,
            reason: "Kereta terlambat lebih dari 2 jam".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 10, 2).unwrap(),
            status,
        }
    }

    fn assert_counts_match_rows<R: LedgerRecord>(ledger: &RequestLedger<R>) {
        let mut sum = 0;
        for status in RequestStatus::ALL {
            let filtered = ledger.list().iter().filter(|r| r.status() == status).count();
            assert_eq!(ledger.count_by_status(status), filtered);
            sum += filtered;
        }
        assert_eq!(sum, ledger.list().len());
    }

    #[test]
    fn test_seed_preserves_order() {
        let ledger = RequestLedger::seed(vec![
            refund("RF-003", RequestStatus::Approved),
            refund("RF-001", RequestStatus::Pending),
            refund("RF-002", RequestStatus::Rejected),
        ]);
        let ids: Vec<&str> = ledger.list().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["RF-003", "RF-001", "RF-002"]);
        assert_eq!(ledger.len(), 3);
        assert!(!ledger.is_empty());
    }

    #[test]
    fn test_counts_match_rows_for_seed_sets() {
        assert_counts_match_rows(&seed::refund_ledger());
        assert_counts_match_rows(&seed::confirmation_ledger());
        assert_counts_match_rows(&RefundLedger::seed(Vec::new()));
    }

    #[test]
    fn test_set_status_changes_only_target_record() {
        let mut ledger = seed::refund_ledger();
        let before = ledger.list().to_vec();

        let previous = ledger.set_status("RF-002", RequestStatus::Rejected).unwrap();
        assert_eq!(previous, RequestStatus::Pending);

        for (old, new) in before.iter().zip(ledger.list()) {
            if old.id == "RF-002" {
                assert_eq!(new.status, RequestStatus::Rejected);
                let mut expected = old.clone();
                expected.status = RequestStatus::Rejected;
                assert_eq!(new, &expected);
            } else {
                assert_eq!(new, old);
            }
        }
        assert_counts_match_rows(&ledger);
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let mut ledger = seed::confirmation_ledger();
        let before = ledger.list().to_vec();

        let err = ledger.set_status("CF-999", RequestStatus::Approved).unwrap_err();
        assert_eq!(
            err,
            LedgerError::NotFound {
                kind: "confirmation",
                id: "CF-999".to_string()
            }
        );
        assert_eq!(ledger.list(), before.as_slice());
    }

    #[test]
    fn test_set_status_is_idempotent() {
        let mut once = seed::refund_ledger();
        let mut twice = seed::refund_ledger();

        once.set_status("RF-001", RequestStatus::Approved).unwrap();
        twice.set_status("RF-001", RequestStatus::Approved).unwrap();
        let previous = twice.set_status("RF-001", RequestStatus::Approved).unwrap();

        assert_eq!(previous, RequestStatus::Approved);
        assert_eq!(once.list(), twice.list());
    }

    #[test]
    fn test_no_precondition_on_transitions() {
        let mut ledger = RequestLedger::seed(vec![refund("RF-010", RequestStatus::Rejected)]);
        ledger.set_status("RF-010", RequestStatus::Pending).unwrap();
        assert_eq!(ledger.get("RF-010").unwrap().status, RequestStatus::Pending);
    }

    #[test]
    fn test_approve_first_pending_scenario() {
        let mut ledger = RequestLedger::seed(vec![
            refund("RF-001", RequestStatus::Pending),
            refund("RF-002", RequestStatus::Pending),
            refund("RF-003", RequestStatus::Approved),
        ]);

        let first_pending = ledger
            .list()
            .iter()
            .find(|r| r.status == RequestStatus::Pending)
            .map(|r| r.id.clone())
            .unwrap();
        ledger.set_status(&first_pending, RequestStatus::Approved).unwrap();

        assert_eq!(ledger.count_by_status(RequestStatus::Pending), 1);
        assert_eq!(ledger.count_by_status(RequestStatus::Approved), 2);
        assert_eq!(ledger.count_by_status(RequestStatus::Rejected), 0);
        assert_eq!(
            ledger.status_counts(),
            StatusCounts {
                pending: 1,
                approved: 2,
                rejected: 0,
                total: 3,
            }
        );
    }

    #[test]
    fn test_duplicate_ids_address_first_occurrence() {
        let mut ledger = RequestLedger::seed(vec![
            refund("RF-001", RequestStatus::Pending),
            refund("RF-001", RequestStatus::Pending),
        ]);
        ledger.set_status("RF-001", RequestStatus::Approved).unwrap();

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.list()[0].status, RequestStatus::Approved);
        assert_eq!(ledger.list()[1].status, RequestStatus::Pending);
    }
}
