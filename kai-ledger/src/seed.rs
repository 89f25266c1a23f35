// Copyright (c) KAI
// SPDX-License-Identifier: Apache-2.0

//! Startup data set
//!
//! Every process starts from the same rows; changes made through the ledgers
//! live only until restart.

use chrono::{NaiveDate, NaiveTime};

use crate::ledger::{ConfirmationLedger, RefundLedger};
use crate::records::{RefundRequest, RequestStatus, TicketConfirmation};
use crate::trains::{Train, TrainState};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed date is a valid calendar date")
}

fn clock(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("seed time is a valid clock time")
}

pub fn refunds() -> Vec<RefundRequest> {
    vec![
        RefundRequest {
            id: "RF-001".to_string(),
            ticket_id: "TK-20241002-001".to_string(),
            user_name: "Ahmad Wijaya".to_string(),
            train_name: "Argo Bromo Anggrek".to_string(),
            amount: 450_000,
            reason: "Kereta terlambat lebih dari 2 jam".to_string(),
            date: date(2024, 10, 2),
            status: RequestStatus::Pending,
        },
        RefundRequest {
            id: "RF-002".to_string(),
            ticket_id: "TK-20241002-015".to_string(),
            user_name: "Siti Nurhaliza".to_string(),
            train_name: "Bima Express".to_string(),
            amount: 350_000,
            reason: "Pembatalan perjalanan mendadak".to_string(),
            date: date(2024, 10, 2),
            status: RequestStatus::Pending,
        },
        RefundRequest {
            id: "RF-003".to_string(),
            ticket_id: "TK-20241001-089".to_string(),
            user_name: "Budi Santoso".to_string(),
            train_name: "Gajayana".to_string(),
            amount: 500_000,
            reason: "Kendala teknis kereta".to_string(),
            date: date(2024, 10, 1),
            status: RequestStatus::Approved,
        },
        RefundRequest {
            id: "RF-004".to_string(),
            ticket_id: "TK-20241001-045".to_string(),
            user_name: "Dewi Lestari".to_string(),
            train_name: "Turangga".to_string(),
            amount: 300_000,
            reason: "Salah booking".to_string(),
            date: date(2024, 10, 1),
            status: RequestStatus::Rejected,
        },
    ]
}

pub fn confirmations() -> Vec<TicketConfirmation> {
    vec![
        TicketConfirmation {
            id: "CF-001".to_string(),
            booking_id: "BK-20241002-045".to_string(),
            user_name: "Rina Kartika".to_string(),
            train_name: "Argo Bromo Anggrek".to_string(),
            route: "Jakarta - Surabaya".to_string(),
            date: date(2024, 10, 5),
            seat_number: "A12".to_string(),
            amount: 450_000,
            payment_status: "verified".to_string(),
            status: RequestStatus::Pending,
        },
        TicketConfirmation {
            id: "CF-002".to_string(),
            booking_id: "BK-20241002-056".to_string(),
            user_name: "Joko Widodo".to_string(),
            train_name: "Bima Express".to_string(),
            route: "Jakarta - Surabaya".to_string(),
            date: date(2024, 10, 6),
            seat_number: "B05".to_string(),
            amount: 350_000,
            payment_status: "verified".to_string(),
            status: RequestStatus::Pending,
        },
        TicketConfirmation {
            id: "CF-003".to_string(),
            booking_id: "BK-20241002-034".to_string(),
            user_name: "Sri Mulyani".to_string(),
            train_name: "Gajayana".to_string(),
            route: "Jakarta - Malang".to_string(),
            date: date(2024, 10, 4),
            seat_number: "C08".to_string(),
            amount: 500_000,
            payment_status: "verified".to_string(),
            status: RequestStatus::Approved,
        },
    ]
}

pub fn trains() -> Vec<Train> {
    vec![
        Train {
            id: "KA-001".to_string(),
            name: "Argo Bromo Anggrek".to_string(),
            route: "Jakarta - Surabaya".to_string(),
            last_station: "Semarang Tawang".to_string(),
            eta: clock(14, 30),
            delay_minutes: 0,
            status: TrainState::OnTime,
        },
        Train {
            id: "KA-002".to_string(),
            name: "Bima Express".to_string(),
            route: "Jakarta - Surabaya".to_string(),
            last_station: "Cirebon".to_string(),
            eta: clock(15, 45),
            delay_minutes: 20,
            status: TrainState::Delayed,
        },
        Train {
            id: "KA-003".to_string(),
            name: "Argo Parahyangan".to_string(),
            route: "Jakarta - Bandung".to_string(),
            last_station: "Bandung".to_string(),
            eta: clock(12, 0),
            delay_minutes: 0,
            status: TrainState::Arrived,
        },
        Train {
            id: "KA-004".to_string(),
            name: "Gajayana".to_string(),
            route: "Jakarta - Malang".to_string(),
            last_station: "Surabaya Gubeng".to_string(),
            eta: clock(18, 20),
            delay_minutes: 10,
            status: TrainState::Delayed,
        },
        Train {
            id: "KA-005".to_string(),
            name: "Turangga".to_string(),
            route: "Jakarta - Surabaya".to_string(),
            last_station: "Tegal".to_string(),
            eta: clock(16, 15),
            delay_minutes: 0,
            status: TrainState::OnTime,
        },
    ]
}

pub fn refund_ledger() -> RefundLedger {
    RefundLedger::seed(refunds())
}

pub fn confirmation_ledger() -> ConfirmationLedger {
    ConfirmationLedger::seed(confirmations())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        let refund_ids: HashSet<_> = refunds().into_iter().map(|r| r.id).collect();
        assert_eq!(refund_ids.len(), 4);
        let confirmation_ids: HashSet<_> = confirmations().into_iter().map(|c| c.id).collect();
        assert_eq!(confirmation_ids.len(), 3);
        let train_ids: HashSet<_> = trains().into_iter().map(|t| t.id).collect();
        assert_eq!(train_ids.len(), 5);
    }

    #[test]
    fn test_seed_statuses() {
        let ledger = refund_ledger();
        assert_eq!(ledger.count_by_status(RequestStatus::Pending), 2);
        assert_eq!(ledger.count_by_status(RequestStatus::Approved), 1);
        assert_eq!(ledger.count_by_status(RequestStatus::Rejected), 1);

        let ledger = confirmation_ledger();
        assert_eq!(ledger.count_by_status(RequestStatus::Pending), 2);
        assert_eq!(ledger.count_by_status(RequestStatus::Approved), 1);
    }

    #[test]
    fn test_seed_keeps_source_wording() {
        let reasons: Vec<String> = refunds().into_iter().map(|r| r.reason).collect();
        assert_eq!(
            reasons,
            vec![
                "Kereta terlambat lebih dari 2 jam",
                "Pembatalan perjalanan mendadak",
                "Kendala teknis kereta",
                "Salah booking",
            ]
        );
    }

    #[test]
    fn test_delayed_trains_carry_delay() {
        for train in trains() {
            let delayed = train.status == TrainState::Delayed;
            assert_eq!(delayed, train.delay_minutes > 0, "{}", train.id);
        }
    }
}
