// Copyright (c) KAI
// SPDX-License-Identifier: Apache-2.0

//! Dashboard and statistics figures
//!
//! Chart series are reference data. Tallies the ledgers or the train list can
//! answer are derived from them on every call.

use serde::Serialize;

use crate::ledger::{ConfirmationLedger, RefundLedger};
use crate::records::RequestStatus;
use crate::trains::{Train, TrainState};

/// Week-over-week movement shown under a stat card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Trend {
    pub value_percent: u32,
    pub is_positive: bool,
}

impl Trend {
    const fn up(value_percent: u32) -> Self {
        Self {
            value_percent,
            is_positive: true,
        }
    }

    const fn down(value_percent: u32) -> Self {
        Self {
            value_percent,
            is_positive: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub value: u64,
    pub trend: Trend,
}

/// Headline cards on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub active_trains: StatCard,
    pub pending_refunds: StatCard,
    pub confirmed_tickets: StatCard,
    pub active_users: StatCard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyActivity {
    pub day: &'static str,
    pub trips: u32,
    pub refunds: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityEntry {
    pub action: &'static str,
    pub detail: &'static str,
    pub time: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyRevenue {
    pub month: &'static str,
    pub revenue: u64,
    pub tickets: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteShare {
    pub route: &'static str,
    pub percent: u32,
}

/// Cards at the top of the statistics page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyMetrics {
    pub revenue: u64,
    pub revenue_change_percent: f64,
    pub total_users: u64,
    pub users_change_percent: f64,
    pub trips: u64,
    pub trips_change_percent: f64,
    pub growth_percent: f64,
}

const ACTIVE_USERS: u64 = 1_200;
const TOTAL_USERS: u64 = 1_284;
const MONTHLY_TRIPS: u64 = 342;

pub fn dashboard_summary(
    trains: &[Train],
    refunds: &RefundLedger,
    confirmations: &ConfirmationLedger,
) -> DashboardSummary {
    let active_trains = trains
        .iter()
        .filter(|t| t.status != TrainState::Arrived)
        .count() as u64;

    DashboardSummary {
        active_trains: StatCard {
            value: active_trains,
            trend: Trend::up(12),
        },
        pending_refunds: StatCard {
            value: refunds.count_by_status(RequestStatus::Pending) as u64,
            trend: Trend::down(5),
        },
        confirmed_tickets: StatCard {
            value: confirmations.count_by_status(RequestStatus::Approved) as u64,
            trend: Trend::up(8),
        },
        active_users: StatCard {
            value: ACTIVE_USERS,
            trend: Trend::up(15),
        },
    }
}

pub fn weekly_activity() -> Vec<DailyActivity> {
    [
        ("Sen", 45, 8),
        ("Sel", 52, 12),
        ("Rab", 48, 6),
        ("Kam", 61, 9),
        ("Jum", 55, 14),
        ("Sab", 67, 7),
        ("Min", 58, 10),
    ]
    .into_iter()
    .map(|(day, trips, refunds)| DailyActivity {
        day,
        trips,
        refunds,
    })
    .collect()
}

pub fn recent_activity() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry {
            action: "Refund disetujui",
            detail: "Tiket #TK-20241002-001",
            time: "5 menit lalu",
        },
        ActivityEntry {
            action: "Kereta tiba",
            detail: "Argo Bromo Anggrek (KA-001)",
            time: "15 menit lalu",
        },
        ActivityEntry {
            action: "Tiket dikonfirmasi",
            detail: "Booking #BK-20241002-045",
            time: "30 menit lalu",
        },
        ActivityEntry {
            action: "Delay terdeteksi",
            detail: "Bima Express (KA-012) - 20 menit",
            time: "1 jam lalu",
        },
    ]
}

pub fn monthly_revenue() -> Vec<MonthlyRevenue> {
    [
        ("Jan", 4_500_000, 850),
        ("Feb", 4_800_000, 920),
        ("Mar", 5_200_000, 1_050),
        ("Apr", 4_900_000, 980),
        ("May", 5_600_000, 1_150),
        ("Jun", 6_100_000, 1_280),
    ]
    .into_iter()
    .map(|(month, revenue, tickets)| MonthlyRevenue {
        month,
        revenue,
        tickets,
    })
    .collect()
}

pub fn route_distribution() -> Vec<RouteShare> {
    vec![
        RouteShare {
            route: "Jakarta-Surabaya",
            percent: 35,
        },
        RouteShare {
            route: "Jakarta-Bandung",
            percent: 25,
        },
        RouteShare {
            route: "Jakarta-Malang",
            percent: 20,
        },
        RouteShare {
            route: "Lainnya",
            percent: 20,
        },
    ]
}

pub fn key_metrics(monthly: &[MonthlyRevenue]) -> KeyMetrics {
    KeyMetrics {
        revenue: monthly.last().map(|m| m.revenue).unwrap_or(0),
        revenue_change_percent: 12.5,
        total_users: TOTAL_USERS,
        users_change_percent: 8.2,
        trips: MONTHLY_TRIPS,
        trips_change_percent: 15.3,
        growth_percent: 24.0,
    }
}
