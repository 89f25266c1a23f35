// Copyright (c) KAI
// SPDX-License-Identifier: Apache-2.0

//! Train monitoring reference data and the search/filter query over it
//!
//! Trains are fixed for the session; nothing here mutates them.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ParseStatusError;

/// Running state of a train
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrainState {
    OnTime,
    Delayed,
    Arrived,
}

impl TrainState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrainState::OnTime => "on-time",
            TrainState::Delayed => "delayed",
            TrainState::Arrived => "arrived",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrainState::OnTime => "On Time",
            TrainState::Delayed => "Delayed",
            TrainState::Arrived => "Arrived",
        }
    }
}

impl fmt::Display for TrainState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrainState {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on-time" => Ok(TrainState::OnTime),
            "delayed" => Ok(TrainState::Delayed),
            "arrived" => Ok(TrainState::Arrived),
            other => Err(ParseStatusError::new("train", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Train {
    pub id: String,
    pub name: String,
    pub route: String,
    pub last_station: String,
    #[serde(with = "clock_time")]
    pub eta: NaiveTime,
    pub delay_minutes: u32,
    pub status: TrainState,
}

/// Status dropdown on the monitoring page; `"all"` disables the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrainStatusFilter {
    #[default]
    All,
    Only(TrainState),
}

impl TrainStatusFilter {
    pub fn matches(&self, state: TrainState) -> bool {
        match self {
            TrainStatusFilter::All => true,
            TrainStatusFilter::Only(wanted) => *wanted == state,
        }
    }
}

impl FromStr for TrainStatusFilter {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(TrainStatusFilter::All);
        }
        s.parse().map(TrainStatusFilter::Only)
    }
}

impl fmt::Display for TrainStatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainStatusFilter::All => f.write_str("all"),
            TrainStatusFilter::Only(state) => fmt::Display::fmt(state, f),
        }
    }
}

/// Search box text plus status dropdown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainFilter {
    pub query: String,
    pub status: TrainStatusFilter,
}

impl TrainFilter {
    pub fn new(query: impl Into<String>, status: TrainStatusFilter) -> Self {
        Self {
            query: query.into(),
            status,
        }
    }

    pub fn apply<'a>(&self, trains: &'a [Train]) -> Vec<&'a Train> {
        filter_trains(trains, &self.query, self.status)
    }
}

/// Trains whose name, id or route contains `query` (case-insensitive) and
/// whose state passes `status`, keeping their order.
pub fn filter_trains<'a>(
    trains: &'a [Train],
    query: &str,
    status: TrainStatusFilter,
) -> Vec<&'a Train> {
    let needle = query.to_lowercase();

    trains
        .iter()
        .filter(|train| {
            let matches_search = train.name.to_lowercase().contains(&needle)
                || train.id.to_lowercase().contains(&needle)
                || train.route.to_lowercase().contains(&needle);
            matches_search && status.matches(train.status)
        })
        .collect()
}

// ETA is shown as wall-clock "HH:MM"
mod clock_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn ids(trains: &[&Train]) -> Vec<String> {
        trains.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn test_query_matches_name_case_insensitively() {
        let trains = seed::trains();
        let result = filter_trains(&trains, "bima", TrainStatusFilter::All);
        assert_eq!(ids(&result), vec!["KA-002"]);

        let result = filter_trains(&trains, "BIMA", TrainStatusFilter::All);
        assert_eq!(ids(&result), vec!["KA-002"]);
    }

    #[test]
    fn test_empty_query_with_status_filter() {
        let trains = seed::trains();
        let result = filter_trains(&trains, "", TrainStatusFilter::Only(TrainState::Delayed));
        assert_eq!(ids(&result), vec!["KA-002", "KA-004"]);
    }

    #[test]
    fn test_no_match_for_any_filter() {
        let trains = seed::trains();
        for filter in [
            TrainStatusFilter::All,
            TrainStatusFilter::Only(TrainState::OnTime),
            TrainStatusFilter::Only(TrainState::Delayed),
            TrainStatusFilter::Only(TrainState::Arrived),
        ] {
            assert!(filter_trains(&trains, "xyz", filter).is_empty());
        }
    }

    #[test]
    fn test_query_matches_id_and_route() {
        let trains = seed::trains();
        assert_eq!(ids(&filter_trains(&trains, "ka-003", TrainStatusFilter::All)), vec!["KA-003"]);
        assert_eq!(
            ids(&filter_trains(&trains, "malang", TrainStatusFilter::All)),
            vec!["KA-004"]
        );
        // Substring, not prefix
        assert_eq!(
            ids(&filter_trains(&trains, "surabaya", TrainStatusFilter::Only(TrainState::OnTime))),
            vec!["KA-001", "KA-005"]
        );
    }

    #[test]
    fn test_empty_query_and_all_returns_everything() {
        let trains = seed::trains();
        let filter = TrainFilter::default();
        assert_eq!(filter.apply(&trains).len(), trains.len());
    }

    #[test]
    fn test_parse_status_filter() {
        assert_eq!("all".parse::<TrainStatusFilter>(), Ok(TrainStatusFilter::All));
        assert_eq!(
            "on-time".parse::<TrainStatusFilter>(),
            Ok(TrainStatusFilter::Only(TrainState::OnTime))
        );
        assert!("late".parse::<TrainStatusFilter>().is_err());
        assert_eq!(TrainStatusFilter::Only(TrainState::Arrived).to_string(), "arrived");
    }

    #[test]
    fn test_train_serializes_eta_as_clock_time() {
        let trains = seed::trains();
        let json = serde_json::to_value(&trains[0]).unwrap();
        assert_eq!(json["eta"], "14:30");
        assert_eq!(json["status"], "on-time");

        let back: Train = serde_json::from_value(json).unwrap();
        assert_eq!(back, trains[0]);
    }
}
