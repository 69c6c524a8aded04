//! Raw event records as delivered by an event source.
//!
//! Field names follow the JSON contract of the acquisition side (camelCase),
//! and every timestamp is a decimal string of Unix epoch seconds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FightCalError, FightCalResult};

/// One upcoming event, exactly as the source reported it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    pub name: String,
    pub date: String,
    pub location: String,
    pub url: String,

    /// Bouts listed without a card split. Rendered first, with no header.
    #[serde(default)]
    pub fight_card: Vec<String>,
    #[serde(default)]
    pub main_card: Vec<String>,
    #[serde(default)]
    pub prelims: Vec<String>,
    #[serde(default)]
    pub early_prelims: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prelims_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub early_prelims_time: Option<String>,
}

impl RawEvent {
    /// Start of the event (main card).
    ///
    /// A `date` that is not numeric, or lies outside the range chrono can
    /// represent, is a defect of the source and is reported rather than
    /// replaced with a default.
    pub fn start_datetime(&self) -> FightCalResult<DateTime<Utc>> {
        self.date
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
            .ok_or_else(|| FightCalError::InvalidEventDate {
                url: self.url.clone(),
                value: self.date.clone(),
            })
    }

    /// Start of the event (main card) in epoch seconds.
    pub fn start_timestamp(&self) -> FightCalResult<i64> {
        self.start_datetime().map(|dt| dt.timestamp())
    }

    /// Prelims start in epoch seconds, if present and numeric.
    pub fn prelims_timestamp(&self) -> Option<i64> {
        parse_optional_timestamp(self.prelims_time.as_deref())
    }

    /// Early prelims start in epoch seconds, if present and numeric.
    pub fn early_prelims_timestamp(&self) -> Option<i64> {
        parse_optional_timestamp(self.early_prelims_time.as_deref())
    }
}

impl fmt::Display for RawEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Out-of-range values count as absent, like non-numeric ones.
fn parse_optional_timestamp(value: Option<&str>) -> Option<i64> {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|ts| DateTime::from_timestamp(*ts, 0).is_some())
}
