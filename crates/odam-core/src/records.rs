//! Persisted record shapes.
//!
//! Field names follow the JSON layout stored under the `odam-*` keys, so
//! records written by earlier versions of the site load unchanged. Missing
//! fields fall back to their zero values.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Format of `lastVisit`: a calendar date such as `Mon Oct 19 2026`.
pub const VISIT_DATE_FORMAT: &str = "%a %b %d %Y";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsRecord {
    pub visits: u64,
    /// Cumulative milliseconds across sessions.
    pub time_spent: u64,
    /// Deepest scroll reached, 0..=100. Out-of-range stored values are clamped.
    #[serde(deserialize_with = "clamped_percent")]
    pub scroll_depth: u8,
    pub clicks: u64,
    pub last_visit: Option<String>,
    pub projects_viewed: u64,
    pub services_explored: u64,
}

impl StatsRecord {
    pub fn minutes_spent(&self) -> u64 {
        rounded_div(self.time_spent, crate::constants::MS_PER_MINUTE)
    }
}

/// Reads any JSON value as a percentage so one bad field does not discard the
/// rest of the record. Non-numeric values read as 0.
fn clamped_percent<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_f64()
        .filter(|v| v.is_finite())
        .map_or(0, |v| v.round().clamp(0.0, 100.0) as u8))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    Like,
    Dislike,
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vote::Like => f.write_str("like"),
            Vote::Dislike => f.write_str("dislike"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RatingRecord {
    pub likes: u64,
    pub dislikes: u64,
    /// `None` serializes as `null`: no current vote.
    pub user_vote: Option<Vote>,
    pub total_votes: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub comment: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: String,
    pub rating: Option<Vote>,
}

impl FeedbackEntry {
    pub fn new(comment: impl Into<String>, timestamp: DateTime<Utc>, rating: Option<Vote>) -> Self {
        Self {
            comment: comment.into(),
            timestamp,
            kind: "feedback".to_string(),
            rating,
        }
    }
}

/// Snapshot returned by `export_data`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSnapshot {
    pub stats: StatsRecord,
    pub rating: RatingRecord,
    pub export_date: DateTime<Utc>,
}

#[inline]
pub fn visit_date_string(date: NaiveDate) -> String {
    date.format(VISIT_DATE_FORMAT).to_string()
}

/// Integer division rounding halves up, matching how the site rounds minutes.
#[inline]
pub(crate) fn rounded_div(numerator: u64, denominator: u64) -> u64 {
    numerator.saturating_add(denominator / 2) / denominator
}
