//! Records kept by the persistence store besides the activity profile.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A request to join the early-access programme.
///
/// Append-only: once stored, a request is never changed or removed. The
/// timestamp is assigned by the store when the request is appended and is
/// serialized as an ISO-8601 string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EarlyAccessRequest {
    /// Name as entered by the user.
    pub name: String,
    /// Contact email as entered by the user.
    pub email: String,
    /// When the store accepted the request.
    pub timestamp: DateTime<Utc>,
}

/// A badge shown on the goals screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Achievement {
    /// Stable identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Whether the user has earned it.
    pub completed: bool,
    /// Day it was earned, if it was.
    pub date: Option<NaiveDate>,
}

impl Achievement {
    /// The achievements reported when none have been stored.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self {
                id: String::from("1"),
                title: String::from("Carbon Neutral"),
                completed: false,
                date: None,
            },
            Self {
                id: String::from("2"),
                title: String::from("Data Dieter"),
                completed: true,
                date: NaiveDate::from_ymd_opt(2026, 2, 1),
            },
        ]
    }
}
