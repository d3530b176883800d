use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// `[from, to_exclusive)` in UTC, the shape storage queries expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HalfOpenRange {
    pub from: DateTime<Utc>,
    pub to_exclusive: DateTime<Utc>,
}

impl HalfOpenRange {
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.from <= instant && instant < self.to_exclusive
    }

    /// `2024-02-01T00:00:00.000Z`
    pub fn from_rfc3339(&self) -> String {
        self.from.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn to_exclusive_rfc3339(&self) -> String {
        self.to_exclusive
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
