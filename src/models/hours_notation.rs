use serde::{Deserialize, Serialize};

/// How decimal hours are shown to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoursNotation {
    #[default]
    HourMinute, // 1h30
    Decimal, // 1.50
}

impl HoursNotation {
    pub fn as_str(&self) -> &'static str {
        match self {
            HoursNotation::HourMinute => "hour_minute",
            HoursNotation::Decimal => "decimal",
        }
    }

    /// Accepts the config spelling as well as the short `--notation` codes.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "hour_minute" | "hm" | "h" => Some(HoursNotation::HourMinute),
            "decimal" | "dec" | "d" => Some(HoursNotation::Decimal),
            _ => None,
        }
    }
}
