use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, Offset, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimezoneError {
    #[error("Invalid timezone \"{input}\" (expected utc, local or an offset like +05:30)")]
    Invalid { input: String },
}

/// How timestamps without an explicit zone are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NaiveTimezone {
    /// Treat them as UTC.
    #[default]
    Utc,
    /// Treat them as wall-clock time in the system's local zone.
    Local,
    Fixed(FixedOffset),
}

impl NaiveTimezone {
    /// Resolve to a concrete offset. `Local` uses the system offset in effect at `now`.
    pub fn resolve(self, now: DateTime<Utc>) -> FixedOffset {
        match self {
            NaiveTimezone::Utc => Utc.fix(),
            NaiveTimezone::Local => now.with_timezone(&Local).offset().fix(),
            NaiveTimezone::Fixed(offset) => offset,
        }
    }
}

impl FromStr for NaiveTimezone {
    type Err = TimezoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(NaiveTimezone::Utc);
        }
        if trimmed.eq_ignore_ascii_case("local") {
            return Ok(NaiveTimezone::Local);
        }
        if trimmed.starts_with(['+', '-'])
            && let Ok(offset) = trimmed.parse::<FixedOffset>()
        {
            return Ok(NaiveTimezone::Fixed(offset));
        }
        Err(TimezoneError::Invalid {
            input: trimmed.to_string(),
        })
    }
}

impl TryFrom<String> for NaiveTimezone {
    type Error = TimezoneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for NaiveTimezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NaiveTimezone::Utc => f.write_str("utc"),
            NaiveTimezone::Local => f.write_str("local"),
            NaiveTimezone::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

impl From<NaiveTimezone> for String {
    fn from(tz: NaiveTimezone) -> Self {
        tz.to_string()
    }
}

/// Parse a reference instant given as RFC 3339.
pub fn parse_reference_time(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
