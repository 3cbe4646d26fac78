//! Relative-time labels for ISO-8601 timestamps.
//!
//! Everything here is a pure function of the input, the reference instant and
//! [`FormatOptions`]. Only [`format_now`] reads the system clock.

pub mod label;
pub mod parse;

pub use label::RelativeTime;
pub use parse::parse_timestamp;

use chrono::{DateTime, Duration, FixedOffset, Offset, Utc};
use thiserror::Error;

/// Upper bound (exclusive) on the age, in days, that still gets a label.
pub const DEFAULT_MAX_AGE_DAYS: u32 = 300;

/// Shorter horizon that stops labelling after a month.
pub const SHORT_MAX_AGE_DAYS: u32 = 31;

const MS_PER_MINUTE: i64 = 60 * 1_000;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub max_age_days: u32,
    /// Offset for timestamps that carry no zone of their own.
    pub naive_offset: FixedOffset,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            max_age_days: DEFAULT_MAX_AGE_DAYS,
            naive_offset: Utc.fix(),
        }
    }
}

impl FormatOptions {
    pub fn with_max_age_days(mut self, days: u32) -> Self {
        self.max_age_days = days;
        self
    }

    pub fn with_naive_offset(mut self, offset: FixedOffset) -> Self {
        self.naive_offset = offset;
        self
    }
}

/// Why a timestamp produced no label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Skip {
    #[error("empty timestamp")]
    Empty,

    #[error("unrecognized timestamp \"{input}\"")]
    Unparsable { input: String },

    #[error("timestamp is in the future")]
    Future,

    #[error("timestamp is {days} days old (limit {max_days})")]
    TooOld { days: i64, max_days: u32 },
}

/// Format `input` relative to `now`, or `None` when it should be left alone.
pub fn format(input: &str, now: DateTime<Utc>, options: &FormatOptions) -> Option<String> {
    classify(input, now, options)
        .ok()
        .map(|label| label.to_string())
}

/// [`format`] against the system clock.
pub fn format_now(input: &str, options: &FormatOptions) -> Option<String> {
    format(input, Utc::now(), options)
}

/// Like [`format`], but reports why no label was produced.
pub fn classify(
    input: &str,
    now: DateTime<Utc>,
    options: &FormatOptions,
) -> Result<RelativeTime, Skip> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Skip::Empty);
    }

    let then = parse_timestamp(trimmed, options.naive_offset).ok_or_else(|| Skip::Unparsable {
        input: trimmed.to_string(),
    })?;

    relative_time(then, now, options.max_age_days)
}

/// Pick the label for `then` as seen from `now`.
///
/// Branches are checked in order, so an exact boundary (60s, 3600s, 13 days,
/// ...) lands in the later branch.
pub fn relative_time(
    then: DateTime<Utc>,
    now: DateTime<Utc>,
    max_age_days: u32,
) -> Result<RelativeTime, Skip> {
    let elapsed = now.signed_duration_since(then);
    if elapsed < Duration::zero() {
        return Err(Skip::Future);
    }

    // Non-negative, so truncating to milliseconds is a floor.
    let elapsed_ms = elapsed.num_milliseconds();
    let day_diff = elapsed_ms / MS_PER_DAY;

    if day_diff >= i64::from(max_age_days) {
        return Err(Skip::TooOld {
            days: day_diff,
            max_days: max_age_days,
        });
    }

    let label = if day_diff == 0 {
        if elapsed_ms < MS_PER_MINUTE {
            RelativeTime::JustNow
        } else if elapsed_ms < 2 * MS_PER_MINUTE {
            RelativeTime::OneMinuteAgo
        } else if elapsed_ms < MS_PER_HOUR {
            RelativeTime::MinutesAgo(elapsed_ms / MS_PER_MINUTE)
        } else if elapsed_ms < 2 * MS_PER_HOUR {
            RelativeTime::OneHourAgo
        } else {
            RelativeTime::HoursAgo(elapsed_ms / MS_PER_HOUR)
        }
    } else if day_diff == 1 {
        RelativeTime::Yesterday
    } else if day_diff < 13 {
        RelativeTime::DaysAgo(day_diff)
    } else if day_diff < 45 {
        RelativeTime::WeeksAgo(ceil_div(day_diff, 7))
    } else {
        RelativeTime::MonthsAgo(ceil_div(day_diff, 30))
    };

    Ok(label)
}

fn ceil_div(n: i64, d: i64) -> i64 {
    (n + d - 1) / d
}
