use std::fmt;

/// A relative-time label. `Display` renders the user-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeTime {
    JustNow,
    OneMinuteAgo,
    MinutesAgo(i64),
    OneHourAgo,
    HoursAgo(i64),
    Yesterday,
    DaysAgo(i64),
    WeeksAgo(i64),
    MonthsAgo(i64),
}

impl fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelativeTime::JustNow => f.write_str("just now"),
            RelativeTime::OneMinuteAgo => f.write_str("1 minute ago"),
            RelativeTime::MinutesAgo(n) => write!(f, "{n} minutes ago"),
            RelativeTime::OneHourAgo => f.write_str("1 hour ago"),
            RelativeTime::HoursAgo(n) => write!(f, "{n} hours ago"),
            RelativeTime::Yesterday => f.write_str("Yesterday"),
            RelativeTime::DaysAgo(n) => write!(f, "{n} days ago"),
            RelativeTime::WeeksAgo(n) => write!(f, "{n} weeks ago"),
            RelativeTime::MonthsAgo(n) => write!(f, "{n} months ago"),
        }
    }
}
