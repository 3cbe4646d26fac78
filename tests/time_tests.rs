use chrono::{DateTime, Duration, SecondsFormat, Utc};
use prettydate::pretty::{FormatOptions, SHORT_MAX_AGE_DAYS, format, format_now};

fn now() -> DateTime<Utc> {
    "2026-03-14T12:00:00Z".parse().unwrap()
}

fn ago(elapsed: Duration) -> Option<String> {
    let stamp = (now() - elapsed).to_rfc3339_opts(SecondsFormat::Millis, true);
    format(&stamp, now(), &FormatOptions::default())
}

fn label(elapsed: Duration) -> String {
    ago(elapsed).expect("expected a label")
}

#[test]
fn test_empty_input() {
    assert_eq!(format("", now(), &FormatOptions::default()), None);
    assert_eq!(format("   ", now(), &FormatOptions::default()), None);
}

#[test]
fn test_malformed_input() {
    let options = FormatOptions::default();
    for input in ["yesterday", "2026/03/14", "2026-13-01", "2026-03-14T25:00:00", "not a date"] {
        assert_eq!(format(input, now(), &options), None, "input {input:?}");
    }
}

#[test]
fn test_just_now() {
    assert_eq!(label(Duration::zero()), "just now");
    assert_eq!(label(Duration::seconds(30)), "just now");
    assert_eq!(label(Duration::milliseconds(59_999)), "just now");
}

#[test]
fn test_one_minute_ago() {
    assert_eq!(label(Duration::seconds(60)), "1 minute ago");
    assert_eq!(label(Duration::seconds(90)), "1 minute ago");
    assert_eq!(label(Duration::seconds(119)), "1 minute ago");
}

#[test]
fn test_minutes_ago() {
    assert_eq!(label(Duration::seconds(120)), "2 minutes ago");
    assert_eq!(label(Duration::minutes(45)), "45 minutes ago");
    assert_eq!(label(Duration::seconds(3599)), "59 minutes ago");
}

#[test]
fn test_one_hour_ago() {
    assert_eq!(label(Duration::seconds(3600)), "1 hour ago");
    assert_eq!(label(Duration::seconds(7199)), "1 hour ago");
}

#[test]
fn test_hours_ago() {
    assert_eq!(label(Duration::seconds(7200)), "2 hours ago");
    assert_eq!(label(Duration::seconds(86_399)), "23 hours ago");
}

#[test]
fn test_yesterday() {
    assert_eq!(label(Duration::seconds(86_400)), "Yesterday");
    assert_eq!(label(Duration::hours(47)), "Yesterday");
}

#[test]
fn test_days_ago() {
    assert_eq!(label(Duration::days(2)), "2 days ago");
    assert_eq!(label(Duration::days(10)), "10 days ago");
    assert_eq!(label(Duration::days(12)), "12 days ago");
}

#[test]
fn test_weeks_ago() {
    assert_eq!(label(Duration::days(13)), "2 weeks ago");
    assert_eq!(label(Duration::days(20)), "3 weeks ago");
    assert_eq!(label(Duration::days(44)), "7 weeks ago");
}

#[test]
fn test_months_ago() {
    assert_eq!(label(Duration::days(45)), "2 months ago");
    assert_eq!(label(Duration::days(60)), "2 months ago");
    assert_eq!(label(Duration::days(61)), "3 months ago");
    assert_eq!(label(Duration::days(299)), "10 months ago");
}

#[test]
fn test_forty_days_is_weeks_not_months() {
    // 40 < 45, so the weeks branch wins: ceil(40 / 7) = 6.
    assert_eq!(label(Duration::days(40)), "6 weeks ago");
}

#[test]
fn test_beyond_default_bound() {
    assert_eq!(ago(Duration::days(300)), None);
    assert_eq!(ago(Duration::days(1000)), None);
}

#[test]
fn test_future_timestamp() {
    assert_eq!(ago(Duration::hours(-5)), None);
    assert_eq!(ago(Duration::milliseconds(-500)), None);
}

#[test]
fn test_short_bound() {
    let options = FormatOptions::default().with_max_age_days(SHORT_MAX_AGE_DAYS);
    let at = |days: i64| {
        let stamp = (now() - Duration::days(days)).to_rfc3339_opts(SecondsFormat::Secs, true);
        format(&stamp, now(), &options)
    };
    assert_eq!(at(30).as_deref(), Some("5 weeks ago"));
    assert_eq!(at(31), None);
    assert_eq!(at(45), None);
}

#[test]
fn test_surrounding_whitespace_is_ignored() {
    assert_eq!(
        format(" 2026-03-14T11:00:00Z\n", now(), &FormatOptions::default()).as_deref(),
        Some("1 hour ago")
    );
}

#[test]
fn test_repeated_calls_agree() {
    let options = FormatOptions::default();
    let first = format("2026-03-01T08:30:00Z", now(), &options);
    let second = format("2026-03-01T08:30:00Z", now(), &options);
    assert_eq!(first, second);
    assert_eq!(first.as_deref(), Some("2 weeks ago"));
}

#[test]
fn test_format_now_uses_system_clock() {
    let stamp = (Utc::now() - Duration::seconds(30)).to_rfc3339();
    assert_eq!(
        format_now(&stamp, &FormatOptions::default()).as_deref(),
        Some("just now")
    );
}
