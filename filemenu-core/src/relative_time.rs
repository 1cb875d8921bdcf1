use serde::Serialize;
use time::OffsetDateTime;
use time::macros::format_description;

const SECOND_MS: u64 = 1_000;
const MINUTE_MS: u64 = 60 * SECOND_MS;
const HOUR_MS: u64 = 60 * MINUTE_MS;
const DAY_MS: u64 = 24 * HOUR_MS;
const WEEK_MS: u64 = 7 * DAY_MS;

pub trait Clock {
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        i64::try_from(millis).unwrap_or(i64::MAX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

pub trait RelativeTimeFormatter {
    /// Describes `instant_ms` relative to `now_ms`. With `show_future` off,
    /// instants ahead of `now_ms` are printed as an absolute date instead.
    fn format(&self, instant_ms: i64, now_ms: i64, show_future: bool) -> String;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelativeStyle {
    #[default]
    Long,
    Short,
}

impl RelativeStyle {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "long" => Some(Self::Long),
            "short" => Some(Self::Short),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishRelativeTime {
    pub style: RelativeStyle,
}

impl EnglishRelativeTime {
    pub fn new(style: RelativeStyle) -> Self {
        Self { style }
    }

    fn unit_label(&self, unit: Unit, count: u64) -> &'static str {
        match (self.style, unit, count == 1) {
            (RelativeStyle::Short, Unit::Second, _) => "sec",
            (RelativeStyle::Short, Unit::Minute, _) => "min",
            (RelativeStyle::Short, Unit::Hour, _) => "h",
            (RelativeStyle::Short, Unit::Day, _) => "d",
            (RelativeStyle::Long, Unit::Second, true) => "second",
            (RelativeStyle::Long, Unit::Second, false) => "seconds",
            (RelativeStyle::Long, Unit::Minute, true) => "minute",
            (RelativeStyle::Long, Unit::Minute, false) => "minutes",
            (RelativeStyle::Long, Unit::Hour, true) => "hour",
            (RelativeStyle::Long, Unit::Hour, false) => "hours",
            (RelativeStyle::Long, Unit::Day, true) => "day",
            (RelativeStyle::Long, Unit::Day, false) => "days",
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Unit {
    Second,
    Minute,
    Hour,
    Day,
}

impl RelativeTimeFormatter for EnglishRelativeTime {
    fn format(&self, instant_ms: i64, now_ms: i64, show_future: bool) -> String {
        let delta = i128::from(instant_ms) - i128::from(now_ms);
        if delta > 0 && !show_future {
            return format_absolute(instant_ms);
        }
        if delta == 0 {
            return "just now".to_string();
        }
        let magnitude = delta.unsigned_abs();
        if delta < 0 && magnitude < u128::from(MINUTE_MS) {
            return "seconds ago".to_string();
        }
        if magnitude >= u128::from(WEEK_MS) {
            return format_absolute(instant_ms);
        }

        // below a week, so it fits in u64
        let magnitude = magnitude as u64;
        let (count, unit) = if magnitude < MINUTE_MS {
            (magnitude / SECOND_MS, Unit::Second)
        } else if magnitude < HOUR_MS {
            (magnitude / MINUTE_MS, Unit::Minute)
        } else if magnitude < DAY_MS {
            (magnitude / HOUR_MS, Unit::Hour)
        } else {
            (magnitude / DAY_MS, Unit::Day)
        };
        let label = self.unit_label(unit, count);
        if delta > 0 {
            format!("in {count} {label}")
        } else {
            format!("{count} {label} ago")
        }
    }
}

/// UTC date and time, or the raw millisecond value when out of range.
pub fn format_absolute(instant_ms: i64) -> String {
    let format = format_description!(
        "[month repr:short] [day padding:none], [year], [hour]:[minute]"
    );
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(instant_ms) * 1_000_000)
        .ok()
        .and_then(|moment| moment.format(format).ok())
        .unwrap_or_else(|| format!("{instant_ms} ms"))
}
