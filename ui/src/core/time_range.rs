//! Time-window filtering for sensor readings.
//!
//! Windows are fixed durations ending at the `now` the caller supplies. The
//! lower bound is inclusive and readings stamped in the future always pass.
//! A reading whose timestamp cannot be parsed only passes [`TimeRange::AllData`].

use api::SensorReading;
use time::{
    format_description::well_known::Rfc3339, macros::format_description, Duration, OffsetDateTime,
    PrimitiveDateTime,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeRange {
    #[default]
    LastHour,
    Last24Hours,
    LastWeek,
    Last30Days,
    AllData,
}

impl TimeRange {
    pub const ALL: [TimeRange; 5] = [
        TimeRange::LastHour,
        TimeRange::Last24Hours,
        TimeRange::LastWeek,
        TimeRange::Last30Days,
        TimeRange::AllData,
    ];

    /// Picker key, as used by the option values in the graph screen.
    pub fn key(self) -> &'static str {
        match self {
            TimeRange::LastHour => "lastHour",
            TimeRange::Last24Hours => "last24Hours",
            TimeRange::LastWeek => "lastWeek",
            TimeRange::Last30Days => "last30Days",
            TimeRange::AllData => "allData",
        }
    }

    /// Unknown keys fall through to [`TimeRange::AllData`].
    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|range| range.key() == key)
            .unwrap_or(TimeRange::AllData)
    }

    pub fn window(self) -> Option<Duration> {
        match self {
            TimeRange::LastHour => Some(Duration::hours(1)),
            TimeRange::Last24Hours => Some(Duration::hours(24)),
            TimeRange::LastWeek => Some(Duration::days(7)),
            TimeRange::Last30Days => Some(Duration::days(30)),
            TimeRange::AllData => None,
        }
    }

    pub fn includes(self, now: OffsetDateTime, timestamp: Option<OffsetDateTime>) -> bool {
        match (self.window(), timestamp) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(window), Some(ts)) => ts >= now - window,
        }
    }
}

/// Parse a backend timestamp. RFC 3339 first; offset-less ISO strings are read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(ts);
    }

    let whole_seconds = raw.split('.').next().unwrap_or(raw).replacen(' ', "T", 1);
    PrimitiveDateTime::parse(
        &whole_seconds,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    )
    .ok()
    .map(PrimitiveDateTime::assume_utc)
}

pub fn includes_reading(now: OffsetDateTime, range: TimeRange, reading: &SensorReading) -> bool {
    let ts = reading.timestamp.as_deref().and_then(parse_timestamp);
    range.includes(now, ts)
}

/// Readings inside `range`, in their original order. The input is left untouched.
pub fn filter_readings(
    now: OffsetDateTime,
    range: TimeRange,
    readings: &[SensorReading],
) -> Vec<SensorReading> {
    readings
        .iter()
        .filter(|reading| includes_reading(now, range, reading))
        .cloned()
        .collect()
}
