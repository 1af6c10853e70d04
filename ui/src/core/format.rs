//! Formatting helpers for presenting readings.

use api::SensorKind;
use time::macros::format_description;

use super::time_range::parse_timestamp;

/// Clock label for a chart x-axis tick (`HH:MM:SS`). Falls back to the raw string.
pub fn time_label(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return "—".to_string();
    };
    parse_timestamp(raw)
        .and_then(|ts| {
            ts.format(format_description!("[hour]:[minute]:[second]"))
                .ok()
        })
        .unwrap_or_else(|| raw.to_string())
}

pub fn unit(kind: &SensorKind) -> &'static str {
    match kind {
        SensorKind::Temperature => "°C",
        SensorKind::Humidity => "%",
        _ => "",
    }
}

pub fn format_value(kind: &SensorKind, value: f64) -> String {
    let unit = unit(kind);
    if value.fract() == 0.0 {
        format!("{value:.0}{unit}")
    } else {
        format!("{value:.1}{unit}")
    }
}

/// `"quarto"` → `"Quarto"`.
pub fn room_title(room: &str) -> String {
    let mut chars = room.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
