//! Turns flat reading arrays into chart-ready datasets.
//!
//! No sorting, interpolation or gap filling: points keep backend order.

use api::{SensorKind, SensorReading};

use super::format::time_label;

/// Fixed palette for per-room datasets, cycled in order of first appearance.
pub const ROOM_PALETTE: [&str; 6] = [
    "#e4572e", "#1f77b4", "#2ca02c", "#f3a712", "#9467bd", "#17becf",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChartType {
    #[default]
    Line,
    Bar,
    Radar,
}

impl ChartType {
    pub const ALL: [ChartType; 3] = [ChartType::Line, ChartType::Bar, ChartType::Radar];

    pub fn key(self) -> &'static str {
        match self {
            ChartType::Line => "line",
            ChartType::Bar => "bar",
            ChartType::Radar => "radar",
        }
    }

    /// Unknown keys render as a line chart.
    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|chart| chart.key() == key)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grouping {
    /// One dataset for the panel's sensor kind.
    SingleKey,
    /// One dataset per room.
    ByRoom,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub color: &'static str,
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

impl Dataset {
    fn new(label: impl Into<String>, color: &'static str) -> Self {
        Self {
            label: label.into(),
            color,
            labels: Vec::new(),
            data: Vec::new(),
        }
    }

    fn push(&mut self, reading: &SensorReading, value: f64) {
        self.labels.push(time_label(reading.timestamp.as_deref()));
        self.data.push(value);
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
}

/// Value as it should be plotted: light state is coerced to 0/1.
fn plotted_value(reading: &SensorReading) -> Option<f64> {
    let value = reading.value?;
    if reading.kind.is_binary() {
        Some(if value != 0.0 { 1.0 } else { 0.0 })
    } else {
        Some(value)
    }
}

/// Single dataset for `kind`. `None` when no reading of that kind carries a value.
pub fn single_key(
    readings: &[SensorReading],
    kind: &SensorKind,
    label: &str,
    color: &'static str,
) -> Option<Dataset> {
    let mut dataset = Dataset::new(label, color);
    for reading in readings.iter().filter(|r| &r.kind == kind) {
        if let Some(value) = plotted_value(reading) {
            dataset.push(reading, value);
        }
    }
    (!dataset.is_empty()).then_some(dataset)
}

/// One dataset per room for readings of `kind` with a value, labelled by room.
pub fn grouped_by_room(readings: &[SensorReading], kind: &SensorKind) -> Vec<Dataset> {
    let mut datasets: Vec<Dataset> = Vec::new();
    for reading in readings.iter().filter(|r| &r.kind == kind) {
        let Some(value) = plotted_value(reading) else {
            continue;
        };
        let index = match datasets.iter().position(|d| d.label == reading.room) {
            Some(index) => index,
            None => {
                let color = ROOM_PALETTE[datasets.len() % ROOM_PALETTE.len()];
                datasets.push(Dataset::new(reading.room.clone(), color));
                datasets.len() - 1
            }
        };
        datasets[index].push(reading, value);
    }
    datasets
}

/// Build the datasets for one chart panel.
pub fn build(
    readings: &[SensorReading],
    kind: &SensorKind,
    grouping: Grouping,
    label: &str,
    color: &'static str,
) -> Vec<Dataset> {
    match grouping {
        Grouping::SingleKey => single_key(readings, kind, label, color).into_iter().collect(),
        Grouping::ByRoom => grouped_by_room(readings, kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(kind: SensorKind, room: &str, value: Option<f64>, ts: &str) -> SensorReading {
        SensorReading {
            sensor_id: 1,
            kind,
            room: room.into(),
            value,
            timestamp: Some(ts.into()),
        }
    }

    #[test]
    fn single_light_reading_groups_into_one_room() {
        let input = vec![reading(SensorKind::Light, "sala", Some(1.0), "T1")];
        let datasets = grouped_by_room(&input, &SensorKind::Light);
        assert_eq!(datasets.len(), 1);
        assert_eq!(datasets[0].label, "sala");
        assert_eq!(datasets[0].data, vec![1.0]);
        assert_eq!(datasets[0].labels, vec!["T1".to_string()]);
    }

    #[test]
    fn empty_input_yields_no_series() {
        for grouping in [Grouping::SingleKey, Grouping::ByRoom] {
            for kind in [
                SensorKind::Temperature,
                SensorKind::Light,
                SensorKind::Humidity,
                SensorKind::Vibration,
            ] {
                assert!(build(&[], &kind, grouping, "x", "#000").is_empty());
            }
        }
    }

    #[test]
    fn grouped_keeps_first_appearance_order_and_skips_nulls() {
        let input = vec![
            reading(SensorKind::Temperature, "quarto", Some(20.0), "2024-01-01T10:00:00Z"),
            reading(SensorKind::Temperature, "sala", None, "2024-01-01T10:00:00Z"),
            reading(SensorKind::Light, "sala", Some(1.0), "2024-01-01T10:00:00Z"),
            reading(SensorKind::Temperature, "sala", Some(23.5), "2024-01-01T10:05:00Z"),
            reading(SensorKind::Temperature, "quarto", Some(21.0), "2024-01-01T10:10:00Z"),
        ];
        let datasets = grouped_by_room(&input, &SensorKind::Temperature);
        let labels: Vec<&str> = datasets.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, ["quarto", "sala"]);
        assert_eq!(datasets[0].data, vec![20.0, 21.0]);
        assert_eq!(datasets[1].data, vec![23.5]);
        assert_eq!(datasets[1].labels, vec!["10:05:00".to_string()]);
        assert_ne!(datasets[0].color, datasets[1].color);
    }

    #[test]
    fn light_values_are_coerced_to_binary() {
        let input = vec![
            reading(SensorKind::Light, "cozinha", Some(7.0), "T1"),
            reading(SensorKind::Light, "cozinha", Some(0.0), "T2"),
        ];
        let datasets = grouped_by_room(&input, &SensorKind::Light);
        assert_eq!(datasets[0].data, vec![1.0, 0.0]);
    }

    #[test]
    fn single_key_uses_raw_values_in_backend_order() {
        let input = vec![
            reading(SensorKind::Humidity, "sala", Some(60.0), "2024-01-01T10:10:00Z"),
            reading(SensorKind::Temperature, "sala", Some(22.0), "2024-01-01T10:00:00Z"),
            reading(SensorKind::Humidity, "quarto", Some(55.5), "2024-01-01T09:00:00Z"),
        ];
        let dataset = single_key(&input, &SensorKind::Humidity, "Umidade", "blue").unwrap();
        assert_eq!(dataset.label, "Umidade");
        assert_eq!(dataset.data, vec![60.0, 55.5]);
        assert_eq!(dataset.labels, vec!["10:10:00", "09:00:00"]);
    }

    #[test]
    fn builder_does_not_mutate_input() {
        let input = vec![reading(SensorKind::Vibration, "sala", Some(0.4), "T1")];
        let before = input.clone();
        let _ = build(&input, &SensorKind::Vibration, Grouping::SingleKey, "v", "green");
        let _ = build(&input, &SensorKind::Vibration, Grouping::ByRoom, "v", "green");
        assert_eq!(input, before);
    }

    #[test]
    fn chart_type_keys() {
        assert_eq!(ChartType::from_key("radar"), ChartType::Radar);
        assert_eq!(ChartType::from_key("pie"), ChartType::Line);
    }
}
