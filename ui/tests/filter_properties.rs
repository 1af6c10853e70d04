use api::{SensorKind, SensorReading};
use proptest::prelude::*;
use time::{macros::datetime, Duration, OffsetDateTime};
use ui::core::{
    controls::{ControlState, IotConfig},
    series::{self, Grouping},
    time_range::{filter_readings, TimeRange},
};

const NOW: OffsetDateTime = datetime!(2024-06-10 12:00 UTC);

fn kind_strategy() -> impl Strategy<Value = SensorKind> {
    prop_oneof![
        Just(SensorKind::Temperature),
        Just(SensorKind::Light),
        Just(SensorKind::Humidity),
        Just(SensorKind::Vibration),
    ]
}

fn timestamp_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        // Up to ~60 days back, a little into the future.
        8 => (-3_600_i64..5_184_000).prop_map(|secs| {
            let ts = NOW - Duration::seconds(secs);
            Some(format!(
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                ts.year(),
                u8::from(ts.month()),
                ts.day(),
                ts.hour(),
                ts.minute(),
                ts.second()
            ))
        }),
        1 => Just(Some("not a timestamp".to_string())),
        1 => Just(None),
    ]
}

fn reading_strategy() -> impl Strategy<Value = SensorReading> {
    (
        kind_strategy(),
        prop::sample::select(vec!["quarto", "sala", "cozinha", "banheiro"]),
        prop::option::of(-10.0_f64..100.0),
        timestamp_strategy(),
    )
        .prop_map(|(kind, room, value, timestamp)| SensorReading {
            sensor_id: 1,
            kind,
            room: room.to_string(),
            value,
            timestamp,
        })
}

fn is_subsequence(inner: &[SensorReading], outer: &[SensorReading]) -> bool {
    let mut rest = outer.iter();
    inner.iter().all(|item| rest.any(|candidate| candidate == item))
}

proptest! {
    #[test]
    fn ranges_nest(readings in prop::collection::vec(reading_strategy(), 0..40)) {
        let results: Vec<Vec<SensorReading>> = TimeRange::ALL
            .iter()
            .map(|range| filter_readings(NOW, *range, &readings))
            .collect();
        for pair in results.windows(2) {
            prop_assert!(pair[0].len() <= pair[1].len());
            prop_assert!(is_subsequence(&pair[0], &pair[1]));
        }
        prop_assert_eq!(results.last().map(Vec::len), Some(readings.len()));
    }

    #[test]
    fn temperature_always_clamped(room_index in 0_usize..2, value in any::<f64>()) {
        let config = IotConfig::default();
        let mut state = ControlState::new(&config);
        let room = &config.setpoint_rooms[room_index];
        let stored = state.change_temperature(room, value);
        prop_assert!(matches!(stored, Some(v) if (15.0..=29.0).contains(&v)));
    }

    #[test]
    fn in_range_temperatures_are_stored_exactly(value in 15.0_f64..=29.0) {
        let config = IotConfig::default();
        let mut state = ControlState::new(&config);
        prop_assert_eq!(state.change_temperature("sala", value), Some(value));
    }

    #[test]
    fn double_toggle_is_identity(room_index in 0_usize..4, first in any::<bool>()) {
        let config = IotConfig::default();
        let mut state = ControlState::new(&config);
        let room = &config.light_rooms[room_index];
        if first {
            state.toggle_light(room);
        }
        let before = state.light(room);
        state.toggle_light(room);
        state.toggle_light(room);
        prop_assert_eq!(state.light(room), before);
    }

    #[test]
    fn series_never_emit_empty_datasets(readings in prop::collection::vec(reading_strategy(), 0..30)) {
        for kind in [SensorKind::Temperature, SensorKind::Light, SensorKind::Humidity, SensorKind::Vibration] {
            for grouping in [Grouping::SingleKey, Grouping::ByRoom] {
                let datasets = series::build(&readings, &kind, grouping, "label", "#000");
                prop_assert!(datasets.iter().all(|d| !d.is_empty() && d.labels.len() == d.data.len()));
            }
        }
    }
}

#[test]
fn empty_input_has_no_series() {
    for grouping in [Grouping::SingleKey, Grouping::ByRoom] {
        assert!(series::build(&[], &SensorKind::Light, grouping, "l", "#000").is_empty());
    }
}
