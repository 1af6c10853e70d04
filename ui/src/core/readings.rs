//! Screen-held state for fetched readings.

use api::SensorReading;
use tracing::{info, warn};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadingsState {
    pub readings: Vec<SensorReading>,
    pub error: Option<String>,
    /// At least one fetch has succeeded.
    pub loaded: bool,
}

impl ReadingsState {
    /// Fold a fetch outcome into the state. A payload of the wrong shape is
    /// logged and dropped so the previous readings stay on screen. Returns
    /// whether anything changed.
    pub fn apply(
        &mut self,
        outcome: api::Result<Vec<SensorReading>>,
        describe: impl FnOnce(&api::Error) -> String,
    ) -> bool {
        match outcome {
            Ok(readings) => {
                info!(count = readings.len(), "sensor readings refreshed");
                self.readings = readings;
                self.error = None;
                self.loaded = true;
                true
            }
            Err(err @ api::Error::UnexpectedShape { .. }) => {
                warn!(%err, kept = self.readings.len(), "ignoring malformed sensor payload");
                false
            }
            Err(err) => {
                self.error = Some(describe(&err));
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::SensorKind;
    use std::fmt;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::{Layer, Registry};

    /// Records `(level, message)` for every event.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<(Level, String)>>>);

    struct MessageField<'a>(&'a mut String);

    impl Visit for MessageField<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if field.name() == "message" {
                *self.0 = format!("{value:?}");
            }
        }
    }

    impl<S: Subscriber> Layer<S> for Captured {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut message = String::new();
            event.record(&mut MessageField(&mut message));
            self.0
                .lock()
                .unwrap()
                .push((*event.metadata().level(), message));
        }
    }

    fn sample() -> Vec<SensorReading> {
        vec![
            SensorReading::new(1, SensorKind::Temperature, "quarto", 21.0)
                .with_timestamp("2024-06-10T11:00:00Z"),
        ]
    }

    #[test]
    fn success_replaces_readings() {
        let mut state = ReadingsState {
            error: Some("old".into()),
            ..Default::default()
        };
        assert!(state.apply(Ok(sample()), |_| unreachable!()));
        assert_eq!(state.readings, sample());
        assert!(state.loaded);
        assert_eq!(state.error, None);
    }

    #[test]
    fn malformed_payload_keeps_previous_state() {
        let mut state = ReadingsState::default();
        state.apply(Ok(sample()), |_| unreachable!());
        let before = state.clone();

        let changed = state.apply(
            Err(api::Error::UnexpectedShape {
                expected: "array",
                found: "object",
            }),
            |_| "should not be used".into(),
        );

        assert!(!changed);
        assert_eq!(state, before);
    }

    #[test]
    fn malformed_payload_is_logged_as_a_warning() {
        let captured = Captured::default();
        let subscriber = Registry::default().with(captured.clone());

        let changed = tracing::subscriber::with_default(subscriber, || {
            let mut state = ReadingsState::default();
            state.apply(Ok(sample()), |_| unreachable!());
            state.apply(
                Err(api::Error::UnexpectedShape {
                    expected: "array",
                    found: "string",
                }),
                |_| "should not be used".into(),
            )
        });

        assert!(!changed);
        let events = captured.0.lock().unwrap();
        let warnings: Vec<&String> = events
            .iter()
            .filter(|(level, _)| *level == Level::WARN)
            .map(|(_, message)| message)
            .collect();
        assert_eq!(warnings, [&"ignoring malformed sensor payload".to_string()]);
    }

    #[test]
    fn other_failures_surface_a_message_and_keep_data() {
        let mut state = ReadingsState::default();
        state.apply(Ok(sample()), |_| unreachable!());
        state.apply(
            Err(api::Error::Rejected {
                status: 401,
                message: None,
            }),
            |_| "Unable to load readings".into(),
        );
        assert_eq!(state.error.as_deref(), Some("Unable to load readings"));
        assert_eq!(state.readings, sample());
    }
}
