//! Room control state for the IoT screen: temperature setpoints, light
//! switches and the cosmetic occupancy indicators.
//!
//! The same [`ClampRange`] bounds both user edits and values hydrated from
//! the backend.

use std::time::Duration;

use api::{SensorKind, SensorReading};
use rand::Rng;

/// Highest value the occupancy indicator can roll.
pub const OCCUPANCY_MAX: u8 = 10;

/// Inclusive setpoint bounds. Values keep their fraction; only the ends move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampRange {
    pub min: f64,
    pub max: f64,
}

impl ClampRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// NaN lands on `min`.
    pub fn clamp(self, value: f64) -> f64 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }
}

impl Default for ClampRange {
    fn default() -> Self {
        Self::new(15.0, 29.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IotConfig {
    pub setpoint_rooms: Vec<String>,
    pub light_rooms: Vec<String>,
    pub clamp: ClampRange,
    pub occupancy_interval: Duration,
    /// Rolls at or above this mark the room as occupied.
    pub occupancy_threshold: u8,
}

impl Default for IotConfig {
    fn default() -> Self {
        Self {
            setpoint_rooms: vec!["quarto".into(), "sala".into()],
            light_rooms: vec![
                "quarto".into(),
                "sala".into(),
                "cozinha".into(),
                "banheiro".into(),
            ],
            clamp: ClampRange::default(),
            occupancy_interval: Duration::from_secs(15),
            occupancy_threshold: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Setpoint {
    pub room: String,
    /// 0 until the user or the backend sets it.
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LightSwitch {
    pub room: String,
    pub on: bool,
    pub occupancy: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ControlState {
    clamp: ClampRange,
    occupancy_threshold: u8,
    setpoints: Vec<Setpoint>,
    lights: Vec<LightSwitch>,
}

impl ControlState {
    pub fn new(config: &IotConfig) -> Self {
        Self {
            clamp: config.clamp,
            occupancy_threshold: config.occupancy_threshold,
            setpoints: config
                .setpoint_rooms
                .iter()
                .map(|room| Setpoint {
                    room: room.clone(),
                    value: 0.0,
                })
                .collect(),
            lights: config
                .light_rooms
                .iter()
                .map(|room| LightSwitch {
                    room: room.clone(),
                    on: false,
                    occupancy: 0,
                })
                .collect(),
        }
    }

    pub fn setpoints(&self) -> &[Setpoint] {
        &self.setpoints
    }

    pub fn lights(&self) -> &[LightSwitch] {
        &self.lights
    }

    pub fn setpoint(&self, room: &str) -> Option<f64> {
        self.setpoints
            .iter()
            .find(|s| s.room == room)
            .map(|s| s.value)
    }

    pub fn light(&self, room: &str) -> Option<bool> {
        self.lights.iter().find(|l| l.room == room).map(|l| l.on)
    }

    /// Store `value` clamped into range. Rooms without a setpoint are ignored.
    pub fn change_temperature(&mut self, room: &str, value: f64) -> Option<f64> {
        let clamp = self.clamp;
        let setpoint = self.setpoints.iter_mut().find(|s| s.room == room)?;
        setpoint.value = clamp.clamp(value);
        Some(setpoint.value)
    }

    pub fn step_temperature(&mut self, room: &str, delta: f64) -> Option<f64> {
        let current = self.setpoint(room)?;
        self.change_temperature(room, current + delta)
    }

    /// Flip a room's light, returning the new state.
    pub fn toggle_light(&mut self, room: &str) -> Option<bool> {
        let light = self.lights.iter_mut().find(|l| l.room == room)?;
        light.on = !light.on;
        Some(light.on)
    }

    pub fn is_occupied(&self, room: &str) -> bool {
        self.lights
            .iter()
            .find(|l| l.room == room)
            .is_some_and(|l| l.occupancy >= self.occupancy_threshold)
    }

    /// Reroll every room's decorative occupancy number in `0..=OCCUPANCY_MAX`.
    pub fn shuffle_occupancy<R: Rng>(&mut self, rng: &mut R) {
        for light in &mut self.lights {
            light.occupancy = rng.gen_range(0..=OCCUPANCY_MAX);
        }
    }

    /// Rebuild setpoints and lights from a fetched feed. Rooms the feed does not
    /// mention reset to 0 / off; later readings win over earlier ones.
    pub fn hydrate(&mut self, readings: &[SensorReading]) {
        for setpoint in &mut self.setpoints {
            setpoint.value = 0.0;
        }
        for light in &mut self.lights {
            light.on = false;
        }

        for reading in readings {
            let Some(value) = reading.value else {
                continue;
            };
            match reading.kind {
                SensorKind::Temperature => {
                    if let Some(setpoint) =
                        self.setpoints.iter_mut().find(|s| s.room == reading.room)
                    {
                        setpoint.value = self.clamp.clamp(value);
                    }
                }
                SensorKind::Light => {
                    if let Some(light) = self.lights.iter_mut().find(|l| l.room == reading.room) {
                        light.on = value == 1.0;
                    }
                }
                _ => {}
            }
        }
    }

    /// The "send data" batch: one temperature row per setpoint room, then one
    /// light row per light room.
    pub fn outgoing_batch(&self) -> Vec<SensorReading> {
        let temperatures = self.setpoints.iter().map(|s| {
            SensorReading::new(
                sensor_id_for(&s.room),
                SensorKind::Temperature,
                s.room.clone(),
                s.value,
            )
        });
        let lights = self.lights.iter().map(|l| {
            SensorReading::new(
                sensor_id_for(&l.room),
                SensorKind::Light,
                l.room.clone(),
                if l.on { 1.0 } else { 0.0 },
            )
        });
        temperatures.chain(lights).collect()
    }
}

/// Backend sensor ids: the bedroom is sensor 1, every other room reports as 2.
pub fn sensor_id_for(room: &str) -> i64 {
    if room == "quarto" {
        1
    } else {
        2
    }
}
