//! Wire models for the backend's JSON bodies.
//!
//! Field names on the wire are Portuguese (`tipo_sensor`, `ambiente`, `valor`);
//! the Rust side uses English names and `serde` renames.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Sensor category tag (`tipo_sensor`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SensorKind {
    Temperature,
    Light,
    Humidity,
    Vibration,
    /// Tags this client does not know about are carried through untouched.
    Other(String),
}

impl SensorKind {
    pub fn as_str(&self) -> &str {
        match self {
            SensorKind::Temperature => "temperatura",
            SensorKind::Light => "luz",
            SensorKind::Humidity => "umidade",
            SensorKind::Vibration => "vibracao",
            SensorKind::Other(tag) => tag.as_str(),
        }
    }

    /// Light readings carry an on/off state in `valor` rather than a measurement.
    pub fn is_binary(&self) -> bool {
        matches!(self, SensorKind::Light)
    }
}

impl From<String> for SensorKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "temperatura" => SensorKind::Temperature,
            "luz" => SensorKind::Light,
            "umidade" => SensorKind::Humidity,
            "vibracao" => SensorKind::Vibration,
            _ => SensorKind::Other(tag),
        }
    }
}

impl From<SensorKind> for String {
    fn from(kind: SensorKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of `/dados-sensores`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    #[serde(default, deserialize_with = "lenient_id")]
    pub sensor_id: i64,
    #[serde(rename = "tipo_sensor")]
    pub kind: SensorKind,
    #[serde(rename = "ambiente", default)]
    pub room: String,
    /// Measurement, or 0/1 for light state. `None` when the backend sent null
    /// or something that is not a number.
    #[serde(
        rename = "valor",
        default,
        deserialize_with = "lenient_value",
        serialize_with = "compact_value"
    )]
    pub value: Option<f64>,
    /// RFC 3339 string. Outgoing batches leave it to the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl SensorReading {
    pub fn new(sensor_id: i64, kind: SensorKind, room: impl Into<String>, value: f64) -> Self {
        Self {
            sensor_id,
            kind,
            room: room.into(),
            value: Some(value),
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }
}

fn lenient_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(match raw {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or_default(),
        Value::String(s) => s.trim().parse().unwrap_or_default(),
        _ => 0,
    })
}

fn lenient_value<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(value_from_json(&raw))
}

/// Numbers pass through, booleans become 1/0, numeric strings are parsed.
pub(crate) fn value_from_json(raw: &Value) -> Option<f64> {
    match raw {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

fn compact_value<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(v) if v.fract() == 0.0 && v.abs() < i64::MAX as f64 => serializer.serialize_i64(*v as i64),
        Some(v) => serializer.serialize_f64(*v),
        None => serializer.serialize_none(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(rename = "dogName")]
    pub dog_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecoverPasswordRequest {
    pub username: String,
    #[serde(rename = "dogName")]
    pub dog_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangePasswordRequest {
    pub username: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}
