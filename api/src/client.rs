use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::{
    ChangePasswordRequest, LoginRequest, LoginResponse, RecoverPasswordRequest, RegisterRequest,
    SensorReading,
};

const READINGS_PATH: &str = "/dados-sensores";

/// HTTP wrapper around the backend. Cheap to clone; the inner `reqwest::Client`
/// is reference counted.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        let body = self.post_json("/login", request, None).await?;
        Ok(serde_json::from_value(body)?)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<()> {
        self.post_json("/register", request, None).await.map(drop)
    }

    pub async fn recover_password(&self, request: &RecoverPasswordRequest) -> Result<()> {
        self.post_json("/recover-password", request, None)
            .await
            .map(drop)
    }

    pub async fn change_password(&self, request: &ChangePasswordRequest) -> Result<()> {
        self.post_json("/change-password", request, None)
            .await
            .map(drop)
    }

    /// `GET /dados-sensores`. A body that is not a JSON array is reported as
    /// [`Error::UnexpectedShape`] so callers can keep what they already show.
    pub async fn fetch_readings(&self, token: &str) -> Result<Vec<SensorReading>> {
        let response = self
            .http
            .get(self.endpoint(READINGS_PATH))
            .bearer_auth(token)
            .send()
            .await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        let body = interpret(status, &text)?;
        decode_readings(body)
    }

    /// `POST /dados-sensores`. Returns whatever JSON the backend echoes.
    pub async fn send_readings(&self, token: &str, batch: &[SensorReading]) -> Result<Value> {
        self.post_json(READINGS_PATH, batch, Some(token)).await
    }

    async fn post_json<B>(&self, path: &str, body: &B, token: Option<&str>) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self.http.post(self.endpoint(path)).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        debug!(path, status, "backend responded");
        interpret(status, &text)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(crate::DEFAULT_BASE_URL)
    }
}

/// Map a raw status + body onto the error model. Empty bodies become `null`.
pub fn interpret(status: u16, body: &str) -> Result<Value> {
    let parsed = if body.trim().is_empty() {
        Ok(Value::Null)
    } else {
        serde_json::from_str::<Value>(body)
    };

    if (200..300).contains(&status) {
        return Ok(parsed?);
    }

    let message = parsed.ok().and_then(|value| {
        value
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
    });
    Err(Error::Rejected { status, message })
}

/// Decode the readings payload. Rows that fail to decode are skipped and logged;
/// a non-array payload is an error.
pub fn decode_readings(body: Value) -> Result<Vec<SensorReading>> {
    let rows = match body {
        Value::Array(rows) => rows,
        other => {
            return Err(Error::UnexpectedShape {
                expected: "array",
                found: json_kind(&other),
            })
        }
    };

    let total = rows.len();
    let readings: Vec<SensorReading> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value(row) {
            Ok(reading) => Some(reading),
            Err(err) => {
                warn!(index, %err, "skipping undecodable sensor row");
                None
            }
        })
        .collect();

    if readings.len() != total {
        debug!(kept = readings.len(), total, "sensor payload partially decoded");
    }
    Ok(readings)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
