//! Application and screen configuration.
//!
//! `AppConfig` is provided once at the root through context; screens read it
//! with [`use_api_client`]. The screen configs replace per-variant copies of
//! the graph and IoT screens with plain data.

use std::time::Duration;

use api::SensorKind;
use dioxus::prelude::*;

use super::series::{ChartType, Grouping};
use super::time_range::TimeRange;

pub const API_URL_ENV: &str = "HOMEWATCH_API_URL";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Runtime env first (native only), then the value baked in at build time.
    pub fn from_env() -> Self {
        #[cfg(target_arch = "wasm32")]
        let runtime = None;
        #[cfg(not(target_arch = "wasm32"))]
        let runtime = std::env::var(API_URL_ENV).ok();

        Self {
            api_base_url: resolve_base_url(runtime, option_env!("HOMEWATCH_API_URL")),
        }
    }

    pub fn client(&self) -> api::Client {
        api::Client::new(self.api_base_url.clone())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: api::DEFAULT_BASE_URL.to_string(),
        }
    }
}

pub fn resolve_base_url(runtime: Option<String>, compile_time: Option<&str>) -> String {
    runtime
        .filter(|url| !url.trim().is_empty())
        .or_else(|| {
            compile_time
                .filter(|url| !url.trim().is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| api::DEFAULT_BASE_URL.to_string())
}

/// Backend client built from the root `AppConfig` (or the environment when no
/// config was provided). Created once per component.
pub fn use_api_client() -> api::Client {
    use_hook(|| {
        try_consume_context::<AppConfig>()
            .unwrap_or_else(AppConfig::from_env)
            .client()
    })
}

/// One chart on the graph screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPanel {
    pub kind: SensorKind,
    pub grouping: Grouping,
    pub color: &'static str,
}

impl ChartPanel {
    pub fn single(kind: SensorKind, color: &'static str) -> Self {
        Self {
            kind,
            grouping: Grouping::SingleKey,
            color,
        }
    }

    pub fn by_room(kind: SensorKind) -> Self {
        Self {
            kind,
            grouping: Grouping::ByRoom,
            color: "",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphConfig {
    pub panels: Vec<ChartPanel>,
    pub default_range: TimeRange,
    pub default_chart: ChartType,
    /// Re-fetch on this cadence while the screen is mounted.
    pub refresh_every: Option<Duration>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            panels: vec![
                ChartPanel::single(SensorKind::Temperature, "rgba(255, 0, 0, 1)"),
                ChartPanel::single(SensorKind::Humidity, "rgba(0, 0, 255, 1)"),
                ChartPanel::single(SensorKind::Vibration, "rgba(0, 255, 0, 1)"),
            ],
            default_range: TimeRange::LastHour,
            default_chart: ChartType::Line,
            refresh_every: None,
        }
    }
}

impl GraphConfig {
    /// Per-room layout: temperature and light split by room, refreshed every minute.
    pub fn rooms() -> Self {
        Self {
            panels: vec![
                ChartPanel::by_room(SensorKind::Temperature),
                ChartPanel::by_room(SensorKind::Light),
            ],
            default_range: TimeRange::Last24Hours,
            default_chart: ChartType::Line,
            refresh_every: Some(Duration::from_secs(60)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_precedence() {
        assert_eq!(
            resolve_base_url(Some("http://10.0.0.2:3000".into()), Some("http://build")),
            "http://10.0.0.2:3000"
        );
        assert_eq!(resolve_base_url(None, Some("http://build")), "http://build");
        assert_eq!(resolve_base_url(Some("  ".into()), None), "http://localhost:3000");
    }

    #[test]
    fn default_graph_layout_is_three_single_key_panels() {
        let config = GraphConfig::default();
        let kinds: Vec<&SensorKind> = config.panels.iter().map(|p| &p.kind).collect();
        assert_eq!(
            kinds,
            [
                &SensorKind::Temperature,
                &SensorKind::Humidity,
                &SensorKind::Vibration
            ]
        );
        assert!(config.panels.iter().all(|p| p.grouping == Grouping::SingleKey));
        assert_eq!(config.default_range, TimeRange::LastHour);
        assert_eq!(config.refresh_every, None);
    }
}
