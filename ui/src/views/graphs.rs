use api::{SensorKind, SensorReading};
use dioxus::prelude::*;
use time::OffsetDateTime;
use tracing::debug;

use crate::charts::SensorChart;
use crate::core::{
    config::{use_api_client, ChartPanel, GraphConfig},
    feedback,
    format::format_value,
    readings::ReadingsState,
    series::{self, ChartType, Grouping},
    session::use_session,
    time_range::{filter_readings, TimeRange},
    timing,
};
use crate::t;

use super::signed_out::SignedOutNotice;

#[component]
pub fn GraphScreen(#[props(default)] config: GraphConfig, on_sign_in: EventHandler<()>) -> Element {
    let client = use_api_client();
    let session = use_session();
    let mut range = use_signal(|| config.default_range);
    let mut chart_type = use_signal(|| config.default_chart);
    let mut state = use_signal(ReadingsState::default);
    let mut refresh_tick = use_signal(|| 0_u64);

    // Re-runs (cancelling any in-flight fetch) when the range, session or tick changes.
    let _fetch = use_resource(move || {
        let client = client.clone();
        let token = session.current().map(|s| s.token);
        let selected = range();
        let tick = refresh_tick();
        async move {
            let Some(token) = token else {
                return;
            };
            debug!(range = selected.key(), tick, "fetching sensor readings");
            let outcome = client.fetch_readings(&token).await;
            state.with_mut(|s| {
                s.apply(outcome, |err| {
                    feedback::describe(err, || t!("graphs-load-failed"), || t!("error-unreachable"))
                })
            });
        }
    });

    let refresh_every = config.refresh_every;
    use_future(move || async move {
        let Some(every) = refresh_every else {
            return;
        };
        loop {
            timing::sleep(every).await;
            refresh_tick += 1;
        }
    });

    if session.current().is_none() {
        return rsx! { SignedOutNotice { on_sign_in } };
    }

    let snapshot = state();
    let filtered = filter_readings(OffsetDateTime::now_utc(), range(), &snapshot.readings);
    let current_chart = chart_type();
    let panels = config.panels.iter().enumerate().map(|(index, panel)| {
        let title = panel_title(panel);
        let datasets = series::build(&filtered, &panel.kind, panel.grouping, &title, panel.color);
        let latest = latest_value(&filtered, panel);
        rsx! {
            SensorChart {
                key: "{index}",
                title,
                datasets,
                chart_type: current_chart,
                empty_text: t!("graphs-empty"),
                latest,
            }
        }
    });

    rsx! {
        section { class: "page page-graphs",
            h1 { {t!("graphs-title")} }

            div { class: "graphs__controls",
                label { class: "graphs__control",
                    span { class: "graphs__control-label", {t!("graphs-range-label")} }
                    select {
                        value: range().key(),
                        onchange: move |evt| range.set(TimeRange::from_key(&evt.value())),
                        for choice in TimeRange::ALL {
                            option { key: "{choice.key()}", value: choice.key(), {range_label(choice)} }
                        }
                    }
                }
                label { class: "graphs__control",
                    span { class: "graphs__control-label", {t!("graphs-chart-label")} }
                    select {
                        value: current_chart.key(),
                        onchange: move |evt| chart_type.set(ChartType::from_key(&evt.value())),
                        for choice in ChartType::ALL {
                            option { key: "{choice.key()}", value: choice.key(), {chart_label(choice)} }
                        }
                    }
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: move |_| refresh_tick += 1,
                    {t!("graphs-refresh")}
                }
            }

            if let Some(message) = snapshot.error.as_ref() {
                p { class: "graphs__status graphs__status--error", role: "alert", "{message}" }
            } else if !snapshot.loaded {
                p { class: "graphs__status", {t!("graphs-loading")} }
            }

            div { class: "graphs__panels", {panels} }
        }
    }
}

/// Most recent value for single-sensor panels; per-room panels rely on the legend.
fn latest_value(readings: &[SensorReading], panel: &ChartPanel) -> Option<String> {
    if panel.grouping != Grouping::SingleKey {
        return None;
    }
    let value = readings
        .iter()
        .rev()
        .filter(|r| r.kind == panel.kind)
        .find_map(|r| r.value)?;
    Some(t!("graphs-latest", value = format_value(&panel.kind, value)))
}

fn panel_title(panel: &ChartPanel) -> String {
    let sensor = sensor_label(&panel.kind);
    match panel.grouping {
        Grouping::SingleKey => sensor,
        Grouping::ByRoom => t!("graphs-by-room", sensor = sensor),
    }
}

fn sensor_label(kind: &SensorKind) -> String {
    match kind {
        SensorKind::Temperature => t!("sensor-temperature"),
        SensorKind::Humidity => t!("sensor-humidity"),
        SensorKind::Vibration => t!("sensor-vibration"),
        SensorKind::Light => t!("sensor-light"),
        SensorKind::Other(raw) => raw.clone(),
    }
}

fn range_label(range: TimeRange) -> String {
    match range {
        TimeRange::LastHour => t!("range-last-hour"),
        TimeRange::Last24Hours => t!("range-last-24-hours"),
        TimeRange::LastWeek => t!("range-last-week"),
        TimeRange::Last30Days => t!("range-last-30-days"),
        TimeRange::AllData => t!("range-all-data"),
    }
}

fn chart_label(chart: ChartType) -> String {
    match chart {
        ChartType::Line => t!("chart-line"),
        ChartType::Bar => t!("chart-bar"),
        ChartType::Radar => t!("chart-radar"),
    }
}
