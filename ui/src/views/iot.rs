use api::{SensorKind, SensorReading};
use dioxus::prelude::*;
use futures_util::StreamExt;
use tracing::{debug, info, warn};

use crate::core::{
    config::use_api_client,
    controls::{ControlState, IotConfig},
    feedback,
    format::{format_value, room_title},
    session::use_session,
    timing,
};
use crate::t;

use super::signed_out::SignedOutNotice;

#[derive(Debug, Clone, PartialEq)]
enum SendStatus {
    Sending,
    Sent,
    Failed(String),
}

#[component]
pub fn IotScreen(#[props(default)] config: IotConfig, on_sign_in: EventHandler<()>) -> Element {
    let client = use_api_client();
    let session = use_session();
    let mut controls = use_signal(|| ControlState::new(&config));
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut status = use_signal(|| Option::<SendStatus>::None);

    // Rebuild the panel from the backend once per session token.
    let hydrate_client = client.clone();
    let _hydrate = use_resource(move || {
        let client = hydrate_client.clone();
        let token = session.current().map(|s| s.token);
        async move {
            let Some(token) = token else {
                return;
            };
            match client.fetch_readings(&token).await {
                Ok(readings) => {
                    debug!(count = readings.len(), "hydrating room controls");
                    load_error.set(None);
                    controls.with_mut(|c| c.hydrate(&readings));
                }
                Err(err @ api::Error::UnexpectedShape { .. }) => {
                    warn!(%err, "ignoring malformed sensor payload");
                }
                Err(err) => load_error.set(Some(feedback::describe(
                    &err,
                    || t!("iot-load-failed"),
                    || t!("error-unreachable"),
                ))),
            }
        }
    });

    let interval = config.occupancy_interval;
    use_future(move || async move {
        loop {
            controls.with_mut(|c| c.shuffle_occupancy(&mut rand::thread_rng()));
            timing::sleep(interval).await;
        }
    });

    // Batches are posted one at a time in click order.
    let sender = use_coroutine(move |mut rx: UnboundedReceiver<Vec<SensorReading>>| {
        let client = client.clone();
        async move {
            while let Some(batch) = rx.next().await {
                let Some(token) = session.current().map(|s| s.token) else {
                    continue;
                };
                status.set(Some(SendStatus::Sending));
                match client.send_readings(&token, &batch).await {
                    Ok(echo) => {
                        info!(rows = batch.len(), %echo, "sensor batch accepted");
                        status.set(Some(SendStatus::Sent));
                    }
                    Err(err) => status.set(Some(SendStatus::Failed(feedback::describe(
                        &err,
                        || t!("iot-send-failed"),
                        || t!("error-unreachable"),
                    )))),
                }
            }
        }
    });

    if session.current().is_none() {
        return rsx! { SignedOutNotice { on_sign_in } };
    }

    let state = controls();
    let sending = status() == Some(SendStatus::Sending);

    rsx! {
        section { class: "page page-iot",
            h1 { {t!("iot-title")} }

            if let Some(message) = load_error() {
                p { class: "iot__status iot__status--error", role: "alert", "{message}" }
            }

            h2 { class: "iot__heading", {t!("iot-setpoints")} }
            div { class: "iot__grid",
                for setpoint in state.setpoints().iter().cloned() {
                    {render_setpoint(setpoint.room, setpoint.value, controls)}
                }
            }

            h2 { class: "iot__heading", {t!("iot-lights")} }
            div { class: "iot__grid",
                for light in state.lights().iter().cloned() {
                    {render_light(light.room.clone(), light.on, light.occupancy, state.is_occupied(&light.room), controls)}
                }
            }

            div { class: "iot__actions",
                button {
                    r#type: "button",
                    class: "button button--accent",
                    disabled: sending,
                    onclick: move |_| sender.send(controls.read().outgoing_batch()),
                    {t!("iot-send")}
                }
                {match status() {
                    Some(SendStatus::Sending) => rsx! {
                        p { class: "iot__status", role: "status", {t!("iot-sending")} }
                    },
                    Some(SendStatus::Sent) => rsx! {
                        p { class: "iot__status iot__status--ok", role: "status", {t!("iot-sent")} }
                    },
                    Some(SendStatus::Failed(message)) => rsx! {
                        p { class: "iot__status iot__status--error", role: "alert", "{message}" }
                    },
                    None => rsx! {},
                }}
            }
        }
    }
}

fn render_setpoint(room: String, value: f64, mut controls: Signal<ControlState>) -> Element {
    let title = room_title(&room);
    let display = if value == 0.0 {
        t!("iot-not-set")
    } else {
        format_value(&SensorKind::Temperature, value)
    };
    let down = room.clone();
    let up = room.clone();
    let typed = room.clone();

    rsx! {
        div { key: "{room}", class: "iot-card iot-card--setpoint",
            span { class: "iot-card__room", "{title}" }
            span { class: "iot-card__value", "{display}" }
            div { class: "iot-card__stepper",
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    aria_label: t!("iot-decrease"),
                    onclick: move |_| {
                        controls.with_mut(|c| c.step_temperature(&down, -1.0));
                    },
                    "−"
                }
                input {
                    class: "iot-card__input",
                    r#type: "number",
                    value: "{value}",
                    onchange: move |evt| {
                        if let Ok(parsed) = evt.value().trim().parse::<f64>() {
                            controls.with_mut(|c| c.change_temperature(&typed, parsed));
                        }
                    },
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    aria_label: t!("iot-increase"),
                    onclick: move |_| {
                        controls.with_mut(|c| c.step_temperature(&up, 1.0));
                    },
                    "+"
                }
            }
        }
    }
}

fn render_light(
    room: String,
    on: bool,
    occupancy: u8,
    occupied: bool,
    mut controls: Signal<ControlState>,
) -> Element {
    let title = room_title(&room);
    let switch_label = if on { t!("iot-light-on") } else { t!("iot-light-off") };
    let presence = if occupied {
        t!("iot-occupied", level = occupancy)
    } else {
        t!("iot-vacant", level = occupancy)
    };
    let toggled = room.clone();

    rsx! {
        div { key: "{room}", class: "iot-card iot-card--light",
            span { class: "iot-card__room", "{title}" }
            button {
                r#type: "button",
                class: if on { "iot-switch iot-switch--on" } else { "iot-switch" },
                aria_pressed: "{on}",
                onclick: move |_| {
                    controls.with_mut(|c| c.toggle_light(&toggled));
                },
                "{switch_label}"
            }
            span {
                class: if occupied { "iot-occupancy iot-occupancy--occupied" } else { "iot-occupancy" },
                "{presence}"
            }
        }
    }
}
