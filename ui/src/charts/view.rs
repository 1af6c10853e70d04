use dioxus::prelude::*;

use crate::core::series::{ChartType, Dataset};

use super::geometry::{
    bars, line_points, radar_points, radar_vertex, slot_count, svg_points, x_positions, y_for, Scale,
    PADDING, VIEW_HEIGHT, VIEW_WIDTH,
};

/// Most x-axis labels drawn before thinning kicks in.
const MAX_X_LABELS: usize = 6;
const TICKS: usize = 5;

#[component]
pub fn SensorChart(
    title: String,
    datasets: Vec<Dataset>,
    chart_type: ChartType,
    empty_text: String,
    /// Summary line under the title, e.g. the most recent value.
    #[props(default)]
    latest: Option<String>,
) -> Element {
    if datasets.is_empty() {
        return rsx! {
            figure { class: "chart-panel chart-panel--empty",
                figcaption { class: "chart-panel__title", "{title}" }
                p { class: "chart-panel__placeholder", "{empty_text}" }
            }
        };
    }

    let scale = Scale::for_datasets(&datasets);
    let body = match chart_type {
        ChartType::Line => render_line(&datasets, scale),
        ChartType::Bar => render_bars(&datasets, scale),
        ChartType::Radar => render_radar(&datasets, scale),
    };
    let axes = if chart_type == ChartType::Radar {
        rsx! {}
    } else {
        render_axes(&datasets, scale)
    };

    rsx! {
        figure { class: "chart-panel chart-panel--{chart_type.key()}",
            figcaption { class: "chart-panel__title", "{title}" }
            if let Some(meta) = latest {
                p { class: "chart-panel__meta", "{meta}" }
            }
            svg {
                class: "chart",
                view_box: "0 0 {VIEW_WIDTH} {VIEW_HEIGHT}",
                role: "img",
                "aria-label": "{title}",
                {axes}
                {body}
            }
            ul { class: "chart-legend",
                for dataset in datasets.iter() {
                    li { key: "{dataset.label}", class: "chart-legend__item",
                        span {
                            class: "chart-legend__swatch",
                            style: "background: {dataset.color}",
                        }
                        "{dataset.label}"
                    }
                }
            }
        }
    }
}

/// Labels of the longest dataset drive the x axis.
fn axis_labels(datasets: &[Dataset]) -> Vec<String> {
    datasets
        .iter()
        .max_by_key(|d| d.labels.len())
        .map(|d| d.labels.clone())
        .unwrap_or_default()
}

fn render_axes(datasets: &[Dataset], scale: Scale) -> Element {
    let labels = axis_labels(datasets);
    let xs = x_positions(labels.len());
    let stride = labels.len().div_ceil(MAX_X_LABELS).max(1);
    let x_ticks: Vec<(f64, String)> = xs
        .into_iter()
        .zip(labels)
        .enumerate()
        .filter(|(i, _)| i % stride == 0)
        .map(|(_, tick)| tick)
        .collect();
    let y_ticks: Vec<(f64, String)> = scale
        .ticks(TICKS)
        .into_iter()
        .map(|v| (y_for(scale, v), format!("{v:.1}")))
        .collect();
    let bottom = VIEW_HEIGHT - PADDING;
    let right = VIEW_WIDTH - PADDING;

    rsx! {
        g { class: "chart__axes",
            for (y, label) in y_ticks {
                line { class: "chart__grid", x1: "{PADDING}", y1: "{y}", x2: "{right}", y2: "{y}" }
                text { class: "chart__tick", x: "{PADDING - 4.0}", y: "{y}", text_anchor: "end", "{label}" }
            }
            line { class: "chart__axis", x1: "{PADDING}", y1: "{bottom}", x2: "{right}", y2: "{bottom}" }
            for (x, label) in x_ticks {
                text { class: "chart__tick", x: "{x}", y: "{bottom + 16.0}", text_anchor: "middle", "{label}" }
            }
        }
    }
}

fn render_line(datasets: &[Dataset], scale: Scale) -> Element {
    let slots = slot_count(datasets);
    rsx! {
        for dataset in datasets.iter() {
            g { key: "{dataset.label}", class: "chart__series",
                polyline {
                    points: svg_points(&line_points(&dataset.data, slots, scale)),
                    fill: "none",
                    stroke: dataset.color,
                    stroke_width: "2",
                }
                for (x, y) in line_points(&dataset.data, slots, scale) {
                    circle { cx: "{x}", cy: "{y}", r: "3", fill: dataset.color }
                }
            }
        }
    }
}

fn render_bars(datasets: &[Dataset], scale: Scale) -> Element {
    rsx! {
        g { class: "chart__series",
            for bar in bars(datasets, scale) {
                rect {
                    x: "{bar.x}",
                    y: "{bar.y}",
                    width: "{bar.width}",
                    height: "{bar.height}",
                    fill: bar.color,
                }
            }
        }
    }
}

fn render_radar(datasets: &[Dataset], scale: Scale) -> Element {
    let labels = axis_labels(datasets);
    let spokes = labels.len().max(3);
    let rings: Vec<String> = [0.25, 0.5, 0.75, 1.0]
        .into_iter()
        .map(|fraction| {
            let ring: Vec<(f64, f64)> = (0..spokes)
                .map(|i| radar_vertex(i, spokes, fraction))
                .collect();
            svg_points(&ring)
        })
        .collect();
    let spoke_ends: Vec<(f64, f64, String)> = (0..spokes)
        .map(|i| {
            let (x, y) = radar_vertex(i, spokes, 1.08);
            (x, y, labels.get(i).cloned().unwrap_or_default())
        })
        .collect();

    rsx! {
        g { class: "chart__radar-grid",
            for ring in rings {
                polygon { class: "chart__grid", points: ring, fill: "none" }
            }
            for (x, y, label) in spoke_ends {
                text { class: "chart__tick", x: "{x}", y: "{y}", text_anchor: "middle", "{label}" }
            }
        }
        for dataset in datasets.iter() {
            polygon {
                key: "{dataset.label}",
                class: "chart__series",
                points: svg_points(&radar_points(&dataset.data, spokes, scale)),
                fill: dataset.color,
                fill_opacity: "0.2",
                stroke: dataset.color,
                stroke_width: "2",
            }
        }
    }
}
