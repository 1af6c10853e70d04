//! Pure layout math for the SVG charts. Everything here works in view-box
//! units so the rendered SVG scales with its container.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::core::series::Dataset;

pub const VIEW_WIDTH: f64 = 640.0;
pub const VIEW_HEIGHT: f64 = 300.0;
pub const PADDING: f64 = 36.0;

/// Y-axis bounds. Always includes zero, like a "begin at zero" axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub min: f64,
    pub max: f64,
}

impl Scale {
    pub fn for_datasets(datasets: &[Dataset]) -> Self {
        let (mut min, mut max) = (0.0_f64, 0.0_f64);
        for value in datasets.iter().flat_map(|d| d.data.iter().copied()) {
            min = min.min(value);
            max = max.max(value);
        }
        if (max - min).abs() < f64::EPSILON {
            max = min + 1.0;
        }
        Self { min, max }
    }

    /// Position of `value` in `0.0..=1.0`.
    pub fn normalize(self, value: f64) -> f64 {
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    /// `count` evenly spaced tick values from min to max.
    pub fn ticks(self, count: usize) -> Vec<f64> {
        if count < 2 {
            return vec![self.min];
        }
        let step = (self.max - self.min) / (count - 1) as f64;
        (0..count).map(|i| self.min + step * i as f64).collect()
    }
}

fn plot_width() -> f64 {
    VIEW_WIDTH - 2.0 * PADDING
}

fn plot_height() -> f64 {
    VIEW_HEIGHT - 2.0 * PADDING
}

pub fn y_for(scale: Scale, value: f64) -> f64 {
    VIEW_HEIGHT - PADDING - scale.normalize(value) * plot_height()
}

/// X positions for `n` points spread across the plot. A single point sits in the middle.
pub fn x_positions(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![VIEW_WIDTH / 2.0],
        _ => {
            let step = plot_width() / (n - 1) as f64;
            (0..n).map(|i| PADDING + step * i as f64).collect()
        }
    }
}

/// Point `i` of every dataset sits on shared slot `i` of `slots`, so series of
/// different lengths line up under the same x labels.
pub fn line_points(data: &[f64], slots: usize, scale: Scale) -> Vec<(f64, f64)> {
    x_positions(slots.max(data.len()))
        .into_iter()
        .zip(data)
        .map(|(x, value)| (x, y_for(scale, *value)))
        .collect()
}

/// `"x,y x,y ..."` for an SVG `points` attribute.
pub fn svg_points(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: &'static str,
}

/// Number of shared x slots: the length of the longest dataset.
pub fn slot_count(datasets: &[Dataset]) -> usize {
    datasets.iter().map(Dataset::len).max().unwrap_or(0)
}

/// Grouped bars: one slot per point index, one bar per dataset inside each slot.
pub fn bars(datasets: &[Dataset], scale: Scale) -> Vec<Bar> {
    let slots = slot_count(datasets);
    if slots == 0 {
        return Vec::new();
    }
    let slot_width = plot_width() / slots as f64;
    let bar_width = slot_width * 0.8 / datasets.len() as f64;
    let baseline = y_for(scale, 0.0_f64.clamp(scale.min, scale.max));

    let mut out = Vec::new();
    for (series, dataset) in datasets.iter().enumerate() {
        for (slot, value) in dataset.data.iter().enumerate() {
            let top = y_for(scale, *value);
            let x = PADDING + slot_width * slot as f64 + slot_width * 0.1 + bar_width * series as f64;
            out.push(Bar {
                x,
                y: top.min(baseline),
                width: bar_width,
                height: (baseline - top).abs(),
                color: dataset.color,
            });
        }
    }
    out
}

pub fn radar_center() -> (f64, f64) {
    (VIEW_WIDTH / 2.0, VIEW_HEIGHT / 2.0)
}

pub fn radar_radius() -> f64 {
    plot_height() / 2.0
}

/// Vertex for spoke `index` of `spokes` at `fraction` of the radius; spoke 0 points up.
pub fn radar_vertex(index: usize, spokes: usize, fraction: f64) -> (f64, f64) {
    let (cx, cy) = radar_center();
    let angle = TAU * index as f64 / spokes.max(1) as f64 - FRAC_PI_2;
    let r = radar_radius() * fraction;
    (cx + r * angle.cos(), cy + r * angle.sin())
}

pub fn radar_points(data: &[f64], spokes: usize, scale: Scale) -> Vec<(f64, f64)> {
    data.iter()
        .enumerate()
        .map(|(i, value)| radar_vertex(i, spokes, scale.normalize(*value)))
        .collect()
}
