//! SVG chart rendering for sensor datasets.

mod geometry;
pub use geometry::*;

mod view;
pub use view::SensorChart;
