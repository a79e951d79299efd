//! emotion-radar: radar ("spider") chart for emotion-classification scores.
//!
//! The chart keeps an ordered set of category labels with clamped scores,
//! builds a backend-agnostic `RenderFrame` on every redraw, and hands it to a
//! `Renderer`. A Cairo backend and a GTK4 `DrawingArea` adapter are available
//! behind features, and `designer` exposes palette metadata plus a factory
//! for visual form designers.

pub mod api;
pub mod core;
pub mod demo;
pub mod designer;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{RadarChart, RadarChartConfig};
pub use error::{RadarError, RadarResult};
