mod change;
mod chart;
mod config;
mod frame_builder;
mod style;

pub use change::{ChangeListener, ChangeListeners, ListenerId, RadarProperty};
pub use chart::RadarChart;
pub use config::{MINIMUM_SIZE_PX, PREFERRED_SIZE_PX, RadarChartConfig};
pub use frame_builder::{
    MAX_SCALE_FACTOR, MIN_RADIUS_PX, MIN_SCALE_FACTOR, REFERENCE_SIZE_PX, RenderMetrics,
    build_radar_frame,
};
pub use style::{DEFAULT_GRID_LINES, DEFAULT_MARGIN_PX, DEFAULT_TITLE, RadarLayout, RadarStyle};
