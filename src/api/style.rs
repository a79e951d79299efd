use serde::{Deserialize, Serialize};

use crate::error::RadarResult;
use crate::render::Color;

pub const DEFAULT_TITLE: &str = "Emotion Radar";
pub const DEFAULT_GRID_LINES: u32 = 5;
pub const DEFAULT_MARGIN_PX: u32 = 24;

/// Color palette and marker visibility of a radar chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarStyle {
    pub fill_color: Color,
    pub stroke_color: Color,
    pub point_color: Color,
    pub grid_color: Color,
    pub label_color: Color,
    pub background_color: Color,
    pub show_points: bool,
}

impl Default for RadarStyle {
    fn default() -> Self {
        Self {
            fill_color: Color::from_rgba8(0, 122, 204, 120),
            stroke_color: Color::from_rgb8(0, 122, 204),
            point_color: Color::from_rgb8(255, 255, 255),
            grid_color: Color::from_rgb8(160, 160, 160),
            label_color: Color::from_rgb8(60, 60, 60),
            background_color: Color::from_rgb8(250, 250, 250),
            show_points: true,
        }
    }
}

impl RadarStyle {
    pub fn validate(&self) -> RadarResult<()> {
        for color in [
            self.fill_color,
            self.stroke_color,
            self.point_color,
            self.grid_color,
            self.label_color,
            self.background_color,
        ] {
            color.validate()?;
        }
        Ok(())
    }
}

/// Title text and ring/margin geometry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarLayout {
    pub title: String,
    pub grid_lines: u32,
    pub margin_px: u32,
}

impl Default for RadarLayout {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            grid_lines: DEFAULT_GRID_LINES,
            margin_px: DEFAULT_MARGIN_PX,
        }
    }
}
