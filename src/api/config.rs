use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_MAX_VALUE, Viewport, default_emotion_labels};
use crate::error::{RadarError, RadarResult};
use crate::render::Color;

use super::{DEFAULT_GRID_LINES, DEFAULT_MARGIN_PX, DEFAULT_TITLE, RadarStyle};

pub const PREFERRED_SIZE_PX: u32 = 320;
pub const MINIMUM_SIZE_PX: u32 = 200;

/// Public chart bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarChartConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_emotion_labels")]
    pub labels: Vec<String>,
    /// Initial scores; repaired to the label count like `RadarChart::set_values`.
    #[serde(default)]
    pub values: Vec<f64>,
    #[serde(default = "default_max_value")]
    pub max_value: f64,
    #[serde(default = "default_grid_lines")]
    pub grid_lines: u32,
    #[serde(default = "default_margin_px")]
    pub margin_px: u32,
    #[serde(default)]
    pub style: RadarStyle,
}

impl Default for RadarChartConfig {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
            title: default_title(),
            labels: default_emotion_labels(),
            values: Vec::new(),
            max_value: default_max_value(),
            grid_lines: default_grid_lines(),
            margin_px: default_margin_px(),
            style: RadarStyle::default(),
        }
    }
}

impl RadarChartConfig {
    /// Default config drawn on a surface of the given size.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_values(mut self, values: Vec<f64>) -> Self {
        self.values = values;
        self
    }

    #[must_use]
    pub fn with_max_value(mut self, max_value: f64) -> Self {
        self.max_value = max_value;
        self
    }

    #[must_use]
    pub fn with_grid_lines(mut self, grid_lines: u32) -> Self {
        self.grid_lines = grid_lines;
        self
    }

    #[must_use]
    pub fn with_margin_px(mut self, margin_px: u32) -> Self {
        self.margin_px = margin_px;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: RadarStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.style.fill_color = color;
        self
    }

    #[must_use]
    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.style.stroke_color = color;
        self
    }

    #[must_use]
    pub fn with_point_color(mut self, color: Color) -> Self {
        self.style.point_color = color;
        self
    }

    pub fn validate(&self) -> RadarResult<()> {
        if !self.viewport.is_valid() {
            return Err(RadarError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if self.labels.is_empty() {
            return Err(RadarError::InvalidData(
                "label set must not be empty".to_owned(),
            ));
        }
        if !self.max_value.is_finite() || self.max_value <= 0.0 {
            return Err(RadarError::InvalidData(
                "max value must be finite and > 0".to_owned(),
            ));
        }
        if self.grid_lines == 0 {
            return Err(RadarError::InvalidData(
                "grid line count must be >= 1".to_owned(),
            ));
        }
        self.style.validate()
    }

    pub fn from_json_str(input: &str) -> RadarResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| RadarError::InvalidData(format!("failed to parse chart config json: {e}")))
    }

    pub fn to_json_pretty(&self) -> RadarResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            RadarError::InvalidData(format!("failed to serialize chart config: {e}"))
        })
    }
}

fn default_viewport() -> Viewport {
    Viewport::new(PREFERRED_SIZE_PX, PREFERRED_SIZE_PX)
}

fn default_title() -> String {
    DEFAULT_TITLE.to_owned()
}

fn default_max_value() -> f64 {
    DEFAULT_MAX_VALUE
}

fn default_grid_lines() -> u32 {
    DEFAULT_GRID_LINES
}

fn default_margin_px() -> u32 {
    DEFAULT_MARGIN_PX
}

#[cfg(test)]
mod tests {
    use super::RadarChartConfig;
    use crate::error::RadarError;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = RadarChartConfig::from_json_str(r#"{ "title": "Session 4" }"#)
            .expect("parse config");
        assert_eq!(config.title, "Session 4");
        assert_eq!(config.labels.len(), 8);
        assert_eq!(config.grid_lines, 5);
        assert_eq!(config.margin_px, 24);
        assert!(config.style.show_points);
    }

    #[test]
    fn validate_rejects_non_positive_max_value() {
        let config = RadarChartConfig::default().with_max_value(0.0);
        assert!(matches!(config.validate(), Err(RadarError::InvalidData(_))));
    }

    #[test]
    fn validate_rejects_zero_grid_lines() {
        let config = RadarChartConfig::default().with_grid_lines(0);
        assert!(matches!(config.validate(), Err(RadarError::InvalidData(_))));
        assert!(RadarChartConfig::default().with_grid_lines(1).validate().is_ok());
    }

    #[test]
    fn malformed_json_is_reported_as_invalid_data() {
        let err = RadarChartConfig::from_json_str("{ not json").expect_err("must fail");
        assert!(matches!(err, RadarError::InvalidData(_)));
    }
}
