//! Metadata and factory consumed by visual form designers.
//!
//! A designer host lists the widget in its palette from `WidgetDescriptor`,
//! calls `DesignerPlugin::initialize` once, and asks the plugin for fresh
//! chart instances when the user drops one onto a form.

use serde::Serialize;
use tracing::debug;

use crate::api::{RadarChart, RadarChartConfig};
use crate::core::Viewport;
use crate::error::RadarResult;
use crate::render::Renderer;

pub const WIDGET_CLASS_NAME: &str = "EmotionRadarWidget";
pub const WIDGET_GROUP: &str = "Analytics";

const DOM_XML: &str = concat!(
    "<ui language=\"c++\">",
    " <widget class=\"EmotionRadarWidget\" name=\"emotionRadar\">",
    "  <property name=\"toolTip\" >",
    "   <string>Radar chart for emotion recognition</string>",
    "  </property>",
    "  <property name=\"whatsThis\" >",
    "   <string>Drop into your UI to visualise 8-class emotion scores.</string>",
    "  </property>",
    " </widget>",
    "</ui>",
);

/// Static palette entry describing the radar widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WidgetDescriptor {
    pub name: &'static str,
    pub group: &'static str,
    pub tool_tip: &'static str,
    pub whats_this: &'static str,
    pub include_file: &'static str,
    pub is_container: bool,
    pub dom_xml: &'static str,
}

impl WidgetDescriptor {
    pub const EMOTION_RADAR: Self = Self {
        name: WIDGET_CLASS_NAME,
        group: WIDGET_GROUP,
        tool_tip: "Radar chart widget for emotion recognition results",
        whats_this: "Displays up to eight emotion probabilities on a configurable radar chart.",
        include_file: "emotion_radar::api::RadarChart",
        is_container: false,
        dom_xml: DOM_XML,
    };
}

/// Designer-side factory with a one-shot initialization flag.
#[derive(Debug, Clone, Default)]
pub struct DesignerPlugin {
    initialized: bool,
}

impl DesignerPlugin {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn descriptor(&self) -> WidgetDescriptor {
        WidgetDescriptor::EMOTION_RADAR
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Marks the plugin as initialized. Repeated calls are no-ops.
    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        debug!(widget = WIDGET_CLASS_NAME, "designer plugin initialized");
    }

    /// Creates a default-configured chart sized to its preferred size.
    pub fn create_widget<R: Renderer>(&self, renderer: R) -> RadarResult<RadarChart<R>> {
        self.create_widget_with_viewport(renderer, RadarChartConfig::default().viewport)
    }

    pub fn create_widget_with_viewport<R: Renderer>(
        &self,
        renderer: R,
        viewport: Viewport,
    ) -> RadarResult<RadarChart<R>> {
        debug!(
            widget = WIDGET_CLASS_NAME,
            width = viewport.width,
            height = viewport.height,
            "designer requested widget instance"
        );
        RadarChart::new(renderer, RadarChartConfig::new(viewport))
    }
}
