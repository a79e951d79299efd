use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::core::{ScoreModel, Viewport};
use crate::error::{RadarError, RadarResult};
use crate::render::{Color, RenderFrame, Renderer};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::config::{MINIMUM_SIZE_PX, PREFERRED_SIZE_PX};
use super::frame_builder::build_radar_frame;
use super::{
    ChangeListeners, ListenerId, RadarChartConfig, RadarLayout, RadarProperty, RadarStyle,
};

/// Radar chart facade consumed by host applications.
///
/// `RadarChart` owns the score model, layout, palette and change listeners,
/// and hands a freshly built `RenderFrame` to its renderer on every redraw.
/// Setters never fail: rejected input leaves state untouched and returns
/// `false`; accepted input marks a redraw as pending and notifies listeners.
pub struct RadarChart<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    scores: ScoreModel,
    layout: RadarLayout,
    style: RadarStyle,
    listeners: ChangeListeners,
    redraw_pending: bool,
}

impl<R: Renderer> RadarChart<R> {
    pub fn new(renderer: R, config: RadarChartConfig) -> RadarResult<Self> {
        config.validate()?;

        let RadarChartConfig {
            viewport,
            title,
            labels,
            values,
            max_value,
            grid_lines,
            margin_px,
            style,
        } = config;

        let mut scores = ScoreModel::with_labels(labels, max_value);
        scores.set_values(values);

        Ok(Self {
            renderer,
            viewport,
            scores,
            layout: RadarLayout {
                title,
                grid_lines,
                margin_px,
            },
            style,
            listeners: ChangeListeners::default(),
            redraw_pending: true,
        })
    }

    /// Snapshot of the current state as a bootstrap config.
    #[must_use]
    pub fn config(&self) -> RadarChartConfig {
        RadarChartConfig {
            viewport: self.viewport,
            title: self.layout.title.clone(),
            labels: self.scores.labels().to_vec(),
            values: self.scores.values().to_vec(),
            max_value: self.scores.max_value(),
            grid_lines: self.layout.grid_lines,
            margin_px: self.layout.margin_px,
            style: self.style,
        }
    }

    #[must_use]
    pub fn size_hint(&self) -> Viewport {
        Viewport::new(PREFERRED_SIZE_PX, PREFERRED_SIZE_PX)
    }

    #[must_use]
    pub fn minimum_size(&self) -> Viewport {
        Viewport::new(MINIMUM_SIZE_PX, MINIMUM_SIZE_PX)
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Resizes the drawing surface. Emits no property change.
    pub fn set_viewport(&mut self, viewport: Viewport) -> RadarResult<()> {
        if !viewport.is_valid() {
            return Err(RadarError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if viewport != self.viewport {
            self.viewport = viewport;
            self.redraw_pending = true;
        }
        Ok(())
    }

    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.redraw_pending
    }

    pub fn connect(&mut self, listener: impl FnMut(RadarProperty) + 'static) -> ListenerId {
        self.listeners.connect(Box::new(listener))
    }

    pub fn disconnect(&mut self, id: ListenerId) -> bool {
        self.listeners.disconnect(id)
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn commit(&mut self, property: RadarProperty) {
        self.redraw_pending = true;
        trace!(?property, "radar chart property changed");
        self.listeners.notify(property);
    }

    // Scores

    #[must_use]
    pub fn score_model(&self) -> &ScoreModel {
        &self.scores
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        self.scores.labels()
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        self.scores.values()
    }

    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.scores.max_value()
    }

    #[must_use]
    pub fn value_of(&self, label: &str) -> Option<f64> {
        self.scores.value_of(label)
    }

    #[must_use]
    pub fn scores(&self) -> IndexMap<String, f64> {
        self.scores.scores()
    }

    /// Replaces the category set; every score resets to zero.
    pub fn set_labels<I, S>(&mut self, labels: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !self.scores.set_labels(labels) {
            return false;
        }
        self.commit(RadarProperty::Labels);
        true
    }

    /// Stores raw scores, truncating/zero-padding to the label count and
    /// clamping into `[0, max_value]`.
    pub fn set_values(&mut self, values: Vec<f64>) {
        self.scores.set_values(values);
        self.commit(RadarProperty::Values);
    }

    /// Writes one category score. Unknown labels are ignored.
    pub fn set_value(&mut self, label: &str, value: f64) -> bool {
        if !self.scores.set_value(label, value) {
            debug!(label, "ignoring score for unknown category");
            return false;
        }
        self.commit(RadarProperty::Values);
        true
    }

    /// Applies `set_value` for every entry, in iteration order.
    ///
    /// Returns how many entries matched a category.
    pub fn set_scores<I, K>(&mut self, scores: I) -> usize
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut applied = 0;
        for (label, value) in scores {
            if self.set_value(label.as_ref(), value) {
                applied += 1;
            }
        }
        applied
    }

    pub fn set_max_value(&mut self, max_value: f64) -> bool {
        if !self.scores.set_max_value(max_value) {
            return false;
        }
        self.commit(RadarProperty::MaxValue);
        true
    }

    // Layout

    #[must_use]
    pub fn title(&self) -> &str {
        &self.layout.title
    }

    #[must_use]
    pub fn grid_lines(&self) -> u32 {
        self.layout.grid_lines
    }

    #[must_use]
    pub fn margin_px(&self) -> u32 {
        self.layout.margin_px
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> bool {
        let title = title.into();
        if title == self.layout.title {
            return false;
        }
        self.layout.title = title;
        self.commit(RadarProperty::Title);
        true
    }

    pub fn set_grid_lines(&mut self, grid_lines: u32) -> bool {
        if grid_lines == 0 || grid_lines == self.layout.grid_lines {
            return false;
        }
        self.layout.grid_lines = grid_lines;
        self.commit(RadarProperty::GridLines);
        true
    }

    pub fn set_margin_px(&mut self, margin_px: u32) -> bool {
        if margin_px == self.layout.margin_px {
            return false;
        }
        self.layout.margin_px = margin_px;
        self.commit(RadarProperty::Margin);
        true
    }

    // Style

    #[must_use]
    pub fn style(&self) -> RadarStyle {
        self.style
    }

    #[must_use]
    pub fn fill_color(&self) -> Color {
        self.style.fill_color
    }

    #[must_use]
    pub fn stroke_color(&self) -> Color {
        self.style.stroke_color
    }

    #[must_use]
    pub fn point_color(&self) -> Color {
        self.style.point_color
    }

    #[must_use]
    pub fn grid_color(&self) -> Color {
        self.style.grid_color
    }

    #[must_use]
    pub fn label_color(&self) -> Color {
        self.style.label_color
    }

    #[must_use]
    pub fn background_color(&self) -> Color {
        self.style.background_color
    }

    #[must_use]
    pub fn show_points(&self) -> bool {
        self.style.show_points
    }

    pub fn set_fill_color(&mut self, color: Color) -> bool {
        self.replace_color(RadarProperty::FillColor, color)
    }

    pub fn set_stroke_color(&mut self, color: Color) -> bool {
        self.replace_color(RadarProperty::StrokeColor, color)
    }

    pub fn set_point_color(&mut self, color: Color) -> bool {
        self.replace_color(RadarProperty::PointColor, color)
    }

    pub fn set_grid_color(&mut self, color: Color) -> bool {
        self.replace_color(RadarProperty::GridColor, color)
    }

    pub fn set_label_color(&mut self, color: Color) -> bool {
        self.replace_color(RadarProperty::LabelColor, color)
    }

    pub fn set_background_color(&mut self, color: Color) -> bool {
        self.replace_color(RadarProperty::BackgroundColor, color)
    }

    pub fn set_show_points(&mut self, show_points: bool) -> bool {
        if show_points == self.style.show_points {
            return false;
        }
        self.style.show_points = show_points;
        self.commit(RadarProperty::ShowPoints);
        true
    }

    fn replace_color(&mut self, property: RadarProperty, color: Color) -> bool {
        if let Err(err) = color.validate() {
            debug!(?property, error = %err, "ignoring invalid color");
            return false;
        }

        let slot = match property {
            RadarProperty::FillColor => &mut self.style.fill_color,
            RadarProperty::StrokeColor => &mut self.style.stroke_color,
            RadarProperty::PointColor => &mut self.style.point_color,
            RadarProperty::GridColor => &mut self.style.grid_color,
            RadarProperty::LabelColor => &mut self.style.label_color,
            RadarProperty::BackgroundColor => &mut self.style.background_color,
            _ => return false,
        };
        if *slot == color {
            return false;
        }
        *slot = color;
        self.commit(property);
        true
    }

    // Rendering

    /// Builds the frame for the current state without touching the renderer.
    pub fn build_render_frame(&self) -> RadarResult<RenderFrame> {
        let frame = build_radar_frame(self.viewport, &self.scores, &self.layout, &self.style);
        frame.validate()?;
        Ok(frame)
    }

    pub fn render(&mut self) -> RadarResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)?;
        self.finish_render_cycle(&frame);
        Ok(())
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> RadarResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.finish_render_cycle(&frame);
        Ok(())
    }

    fn finish_render_cycle(&mut self, frame: &RenderFrame) {
        self.redraw_pending = false;
        debug!(
            width = frame.viewport.width,
            height = frame.viewport.height,
            categories = self.scores.len(),
            texts = frame.text_count(),
            "radar chart rendered"
        );
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
