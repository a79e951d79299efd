use crate::core::{Point, RadialMapper, ScoreModel, Viewport};
use crate::render::{
    CirclePrimitive, LinePrimitive, PolygonPrimitive, RadarLayerKind, RectPrimitive, RenderFrame,
    TextPrimitive,
};

use super::{RadarLayout, RadarStyle};

/// Surface size at which every pixel constant below is drawn unscaled.
pub const REFERENCE_SIZE_PX: f64 = 320.0;
pub const MIN_SCALE_FACTOR: f64 = 0.75;
pub const MAX_SCALE_FACTOR: f64 = 2.5;
pub const MIN_RADIUS_PX: f64 = 10.0;

const TITLE_GAP_PX: f64 = 10.0;
const TITLE_BAND_PX: f64 = 24.0;
const LABEL_OFFSET_PX: f64 = 16.0;
const GRID_STROKE_PX: f64 = 1.0;
const SERIES_STROKE_PX: f64 = 2.0;
const MARKER_RADIUS_PX: f64 = 4.0;
const MARKER_STROKE_PX: f64 = 1.0;
const LABEL_FONT_PX: f64 = 12.0;
const TITLE_FONT_PX: f64 = 14.0;

/// Size-dependent geometry shared by every layer of one draw pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderMetrics {
    pub scale: f64,
    pub center: Point,
    pub radius: f64,
}

impl RenderMetrics {
    #[must_use]
    pub fn for_viewport(viewport: Viewport, margin_px: u32) -> Self {
        let min_side = viewport.min_side();
        let scale = (min_side / REFERENCE_SIZE_PX).clamp(MIN_SCALE_FACTOR, MAX_SCALE_FACTOR);
        let center = Point::new(
            f64::from(viewport.width) / 2.0,
            f64::from(viewport.height) / 2.0 + TITLE_GAP_PX * scale,
        );
        let radius = (min_side / 2.0 - f64::from(margin_px) * scale).max(MIN_RADIUS_PX);
        Self {
            scale,
            center,
            radius,
        }
    }

    #[must_use]
    pub fn scaled(self, px: f64) -> f64 {
        px * self.scale
    }
}

/// Builds the full scene for one redraw.
///
/// Geometry is recomputed from scratch on every call. With no categories only
/// the background is emitted.
#[must_use]
pub fn build_radar_frame(
    viewport: Viewport,
    scores: &ScoreModel,
    layout: &RadarLayout,
    style: &RadarStyle,
) -> RenderFrame {
    let mut frame = RenderFrame::new(viewport);
    frame.push_rect(
        RadarLayerKind::Background,
        RectPrimitive::new(
            0.0,
            0.0,
            f64::from(viewport.width),
            f64::from(viewport.height),
            style.background_color,
        ),
    );

    let count = scores.len();
    if count == 0 {
        return frame;
    }

    let metrics = RenderMetrics::for_viewport(viewport, layout.margin_px);
    let mapper = RadialMapper::new(count, scores.max_value());
    let max_value = scores.max_value();
    let RenderMetrics { center, radius, .. } = metrics;

    // Rings and labels map `max_value` at their own radius; the last ring
    // coincides with a full-score polygon.
    let grid_stroke = metrics.scaled(GRID_STROKE_PX);
    let grid_lines = layout.grid_lines.max(1);
    for ring in 1..=grid_lines {
        let ring_radius = radius * (f64::from(ring) / f64::from(grid_lines));
        frame.push_polygon(
            RadarLayerKind::Grid,
            PolygonPrimitive::outline(
                (0..count)
                    .map(|index| center + mapper.map_to_point(index, max_value, ring_radius)),
                grid_stroke,
                style.grid_color,
            ),
        );
    }

    for index in 0..count {
        let tip = center + mapper.map_to_point(index, max_value, radius);
        frame.push_line(
            RadarLayerKind::Spokes,
            LinePrimitive::between(center, tip, grid_stroke, style.grid_color),
        );
    }

    let label_radius = radius + metrics.scaled(LABEL_OFFSET_PX);
    let label_font = metrics.scaled(LABEL_FONT_PX);
    for (index, label) in scores.labels().iter().enumerate() {
        if label.is_empty() {
            continue;
        }
        let anchor = center + mapper.map_to_point(index, max_value, label_radius);
        frame.push_text(
            RadarLayerKind::Labels,
            TextPrimitive::centered(
                label.as_str(),
                anchor.x,
                anchor.y,
                label_font,
                style.label_color,
            )
            .bold(),
        );
    }

    let vertices: Vec<Point> = scores
        .values()
        .iter()
        .enumerate()
        .map(|(index, value)| center + mapper.map_to_point(index, *value, radius))
        .collect();
    frame.push_polygon(
        RadarLayerKind::Series,
        PolygonPrimitive::outline(
            vertices.iter().copied(),
            metrics.scaled(SERIES_STROKE_PX),
            style.stroke_color,
        )
        .with_fill(style.fill_color),
    );

    if style.show_points {
        for vertex in &vertices {
            frame.push_circle(
                RadarLayerKind::Markers,
                CirclePrimitive::new(
                    *vertex,
                    metrics.scaled(MARKER_RADIUS_PX),
                    style.point_color,
                    style.stroke_color,
                    metrics.scaled(MARKER_STROKE_PX),
                ),
            );
        }
    }

    if !layout.title.is_empty() {
        frame.push_text(
            RadarLayerKind::Title,
            TextPrimitive::centered(
                layout.title.as_str(),
                f64::from(viewport.width) / 2.0,
                metrics.scaled(TITLE_BAND_PX) / 2.0,
                metrics.scaled(TITLE_FONT_PX),
                style.label_color,
            )
            .bold(),
        );
    }

    frame
}
