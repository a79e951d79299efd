use cairo::{Context, Format, ImageSurface, LineCap, LineJoin};
use pango::{FontDescription, Weight};
use std::f64::consts::TAU;

use crate::error::{RadarError, RadarResult};
use crate::render::{
    CirclePrimitive, Color, LayerPrimitives, PolygonPrimitive, RenderFrame, Renderer,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rects_drawn: usize,
    pub polygons_drawn: usize,
    pub lines_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> RadarResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> RadarResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(RadarError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgba(0.0, 0.0, 0.0, 0.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> RadarResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> RadarResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        context.set_line_cap(LineCap::Round);
        context.set_line_join(LineJoin::Round);

        let mut stats = CairoRenderStats::default();
        for layer in &frame.layers {
            draw_layer(context, layer, &mut stats)?;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> RadarResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> RadarResult<()> {
        self.render_with_context(context, frame)
    }
}

fn draw_layer(
    context: &Context,
    layer: &LayerPrimitives,
    stats: &mut CairoRenderStats,
) -> RadarResult<()> {
    for rect in &layer.rects {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        apply_color(context, rect.fill_color);
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        stats.rects_drawn += 1;
    }

    for polygon in &layer.polygons {
        draw_polygon(context, polygon)?;
        stats.polygons_drawn += 1;
    }

    for line in &layer.lines {
        apply_color(context, line.color);
        context.set_line_width(line.stroke_width);
        context.move_to(line.x1, line.y1);
        context.line_to(line.x2, line.y2);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))?;
        stats.lines_drawn += 1;
    }

    for circle in &layer.circles {
        draw_circle(context, *circle)?;
        stats.circles_drawn += 1;
    }

    for text in &layer.texts {
        let layout = pangocairo::functions::create_layout(context);
        let mut font_description = FontDescription::from_string("Sans");
        font_description.set_absolute_size(text.font_size_px * f64::from(pango::SCALE));
        if text.bold {
            font_description.set_weight(Weight::Bold);
        }
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, text_height) = layout.pixel_size();
        let x = text.x - f64::from(text_width) / 2.0;
        let y = text.y - f64::from(text_height) / 2.0;

        apply_color(context, text.color);
        context.move_to(x, y);
        pangocairo::functions::show_layout(context, &layout);
        stats.texts_drawn += 1;
    }

    Ok(())
}

fn draw_polygon(context: &Context, polygon: &PolygonPrimitive) -> RadarResult<()> {
    let mut points = polygon.points.iter();
    let Some(first) = points.next() else {
        return Ok(());
    };

    context.new_path();
    context.move_to(first.x, first.y);
    for point in points {
        context.line_to(point.x, point.y);
    }
    context.close_path();

    if let Some(fill_color) = polygon.fill_color {
        apply_color(context, fill_color);
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill polygon", err))?;
    }

    apply_color(context, polygon.stroke_color);
    context.set_line_width(polygon.stroke_width);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke polygon", err))
}

fn draw_circle(context: &Context, circle: CirclePrimitive) -> RadarResult<()> {
    context.new_path();
    context.arc(circle.center.x, circle.center.y, circle.radius, 0.0, TAU);
    apply_color(context, circle.fill_color);
    context
        .fill_preserve()
        .map_err(|err| map_backend_error("failed to fill circle", err))?;
    apply_color(context, circle.stroke_color);
    context.set_line_width(circle.stroke_width);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke circle", err))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> RadarError {
    RadarError::InvalidData(format!("{prefix}: {err}"))
}
