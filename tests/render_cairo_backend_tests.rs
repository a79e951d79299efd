#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use emotion_radar::RadarError;
use emotion_radar::api::{RadarChart, RadarChartConfig};
use emotion_radar::core::Viewport;
use emotion_radar::render::CairoRenderer;

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, RadarError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_every_layer() {
    let renderer = CairoRenderer::new(480, 420).expect("renderer");
    let mut chart =
        RadarChart::new(renderer, RadarChartConfig::new(Viewport::new(480, 420))).expect("init");
    chart.set_values(vec![0.9, 0.1, 0.4, 0.2, 0.3, 0.6, 0.5, 0.05]);

    chart.render().expect("render");
    let stats = chart.into_renderer().last_stats();

    assert_eq!(stats.rects_drawn, 1);
    assert_eq!(stats.polygons_drawn, 6);
    assert_eq!(stats.lines_drawn, 8);
    assert_eq!(stats.circles_drawn, 8);
    assert_eq!(stats.texts_drawn, 9);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(1, 1).expect("renderer");
    let mut chart =
        RadarChart::new(renderer, RadarChartConfig::new(Viewport::new(600, 320))).expect("init");
    assert!(chart.set_show_points(false));

    let surface = ImageSurface::create(Format::ARgb32, 600, 320).expect("surface");
    let context = Context::new(&surface).expect("context");
    chart
        .render_on_cairo_context(&context)
        .expect("render on context");

    let stats = chart.into_renderer().last_stats();
    assert_eq!(stats.circles_drawn, 0);
    assert_eq!(stats.polygons_drawn, 6);
}
