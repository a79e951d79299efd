use emotion_radar::api::{RadarChart, RadarChartConfig};
use emotion_radar::core::{DEFAULT_EMOTION_LABELS, Viewport};
use emotion_radar::render::NullRenderer;

#[test]
fn chart_smoke_flow() {
    let renderer = NullRenderer::default();
    let mut chart =
        RadarChart::new(renderer, RadarChartConfig::new(Viewport::new(480, 420))).expect("init");

    assert_eq!(chart.labels(), DEFAULT_EMOTION_LABELS.map(String::from).as_slice());
    assert_eq!(chart.values(), &[0.0; 8]);
    assert_eq!(chart.max_value(), 1.0);
    assert_eq!(chart.grid_lines(), 5);
    assert_eq!(chart.margin_px(), 24);
    assert!(chart.show_points());
    assert_eq!(chart.title(), "Emotion Radar");
    assert_eq!(chart.size_hint(), Viewport::new(320, 320));
    assert_eq!(chart.minimum_size(), Viewport::new(200, 200));
    assert!(chart.needs_redraw());

    assert!(chart.set_value("Happy", 0.75));
    chart.render().expect("render should succeed");
    assert!(!chart.needs_redraw());

    let renderer = chart.into_renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_line_count, 8);
    assert_eq!(renderer.last_polygon_count, 6);
    assert_eq!(renderer.last_circle_count, 8);
    assert_eq!(renderer.last_text_count, 9);
}

#[test]
fn invalid_viewport_is_rejected_at_construction() {
    let result = RadarChart::new(
        NullRenderer::default(),
        RadarChartConfig::new(Viewport::new(0, 300)),
    );
    assert!(matches!(
        result,
        Err(emotion_radar::RadarError::InvalidViewport { width: 0, .. })
    ));
}

#[test]
fn resize_marks_redraw_without_error_for_valid_size() {
    let mut chart =
        RadarChart::new(NullRenderer::default(), RadarChartConfig::default()).expect("init");
    chart.render().expect("render");
    assert!(!chart.needs_redraw());

    chart.set_viewport(Viewport::new(640, 480)).expect("resize");
    assert!(chart.needs_redraw());
    assert!(chart.set_viewport(Viewport::new(640, 0)).is_err());
    assert_eq!(chart.viewport(), Viewport::new(640, 480));
}

#[test]
fn exported_config_rebuilds_identical_chart() {
    let mut chart =
        RadarChart::new(NullRenderer::default(), RadarChartConfig::default()).expect("init");
    assert!(chart.set_labels(["Calm", "Tense", "Bored"]));
    chart.set_values(vec![0.2, 0.9, 0.4]);
    assert!(chart.set_title("Session 12"));
    assert!(chart.set_grid_lines(4));

    let json = chart.config().to_json_pretty().expect("serialize");
    let config = RadarChartConfig::from_json_str(&json).expect("parse");
    let rebuilt = RadarChart::new(NullRenderer::default(), config).expect("rebuild");

    assert_eq!(rebuilt.labels(), chart.labels());
    assert_eq!(rebuilt.values(), chart.values());
    assert_eq!(rebuilt.title(), "Session 12");
    assert_eq!(rebuilt.grid_lines(), 4);
    assert_eq!(rebuilt.style(), chart.style());
}
