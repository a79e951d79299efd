use emotion_radar::api::{
    RadarChart, RadarChartConfig, RadarLayout, RadarStyle, build_radar_frame,
};
use emotion_radar::core::{ScoreModel, Viewport};
use emotion_radar::render::{NullRenderer, RadarLayerKind};

fn chart(viewport: Viewport) -> RadarChart<NullRenderer> {
    RadarChart::new(NullRenderer::default(), RadarChartConfig::new(viewport)).expect("chart init")
}

#[test]
fn full_scores_coincide_with_outer_grid_ring() {
    let mut chart = chart(Viewport::new(480, 420));
    chart.set_values(vec![1.0; 8]);

    let frame = chart.build_render_frame().expect("frame");
    let grid = frame.layer(RadarLayerKind::Grid).expect("grid layer");
    let series = frame.layer(RadarLayerKind::Series).expect("series layer");

    assert_eq!(grid.polygons.len(), 5);
    let outer_ring = grid.polygons.last().expect("outer ring");
    let data_polygon = series.polygons.first().expect("data polygon");
    assert_eq!(data_polygon.points, outer_ring.points);
}

#[test]
fn full_scores_match_outer_ring_for_any_range_and_ring_count() {
    for (max_value, grid_lines) in [(0.7, 3), (0.1, 3), (2.5, 7), (100.0, 6), (3.3, 1)] {
        let mut chart = chart(Viewport::new(480, 420));
        chart.set_max_value(max_value);
        chart.set_grid_lines(grid_lines);
        chart.set_values(vec![max_value; 8]);

        let frame = chart.build_render_frame().expect("frame");
        let grid = frame.layer(RadarLayerKind::Grid).expect("grid layer");
        let series = frame.layer(RadarLayerKind::Series).expect("series layer");

        assert_eq!(grid.polygons.len(), grid_lines as usize);
        let outer_ring = grid.polygons.last().expect("outer ring");
        let data_polygon = series.polygons.first().expect("data polygon");
        assert_eq!(
            data_polygon.points, outer_ring.points,
            "max {max_value}, {grid_lines} rings"
        );
    }
}

#[test]
fn huge_max_value_still_renders() {
    let mut chart = chart(Viewport::new(320, 320));
    assert!(chart.set_max_value(1e307));
    chart.set_values(vec![1e307; 8]);
    chart.render().expect("render with 1e307 range");
    assert_eq!(chart.renderer().frames_rendered, 1);

    assert!(chart.set_max_value(f64::MAX));
    chart.set_values(vec![0.0; 8]);
    chart.render().expect("render with f64::MAX range");

    let frame = chart.build_render_frame().expect("frame");
    let label = &frame.layer(RadarLayerKind::Labels).expect("labels").texts[0];
    assert!((label.y - 18.0).abs() <= 1e-9);
}

#[test]
fn layers_follow_canonical_draw_order() {
    let frame = chart(Viewport::new(320, 320))
        .build_render_frame()
        .expect("frame");
    let kinds: Vec<RadarLayerKind> = frame.layers.iter().map(|layer| layer.kind).collect();
    assert_eq!(kinds, RadarLayerKind::CANONICAL_ORDER.to_vec());
}

#[test]
fn grid_rings_are_evenly_spaced_fractions_of_radius() {
    let mut chart = chart(Viewport::new(320, 320));
    assert!(chart.set_grid_lines(4));
    let frame = chart.build_render_frame().expect("frame");
    let grid = frame.layer(RadarLayerKind::Grid).expect("grid layer");

    // 320px reference: center (160, 170), radius 160 - 24 = 136.
    let tops: Vec<f64> = grid.polygons.iter().map(|ring| ring.points[0].y).collect();
    let expected = [170.0 - 34.0, 170.0 - 68.0, 170.0 - 102.0, 170.0 - 136.0];
    for (top, expected) in tops.iter().zip(expected) {
        assert!((top - expected).abs() <= 1e-9, "ring top {top} != {expected}");
    }
    assert!(grid.polygons.iter().all(|ring| ring.fill_color.is_none()));
}

#[test]
fn one_spoke_and_label_per_category() {
    let mut chart = chart(Viewport::new(400, 400));
    assert!(chart.set_labels(["A", "B", "C", "D", "E"]));
    let frame = chart.build_render_frame().expect("frame");

    assert_eq!(frame.layer(RadarLayerKind::Spokes).expect("spokes").lines.len(), 5);
    let labels = &frame.layer(RadarLayerKind::Labels).expect("labels").texts;
    assert_eq!(labels.len(), 5);
    // 400px surface: scale 1.25, center (200, 212.5), label radius 200 - 30 + 20.
    for text in labels {
        let distance = (text.x - 200.0).hypot(text.y - 212.5);
        assert!((distance - 190.0).abs() <= 1e-9, "label anchor at {distance}");
    }

    let metrics_center_y = 400.0 / 2.0 + 10.0 * 1.25;
    assert!(labels[0].y < metrics_center_y);
    assert!((labels[0].x - 200.0).abs() <= 1e-9);
}

#[test]
fn labels_sit_outside_the_outer_ring() {
    let frame = chart(Viewport::new(320, 320))
        .build_render_frame()
        .expect("frame");
    let label = &frame.layer(RadarLayerKind::Labels).expect("labels").texts[0];
    // Outer ring top is at 170 - 136 = 34; label gap is 16px at reference size.
    assert!((label.y - 18.0).abs() <= 1e-9);
    assert_eq!(label.text, "Happy");
}

#[test]
fn hiding_points_drops_marker_layer_content() {
    let mut chart = chart(Viewport::new(320, 320));
    assert_eq!(
        chart
            .build_render_frame()
            .expect("frame")
            .layer(RadarLayerKind::Markers)
            .expect("markers")
            .circles
            .len(),
        8
    );

    assert!(chart.set_show_points(false));
    let frame = chart.build_render_frame().expect("frame");
    assert!(frame.layer(RadarLayerKind::Markers).expect("markers").is_empty());
}

#[test]
fn empty_title_is_not_drawn() {
    let mut chart = chart(Viewport::new(320, 320));
    assert!(chart.set_title(""));
    let frame = chart.build_render_frame().expect("frame");
    assert!(frame.layer(RadarLayerKind::Title).expect("title").is_empty());
}

#[test]
fn zero_categories_render_background_only() {
    let scores = ScoreModel::with_labels(Vec::new(), 1.0);
    let frame = build_radar_frame(
        Viewport::new(300, 300),
        &scores,
        &RadarLayout::default(),
        &RadarStyle::default(),
    );

    let background = frame.layer(RadarLayerKind::Background).expect("background");
    assert_eq!(background.rects.len(), 1);
    assert!(frame
        .layers
        .iter()
        .filter(|layer| layer.kind != RadarLayerKind::Background)
        .all(|layer| layer.is_empty()));
    frame.validate().expect("background-only frame is valid");
}

#[test]
fn stroke_widths_scale_with_surface_size() {
    let small = chart(Viewport::new(320, 320)).build_render_frame().expect("frame");
    let large = chart(Viewport::new(640, 640)).build_render_frame().expect("frame");

    let small_stroke = small.layer(RadarLayerKind::Series).expect("series").polygons[0].stroke_width;
    let large_stroke = large.layer(RadarLayerKind::Series).expect("series").polygons[0].stroke_width;
    assert!((small_stroke - 2.0).abs() <= 1e-12);
    assert!((large_stroke - 4.0).abs() <= 1e-12);
}

#[test]
fn frame_build_is_deterministic() {
    let mut chart = chart(Viewport::new(500, 300));
    chart.set_values(vec![0.1, 0.9, 0.5, 0.3, 0.7, 0.2, 0.0, 1.0]);
    let first = chart.build_render_frame().expect("first");
    let second = chart.build_render_frame().expect("second");
    assert_eq!(first, second);
}
