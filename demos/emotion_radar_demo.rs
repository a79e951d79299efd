//! Live demo: a window whose radar chart receives random emotion scores.

#[cfg(feature = "gtk4-adapter")]
fn main() {
    use std::rc::Rc;

    use emotion_radar::api::{RadarChart, RadarChartConfig};
    use emotion_radar::demo::{DEMO_UPDATE_INTERVAL, ScoreFeed};
    use emotion_radar::platform_gtk::GtkRadarAdapter;
    use emotion_radar::render::{CairoRenderer, Color};
    use gtk4 as gtk;
    use gtk4::prelude::*;

    let _ = emotion_radar::telemetry::init_default_tracing();

    let app = gtk::Application::builder()
        .application_id("rs.emotion_radar.demo")
        .build();

    app.connect_activate(|app| {
        let config = RadarChartConfig::default()
            .with_title("Live Emotion Distribution")
            .with_fill_color(Color::from_rgba8(63, 167, 255, 120))
            .with_stroke_color(Color::from_rgb8(63, 167, 255))
            .with_point_color(Color::from_rgb8(255, 255, 255));

        let chart = match CairoRenderer::new(1, 1)
            .and_then(|renderer| RadarChart::new(renderer, config))
        {
            Ok(chart) => chart,
            Err(err) => {
                eprintln!("failed to initialize radar chart: {err}");
                return;
            }
        };

        let adapter = Rc::new(GtkRadarAdapter::new(chart));

        let window = gtk::ApplicationWindow::builder()
            .application(app)
            .title("Emotion Radar Demo")
            .default_width(480)
            .default_height(420)
            .build();
        let layout = gtk::Box::new(gtk::Orientation::Vertical, 0);
        layout.append(adapter.drawing_area());
        window.set_child(Some(&layout));

        let mut feed = ScoreFeed::from_entropy();
        gtk::glib::timeout_add_local(DEMO_UPDATE_INTERVAL, {
            let adapter = Rc::clone(&adapter);
            move || {
                adapter.with_chart_mut(|chart| feed.tick(chart));
                gtk::glib::ControlFlow::Continue
            }
        });

        window.present();
    });

    let _ = app.run();
}

#[cfg(not(feature = "gtk4-adapter"))]
fn main() {
    println!("run with: cargo run --features desktop --example emotion_radar_demo");
}
