use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::{ListenerId, RadarChart};
use crate::core::Viewport;
use crate::render::CairoRenderer;

pub type SharedRadarChart = Rc<RefCell<RadarChart<CairoRenderer>>>;

/// Hosts a radar chart inside a `gtk::DrawingArea`.
///
/// Accepted chart mutations queue a redraw through a change listener; the
/// draw callback syncs the viewport to the allocated size before rendering.
pub struct GtkRadarAdapter {
    chart: SharedRadarChart,
    drawing_area: gtk::DrawingArea,
    listener: ListenerId,
}

impl GtkRadarAdapter {
    #[must_use]
    pub fn new(chart: RadarChart<CairoRenderer>) -> Self {
        let preferred = chart.size_hint();
        let minimum = chart.minimum_size();

        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_content_width(i32::try_from(preferred.width).unwrap_or(i32::MAX));
        drawing_area.set_content_height(i32::try_from(preferred.height).unwrap_or(i32::MAX));
        drawing_area.set_size_request(
            i32::try_from(minimum.width).unwrap_or(i32::MAX),
            i32::try_from(minimum.height).unwrap_or(i32::MAX),
        );
        drawing_area.set_hexpand(true);
        drawing_area.set_vexpand(true);

        let chart = Rc::new(RefCell::new(chart));

        let listener = chart.borrow_mut().connect({
            let area = drawing_area.downgrade();
            move |_property| {
                if let Some(area) = area.upgrade() {
                    area.queue_draw();
                }
            }
        });

        drawing_area.set_draw_func({
            let chart = Rc::clone(&chart);
            move |_area, context, width, height| {
                let Ok(mut chart) = chart.try_borrow_mut() else {
                    warn!("skipping radar redraw while chart is borrowed");
                    return;
                };
                let viewport = Viewport::new(
                    u32::try_from(width).unwrap_or(0),
                    u32::try_from(height).unwrap_or(0),
                );
                if let Err(err) = chart.set_viewport(viewport) {
                    warn!(error = %err, "skipping radar redraw for unusable surface");
                    return;
                }
                if let Err(err) = chart.render_on_cairo_context(context) {
                    warn!(error = %err, "radar chart render failed");
                }
            }
        });

        drawing_area.connect_resize(|area, _width, _height| area.queue_draw());

        Self {
            chart,
            drawing_area,
            listener,
        }
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    #[must_use]
    pub fn chart(&self) -> SharedRadarChart {
        Rc::clone(&self.chart)
    }

    /// Runs `update` against the hosted chart.
    pub fn with_chart_mut<T>(&self, update: impl FnOnce(&mut RadarChart<CairoRenderer>) -> T) -> T {
        update(&mut self.chart.borrow_mut())
    }
}

impl Drop for GtkRadarAdapter {
    fn drop(&mut self) {
        if let Ok(mut chart) = self.chart.try_borrow_mut() {
            chart.disconnect(self.listener);
        }
    }
}
