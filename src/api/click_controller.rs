use crate::core::mapper::CoordinateMapper;
use crate::core::{ChartKind, DataPoint, RegionMode};
use crate::extensions::InteractionEvent;
use crate::render::{ShapeRef, ShapeRenderer};

use super::InteractionEngine;

impl<R: ShapeRenderer, M: CoordinateMapper> InteractionEngine<R, M> {
    /// Click resolution. A click completing a drag gesture is swallowed
    /// once; radial charts have no toggle support and are a no-op.
    pub(super) fn handle_click(&mut self, x: f64, y: f64) {
        if self.state.take_cancel_click() {
            return;
        }
        if self.chart == ChartKind::Radial {
            return;
        }

        match self.layout {
            RegionMode::SingleIndex => {
                let Some(region) = self.region_at(x, y) else {
                    return;
                };
                self.click_index(region.index, (x, y));
            }
            RegionMode::MultiSeries => {
                let Some(closest) = self.resolve_closest(x, y) else {
                    return;
                };
                let radius_sq = self.point_sensitivity * self.point_sensitivity;
                if self.distance_sq_to(closest, (x, y)) >= radius_sq {
                    return;
                }
                self.click_point(closest, (x, y));
            }
        }
    }

    fn click_index(&mut self, index: usize, pointer: (f64, f64)) {
        let points = self.series.points_at(index);
        for point in points {
            self.click_point(point, pointer);
        }
    }

    fn click_point(&mut self, point: DataPoint, pointer: (f64, f64)) {
        let shape = ShapeRef::Point {
            series: point.series,
            index: point.index,
        };
        if !self.selection.grouped && !self.renderer.is_pixel_inside(shape, pointer) {
            return;
        }
        let selected = self.selection.enabled && self.renderer.toggle_selected(shape);
        self.emit_event(InteractionEvent::Click {
            point,
            shape,
            selected,
        });
    }
}
