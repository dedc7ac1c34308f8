use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::mapper::CoordinateMapper;
use crate::core::{ChartKind, DataPoint, Orientation, SeriesId};
use crate::render::{ShapeRef, ShapeRenderer};

use super::InteractionEngine;

impl<R: ShapeRenderer, M: CoordinateMapper> InteractionEngine<R, M> {
    /// Nearest visible data point to the pointer, by squared pixel distance.
    /// Ties go to the first series in declared order. Radial charts resolve
    /// by slice geometry instead.
    pub(super) fn resolve_closest(&self, x: f64, y: f64) -> Option<DataPoint> {
        if self.chart == ChartKind::Radial {
            return self
                .resolve_arc_slice((x, y))
                .and_then(|slice| self.series.point(slice, 0));
        }

        let mut candidates: SmallVec<[(OrderedFloat<f64>, DataPoint); 4]> = SmallVec::new();
        for (id, series) in self.series.visible() {
            let mut best: Option<(OrderedFloat<f64>, DataPoint)> = None;
            for index in 0..series.len() {
                let (Some(vx), Some(vy)) = (series.x_at(index), series.y_at(index)) else {
                    continue;
                };
                let point = DataPoint::new(id, index, vx, vy);
                let distance = OrderedFloat(self.distance_sq_to(point, (x, y)));
                match best {
                    Some((incumbent, _)) if incumbent <= distance => {}
                    _ => best = Some((distance, point)),
                }
            }
            if let Some(candidate) = best {
                candidates.push(candidate);
            }
        }

        let mut winner: Option<(OrderedFloat<f64>, DataPoint)> = None;
        for candidate in candidates {
            match winner {
                Some((incumbent, _)) if incumbent <= candidate.0 => {}
                _ => winner = Some(candidate),
            }
        }
        winner.map(|(_, point)| point)
    }

    /// First visible slice whose geometry contains the pixel.
    pub(super) fn resolve_arc_slice(&self, pixel: (f64, f64)) -> Option<SeriesId> {
        self.series
            .visible()
            .map(|(id, _)| id)
            .find(|&slice| self.renderer.is_pixel_inside(ShapeRef::Arc { slice }, pixel))
    }

    /// Projects a data point to surface pixels; rotated charts swap axes.
    pub(super) fn projected(&self, point: DataPoint) -> (f64, f64) {
        let along = self.x_mapper.to_pixel(point.x);
        let cross = self.y_mapper.to_pixel(point.y);
        match self.orientation {
            Orientation::Standard => (along, cross),
            Orientation::Rotated => (cross, along),
        }
    }

    pub(super) fn distance_sq_to(&self, point: DataPoint, pixel: (f64, f64)) -> f64 {
        let (sx, sy) = self.projected(point);
        let dx = sx - pixel.0;
        let dy = sy - pixel.1;
        dx * dx + dy * dy
    }
}
