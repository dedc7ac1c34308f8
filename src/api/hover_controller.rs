use crate::core::mapper::CoordinateMapper;
use crate::core::{CursorHint, Orientation, SeriesId, StepKind};
use crate::extensions::InteractionEvent;
use crate::interaction::{HitTarget, HoverTransition, Modality};
use crate::render::{ShapeRef, ShapeRenderer};

use super::InteractionEngine;

impl<R: ShapeRenderer, M: CoordinateMapper> InteractionEngine<R, M> {
    /// Single-index hover: fires ordered out/over transitions for the index,
    /// then tooltip orchestration, then cursor feedback.
    pub(super) fn select_for_single(
        &mut self,
        index: usize,
        pointer: (f64, f64),
        modality: Modality,
    ) {
        if self.series.points_at(index).is_empty() {
            // Stale index after a concurrent redraw: no target, no callback.
            self.unselect();
            return;
        }

        let next = Some(HitTarget::Index(index));
        let transitions = match modality {
            Modality::Mouse => self.state.hover_to(next),
            Modality::Touch => self.state.touch_hover_to(next),
        };
        self.apply_hover_transitions(&transitions);

        let tooltip_series = if self.tooltip.grouped {
            None
        } else {
            self.first_shape_under_pointer(index, pointer)
        };
        if self.tooltip.grouped || tooltip_series.is_some() {
            self.show_tooltip(index, tooltip_series);
        } else {
            self.hide_tooltip();
        }

        if self.selection.enabled {
            self.cursor = CursorHint::Pointer;
        }
    }

    /// Multi-series hover: nearest point wins; `over` only fires when the
    /// pointer is within the configured sensitivity radius of it.
    pub(super) fn select_for_multi(&mut self, x: f64, y: f64) {
        let closest = self.resolve_closest(x, y);

        let changed = match (self.closest_over, closest) {
            (Some(previous), Some(next)) => {
                previous.series != next.series || previous.index != next.index
            }
            (Some(_), None) => true,
            _ => false,
        };
        if changed {
            if let Some(previous) = self.closest_over.take() {
                if self.focus_expand {
                    self.renderer.set_expanded(
                        ShapeRef::Point {
                            series: previous.series,
                            index: previous.index,
                        },
                        false,
                    );
                }
                self.emit_event(InteractionEvent::Out(previous));
            }
        }

        let Some(closest) = closest else {
            self.unselect();
            return;
        };

        let radius_sq = self.point_sensitivity * self.point_sensitivity;
        if self.closest_over.is_none() && self.distance_sq_to(closest, (x, y)) < radius_sq {
            if self.focus_expand {
                self.renderer.set_expanded(
                    ShapeRef::Point {
                        series: closest.series,
                        index: closest.index,
                    },
                    true,
                );
            }
            self.emit_event(InteractionEvent::Over(closest));
            self.closest_over = Some(closest);
            self.cursor = CursorHint::Pointer;
        }

        let tooltip_series = if self.tooltip.grouped {
            None
        } else {
            Some(closest.series)
        };
        self.show_tooltip(closest.index, tooltip_series);
    }

    /// Radial hover: slice membership is renderer geometry, not distance.
    pub(super) fn select_arc(&mut self, x: f64, y: f64) {
        let slice = self.resolve_arc_slice((x, y));
        let transitions = self.state.hover_to(slice.map(HitTarget::Arc));
        self.apply_hover_transitions(&transitions);
        match slice {
            Some(slice) => self.show_tooltip(0, Some(slice)),
            None => self.hide_tooltip(),
        }
    }

    pub(super) fn select_arc_leave(&mut self) {
        let transitions = self.state.hover_to(None);
        self.apply_hover_transitions(&transitions);
        self.hide_tooltip();
    }

    /// Clears hover, tooltip, focus expansion, and cursor feedback. Safe to
    /// call repeatedly; `out` fires at most once per hovered target.
    pub(super) fn unselect(&mut self) {
        let transitions = self.state.hover_to(None);
        self.apply_hover_transitions(&transitions);

        if let Some(previous) = self.closest_over.take() {
            if self.focus_expand {
                self.renderer.set_expanded(
                    ShapeRef::Point {
                        series: previous.series,
                        index: previous.index,
                    },
                    false,
                );
            }
            self.emit_event(InteractionEvent::Out(previous));
        }

        self.hide_tooltip();
        self.cursor = self.base_cursor_hint();
    }

    pub(super) fn apply_hover_transitions(&mut self, transitions: &[HoverTransition]) {
        for transition in transitions {
            match *transition {
                HoverTransition::Out(target) => self.emit_out(target),
                HoverTransition::Over(target) => self.emit_over(target),
            }
        }
    }

    fn emit_over(&mut self, target: HitTarget) {
        match target {
            HitTarget::Index(index) => {
                let points = self.series.points_at(index);
                if self.focus_expand {
                    for point in &points {
                        self.renderer.set_expanded(
                            ShapeRef::Point {
                                series: point.series,
                                index,
                            },
                            true,
                        );
                    }
                }
                for point in points {
                    self.emit_event(InteractionEvent::Over(point));
                }
            }
            HitTarget::Arc(slice) => {
                if self.focus_expand {
                    self.renderer.set_expanded(ShapeRef::Arc { slice }, true);
                }
                if let Some(point) = self.series.point(slice, 0) {
                    self.emit_event(InteractionEvent::Over(point));
                }
            }
        }
    }

    fn emit_out(&mut self, target: HitTarget) {
        match target {
            HitTarget::Index(index) => {
                let points = self.series.points_at(index);
                if self.focus_expand {
                    for point in &points {
                        self.renderer.set_expanded(
                            ShapeRef::Point {
                                series: point.series,
                                index,
                            },
                            false,
                        );
                    }
                }
                for point in points {
                    self.emit_event(InteractionEvent::Out(point));
                }
            }
            HitTarget::Arc(slice) => {
                if self.focus_expand {
                    self.renderer.set_expanded(ShapeRef::Arc { slice }, false);
                }
                if let Some(point) = self.series.point(slice, 0) {
                    self.emit_event(InteractionEvent::Out(point));
                }
            }
        }
    }

    fn first_shape_under_pointer(&self, index: usize, pointer: (f64, f64)) -> Option<SeriesId> {
        self.series
            .points_at(index)
            .iter()
            .find(|point| {
                self.renderer.is_pixel_inside(
                    ShapeRef::Point {
                        series: point.series,
                        index,
                    },
                    pointer,
                )
            })
            .map(|point| point.series)
    }

    fn show_tooltip(&mut self, index: usize, series: Option<SeriesId>) {
        if self.tooltip_target == Some((index, series)) {
            return;
        }
        self.tooltip_target = Some((index, series));
        self.emit_event(InteractionEvent::TooltipShown { index, series });
    }

    pub(super) fn hide_tooltip(&mut self) {
        if self.tooltip_target.take().is_some() {
            self.emit_event(InteractionEvent::TooltipHidden);
        }
    }

    /// Step-line adjustment: with `step-after` interpolation a mouse pointer
    /// left of the sample's mapped x belongs to the previous step. Mouse
    /// input only; the touch path never applies it.
    pub(super) fn step_adjusted_index(&self, index: usize, pointer: (f64, f64)) -> Option<usize> {
        if self.step != Some(StepKind::StepAfter) {
            return Some(index);
        }
        let positions = self.series.x_positions(self.axis);
        let value = *positions.get(index)?;
        let along = match self.orientation {
            Orientation::Standard => pointer.0,
            Orientation::Rotated => pointer.1,
        };
        if along < self.x_mapper.to_pixel(value) {
            index.checked_sub(1)
        } else {
            Some(index)
        }
    }
}
