use crate::core::mapper::CoordinateMapper;
use crate::core::{ChartKind, RegionMode};
use crate::extensions::InteractionEvent;
use crate::interaction::Modality;
use crate::render::ShapeRenderer;

use super::InteractionEngine;

impl<R: ShapeRenderer, M: CoordinateMapper> InteractionEngine<R, M> {
    /// Enters the dragging state. Hover transitions are suppressed until
    /// `drag_end`. Requires draggable selection; radial charts never drag.
    pub fn drag_start(&mut self, x: f64, y: f64) {
        if self.destroyed || !self.interaction_enabled {
            return;
        }
        if !self.selection.draggable || self.chart == ChartKind::Radial {
            return;
        }
        if !self.state.begin_drag() {
            return;
        }
        self.drag_moved = false;
        self.state.record_coords(x, y);
        self.emit_event(InteractionEvent::DragStarted { x, y });
    }

    pub fn drag_move(&mut self, x: f64, y: f64) {
        if self.destroyed || !self.state.is_dragging() {
            return;
        }
        self.drag_moved = true;
        self.state.record_coords(x, y);
        self.emit_event(InteractionEvent::Dragged { x, y });
    }

    /// Leaves the dragging state, arms the one-shot click cancellation when
    /// the drag actually moved, and re-resolves hover from the last known
    /// pointer position.
    pub fn drag_end(&mut self) {
        if self.destroyed || !self.state.end_drag() {
            return;
        }
        if self.drag_moved {
            self.state.arm_cancel_click();
            self.drag_moved = false;
        }
        self.emit_event(InteractionEvent::DragEnded);

        let Some((x, y)) = self.state.last_coords() else {
            return;
        };
        if self.chart == ChartKind::Radial {
            return;
        }
        match self.layout {
            RegionMode::MultiSeries => self.select_for_multi(x, y),
            RegionMode::SingleIndex => match self.region_at(x, y).map(|region| region.index) {
                Some(index) => {
                    let modality = self.state.modality().unwrap_or(Modality::Mouse);
                    self.select_for_single(index, (x, y), modality);
                }
                None => self.unselect(),
            },
        }
    }
}
