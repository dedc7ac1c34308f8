use serde::{Deserialize, Serialize};

use crate::core::mapper::CoordinateMapper;
use crate::core::{ChartKind, Orientation, RegionMode};
use crate::interaction::{GesturePhase, Modality};
use crate::render::ShapeRenderer;

use super::InteractionEngine;

/// Lifecycle phase of a normalized pointer event.
///
/// Mouse sessions use `Enter`/`Move`/`Leave`/`Click`; touch sessions map
/// touch-start to `Enter`, touch-move to `Move`, and touch-end to `End`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    Enter,
    Move,
    Leave,
    Click,
    End,
}

/// One normalized input event. Every entry point, live or synthetic, funnels
/// into this shape before any interaction logic runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub modality: Modality,
    pub phase: PointerPhase,
    pub x: f64,
    pub y: f64,
}

impl<R: ShapeRenderer, M: CoordinateMapper> InteractionEngine<R, M> {
    pub fn pointer_over(&mut self, x: f64, y: f64) {
        self.route(PointerEvent {
            modality: Modality::Mouse,
            phase: PointerPhase::Enter,
            x,
            y,
        });
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.route(PointerEvent {
            modality: Modality::Mouse,
            phase: PointerPhase::Move,
            x,
            y,
        });
    }

    pub fn pointer_out(&mut self) {
        let (x, y) = self.state.last_coords().unwrap_or((-1.0, -1.0));
        self.route(PointerEvent {
            modality: Modality::Mouse,
            phase: PointerPhase::Leave,
            x,
            y,
        });
    }

    pub fn pointer_click(&mut self, x: f64, y: f64) {
        self.route(PointerEvent {
            modality: Modality::Mouse,
            phase: PointerPhase::Click,
            x,
            y,
        });
    }

    /// Returns whether the host should suppress default platform scrolling
    /// for this touch event.
    pub fn touch_start(&mut self, x: f64, y: f64) -> bool {
        self.route(PointerEvent {
            modality: Modality::Touch,
            phase: PointerPhase::Enter,
            x,
            y,
        })
    }

    pub fn touch_move(&mut self, x: f64, y: f64) -> bool {
        self.route(PointerEvent {
            modality: Modality::Touch,
            phase: PointerPhase::Move,
            x,
            y,
        })
    }

    pub fn touch_end(&mut self) {
        let (x, y) = self.state.last_coords().unwrap_or((-1.0, -1.0));
        self.route(PointerEvent {
            modality: Modality::Touch,
            phase: PointerPhase::End,
            x,
            y,
        });
    }

    /// Routes one normalized event. The return value is only meaningful for
    /// touch phases (scroll suppression).
    pub fn route(&mut self, event: PointerEvent) -> bool {
        if self.destroyed || !self.interaction_enabled {
            return false;
        }

        let hover_phase = matches!(
            event.phase,
            PointerPhase::Enter | PointerPhase::Move | PointerPhase::Leave
        );
        if hover_phase && !self.state.admit_modality(event.modality) {
            // First-seen modality owns hover for the session.
            return false;
        }

        match (event.modality, event.phase) {
            (_, PointerPhase::Click) => {
                self.handle_click(event.x, event.y);
                false
            }
            (Modality::Mouse, PointerPhase::Enter | PointerPhase::Move) => {
                self.mouse_move_at(event.x, event.y);
                false
            }
            (Modality::Mouse, PointerPhase::Leave) => {
                self.mouse_leave();
                false
            }
            (Modality::Mouse, PointerPhase::End) => false,
            (Modality::Touch, PointerPhase::Enter) => {
                self.touch_at(GesturePhase::Start, event.x, event.y)
            }
            (Modality::Touch, PointerPhase::Move) => {
                self.touch_at(GesturePhase::Move, event.x, event.y)
            }
            (Modality::Touch, PointerPhase::Leave) => {
                self.unselect();
                false
            }
            (Modality::Touch, PointerPhase::End) => false,
        }
    }

    fn mouse_move_at(&mut self, x: f64, y: f64) {
        if self.state.hover_suppressed() {
            return;
        }
        self.state.record_coords(x, y);

        if self.chart == ChartKind::Radial {
            self.select_arc(x, y);
            return;
        }

        match self.layout {
            RegionMode::MultiSeries => self.select_for_multi(x, y),
            RegionMode::SingleIndex => {
                let region_index = self.region_at(x, y).map(|region| region.index);
                match region_index.and_then(|index| self.step_adjusted_index(index, (x, y))) {
                    Some(index) => self.select_for_single(index, (x, y), Modality::Mouse),
                    None => self.unselect(),
                }
            }
        }
    }

    fn mouse_leave(&mut self) {
        if self.chart == ChartKind::Radial {
            self.select_arc_leave();
            return;
        }
        self.unselect();
    }

    fn touch_at(&mut self, gesture_phase: GesturePhase, x: f64, y: f64) -> bool {
        if self.chart == ChartKind::Radial {
            return false;
        }
        if self.region_at(x, y).is_none() {
            // Finger left every region.
            self.unselect();
            return false;
        }
        if self.state.hover_suppressed() {
            return false;
        }

        let along = match self.orientation {
            Orientation::Standard => x,
            Orientation::Rotated => y,
        };
        let prevent = self.gesture.on_gesture_event(gesture_phase, along);
        self.state.record_coords(x, y);

        match self.layout {
            RegionMode::MultiSeries => self.select_for_multi(x, y),
            RegionMode::SingleIndex => {
                if let Some(region) = self.region_at(x, y) {
                    self.select_for_single(region.index, (x, y), Modality::Touch);
                }
            }
        }
        prevent
    }
}
