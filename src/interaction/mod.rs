pub mod gesture;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::SeriesId;

pub use gesture::{GesturePhase, GestureThreshold, TouchPreventMode};

/// Input modality of a pointer session. The first modality seen locks the
/// session; hover input from the other modality is ignored afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modality {
    Mouse,
    Touch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Hovering,
    Dragging,
}

/// What the pointer currently rests on.
///
/// Cartesian charts address targets by shared x-index; radial charts by
/// slice. The tagged split keeps index targets and slice targets from ever
/// being confused downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitTarget {
    Index(usize),
    Arc(SeriesId),
}

/// One ordered step of a hover change. `Out` for the previous target is
/// always produced before `Over` for the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTransition {
    Out(HitTarget),
    Over(HitTarget),
}

pub type HoverTransitions = SmallVec<[HoverTransition; 2]>;

/// Pointer/selection state owned exclusively by the engine.
///
/// Persists across redraws; reset only on surface teardown. All transition
/// methods are synchronous and idempotent per discrete input event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    modality: Option<Modality>,
    dragging: bool,
    flowing: bool,
    hover: Option<HitTarget>,
    last_touched: Option<HitTarget>,
    last_coords: Option<(f64, f64)>,
    cancel_click: bool,
}

impl PointerState {
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        if self.dragging {
            InteractionMode::Dragging
        } else if self.hover.is_some() {
            InteractionMode::Hovering
        } else {
            InteractionMode::Idle
        }
    }

    #[must_use]
    pub fn hover_target(&self) -> Option<HitTarget> {
        self.hover
    }

    #[must_use]
    pub fn modality(&self) -> Option<Modality> {
        self.modality
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[must_use]
    pub fn last_coords(&self) -> Option<(f64, f64)> {
        self.last_coords
    }

    /// Locks onto the first modality seen. Returns `false` when `modality`
    /// is not the locked one and should be ignored for hover purposes.
    pub fn admit_modality(&mut self, modality: Modality) -> bool {
        match self.modality {
            Some(locked) => locked == modality,
            None => {
                self.modality = Some(modality);
                true
            }
        }
    }

    /// Hover transitions are suppressed while dragging or while data is
    /// flowing in.
    #[must_use]
    pub fn hover_suppressed(&self) -> bool {
        self.dragging || self.flowing
    }

    pub fn set_flowing(&mut self, flowing: bool) {
        self.flowing = flowing;
    }

    pub fn record_coords(&mut self, x: f64, y: f64) {
        self.last_coords = Some((x, y));
    }

    /// Moves the hover target, returning the ordered transition steps:
    /// `Out(previous)` strictly before `Over(next)`, or nothing when the
    /// target is unchanged or hover is suppressed.
    pub fn hover_to(&mut self, next: Option<HitTarget>) -> HoverTransitions {
        let mut transitions = HoverTransitions::new();
        if self.hover_suppressed() || self.hover == next {
            return transitions;
        }
        if let Some(previous) = self.hover {
            transitions.push(HoverTransition::Out(previous));
        }
        if let Some(target) = next {
            transitions.push(HoverTransition::Over(target));
        }
        self.hover = next;
        self.last_touched = next;
        transitions
    }

    /// Touch variant of `hover_to`: compares against the explicit
    /// last-touched target, so repeated touch events over the same region
    /// never re-fire callbacks.
    pub fn touch_hover_to(&mut self, next: Option<HitTarget>) -> HoverTransitions {
        let mut transitions = HoverTransitions::new();
        if self.hover_suppressed() || self.last_touched == next {
            return transitions;
        }
        if let Some(previous) = self.last_touched {
            transitions.push(HoverTransition::Out(previous));
        }
        if let Some(target) = next {
            transitions.push(HoverTransition::Over(target));
        }
        self.last_touched = next;
        self.hover = next;
        transitions
    }

    /// Silently drops a hover target that no longer resolves after a redraw.
    /// No transition is produced.
    pub fn clear_hover_silently(&mut self) {
        self.hover = None;
        self.last_touched = None;
    }

    /// Enters the dragging state. Returns `false` when already dragging.
    pub fn begin_drag(&mut self) -> bool {
        if self.dragging {
            return false;
        }
        self.dragging = true;
        true
    }

    pub fn end_drag(&mut self) -> bool {
        if !self.dragging {
            return false;
        }
        self.dragging = false;
        true
    }

    /// Arms the one-shot flag that swallows the click completing a drag.
    pub fn arm_cancel_click(&mut self) {
        self.cancel_click = true;
    }

    /// Consumes the one-shot cancel flag.
    pub fn take_cancel_click(&mut self) -> bool {
        std::mem::take(&mut self.cancel_click)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
