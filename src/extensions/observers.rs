use serde::{Deserialize, Serialize};

use crate::core::{CursorHint, DataPoint, SeriesId, Surface};
use crate::interaction::{HitTarget, InteractionMode};
use crate::render::ShapeRef;

/// Semantic interaction events raised toward the host.
///
/// Within one pointer event, `Out` for the previous target is always raised
/// before `Over` for the new one, and both before tooltip events.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InteractionEvent {
    Over(DataPoint),
    Out(DataPoint),
    Click {
        point: DataPoint,
        shape: ShapeRef,
        selected: bool,
    },
    DragStarted {
        x: f64,
        y: f64,
    },
    Dragged {
        x: f64,
        y: f64,
    },
    DragEnded,
    /// The tooltip layer should present values at this x-index; `series` is
    /// set when an ungrouped tooltip targets a single shape.
    TooltipShown {
        index: usize,
        series: Option<SeriesId>,
    },
    TooltipHidden,
    RegionsRebuilt {
        count: usize,
    },
}

/// Read-only state snapshot passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserverContext {
    pub surface: Surface,
    pub mode: InteractionMode,
    pub hover: Option<HitTarget>,
    pub region_count: usize,
    pub visible_series: usize,
    pub cursor: CursorHint,
}

/// Host-side hook interface for interaction events.
///
/// Observers can react to events and read engine context without mutating
/// interaction state directly. Panics inside observers are not caught.
pub trait InteractionObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: InteractionEvent, context: ObserverContext);
}
