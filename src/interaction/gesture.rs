use serde::{Deserialize, Serialize};

/// Policy for suppressing default platform scrolling during touch gestures.
///
/// Mirrors the host-facing `touch.preventDefault` option: a plain boolean or
/// a pixel threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TouchPreventMode {
    Always,
    Never,
    /// Suppress once the gesture has moved at least this many pixels along
    /// the layout axis.
    Threshold(f64),
}

impl Default for TouchPreventMode {
    fn default() -> Self {
        Self::Never
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Start,
    Move,
}

/// Per-gesture scroll-suppression state machine.
///
/// In `Threshold` mode the decision is sticky: once a gesture crosses the
/// threshold, every later move in that gesture suppresses scrolling even if
/// displacement drops back under it. The latch resets on the next `Start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureThreshold {
    mode: TouchPreventMode,
    start_px: Option<f64>,
    latched: bool,
}

impl GestureThreshold {
    #[must_use]
    pub fn new(mode: TouchPreventMode) -> Self {
        Self {
            mode,
            start_px: None,
            latched: false,
        }
    }

    #[must_use]
    pub fn mode(&self) -> TouchPreventMode {
        self.mode
    }

    #[must_use]
    pub fn is_latched(&self) -> bool {
        self.latched
    }

    /// Feeds one gesture event; returns whether the host should call
    /// `preventDefault` for it. `position_on_axis` is the touch coordinate
    /// along the layout axis (y when the chart is rotated).
    pub fn on_gesture_event(&mut self, phase: GesturePhase, position_on_axis: f64) -> bool {
        match self.mode {
            TouchPreventMode::Always => true,
            TouchPreventMode::Never => false,
            TouchPreventMode::Threshold(threshold) => match phase {
                GesturePhase::Start => {
                    self.start_px = Some(position_on_axis);
                    self.latched = false;
                    false
                }
                GesturePhase::Move => {
                    if self.latched {
                        return true;
                    }
                    let Some(start) = self.start_px else {
                        return false;
                    };
                    if (position_on_axis - start).abs() >= threshold {
                        self.latched = true;
                        true
                    } else {
                        false
                    }
                }
            },
        }
    }
}
