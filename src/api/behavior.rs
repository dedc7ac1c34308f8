use serde::{Deserialize, Serialize};

/// Data-selection behavior consumed from host configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionBehavior {
    /// Clicking toggles the persistent selected flag on shapes.
    #[serde(default)]
    pub enabled: bool,
    /// Selection/click targets every shape at an index instead of only the
    /// shape under the pointer.
    #[serde(default)]
    pub grouped: bool,
    /// Drag gestures are routed to the drag lifecycle.
    #[serde(default)]
    pub draggable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipBehavior {
    /// Grouped tooltips present every visible value at the hovered index;
    /// ungrouped ones only the shape under the pointer.
    #[serde(default = "default_tooltip_grouped")]
    pub grouped: bool,
}

impl Default for TooltipBehavior {
    fn default() -> Self {
        Self {
            grouped: default_tooltip_grouped(),
        }
    }
}

fn default_tooltip_grouped() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ZoomBehavior {
    #[serde(default)]
    pub enabled: bool,
    /// Zoom driven by drag-band selection rather than wheel/pinch; the
    /// resize cursor hint only applies to non-drag zoom.
    #[serde(default)]
    pub drag: bool,
}
