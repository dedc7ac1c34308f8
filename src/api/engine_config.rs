use serde::{Deserialize, Serialize};

use crate::core::{AxisKind, ChartKind, Orientation, RegionMode, StepKind, Surface};
use crate::error::{InteractError, InteractResult};
use crate::interaction::TouchPreventMode;

use super::{SelectionBehavior, TooltipBehavior, ZoomBehavior};

pub const CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load
/// interaction setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionEngineConfig {
    pub surface: Surface,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default = "default_layout")]
    pub layout: RegionMode,
    #[serde(default = "default_axis")]
    pub axis: AxisKind,
    #[serde(default = "default_chart")]
    pub chart: ChartKind,
    #[serde(default)]
    pub step: Option<StepKind>,
    #[serde(default = "default_interaction_enabled")]
    pub interaction_enabled: bool,
    #[serde(default)]
    pub selection: SelectionBehavior,
    #[serde(default)]
    pub tooltip: TooltipBehavior,
    #[serde(default)]
    pub zoom: ZoomBehavior,
    /// Maximum pixel distance at which a multi-series hover counts as being
    /// on a point.
    #[serde(default = "default_point_sensitivity")]
    pub point_sensitivity: f64,
    #[serde(default)]
    pub touch_prevent: TouchPreventMode,
    /// Fixed categorical region width; non-finite or non-positive values
    /// fall back to the tick-spacing default.
    #[serde(default)]
    pub categorical_region_width: Option<f64>,
    /// Hovering expands the focused shapes through the renderer.
    #[serde(default = "default_focus_expand")]
    pub focus_expand: bool,
}

impl InteractionEngineConfig {
    /// Creates a minimal config with cartesian single-index defaults.
    #[must_use]
    pub fn new(surface: Surface) -> Self {
        Self {
            surface,
            orientation: Orientation::default(),
            layout: default_layout(),
            axis: default_axis(),
            chart: default_chart(),
            step: None,
            interaction_enabled: default_interaction_enabled(),
            selection: SelectionBehavior::default(),
            tooltip: TooltipBehavior::default(),
            zoom: ZoomBehavior::default(),
            point_sensitivity: default_point_sensitivity(),
            touch_prevent: TouchPreventMode::default(),
            categorical_region_width: None,
            focus_expand: default_focus_expand(),
        }
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: RegionMode) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_axis(mut self, axis: AxisKind) -> Self {
        self.axis = axis;
        self
    }

    #[must_use]
    pub fn with_chart(mut self, chart: ChartKind) -> Self {
        self.chart = chart;
        self
    }

    #[must_use]
    pub fn with_step(mut self, step: StepKind) -> Self {
        self.step = Some(step);
        self
    }

    #[must_use]
    pub fn with_selection(mut self, selection: SelectionBehavior) -> Self {
        self.selection = selection;
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipBehavior) -> Self {
        self.tooltip = tooltip;
        self
    }

    #[must_use]
    pub fn with_zoom(mut self, zoom: ZoomBehavior) -> Self {
        self.zoom = zoom;
        self
    }

    #[must_use]
    pub fn with_point_sensitivity(mut self, point_sensitivity: f64) -> Self {
        self.point_sensitivity = point_sensitivity;
        self
    }

    #[must_use]
    pub fn with_touch_prevent(mut self, touch_prevent: TouchPreventMode) -> Self {
        self.touch_prevent = touch_prevent;
        self
    }

    #[must_use]
    pub fn with_categorical_region_width(mut self, width: f64) -> Self {
        self.categorical_region_width = Some(width);
        self
    }

    #[must_use]
    pub fn with_focus_expand(mut self, focus_expand: bool) -> Self {
        self.focus_expand = focus_expand;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: InteractionEngineConfig,
}

impl InteractionEngineConfig {
    pub fn to_json_contract_v1_pretty(&self) -> InteractResult<String> {
        let payload = ConfigJsonContractV1 {
            schema_version: CONFIG_JSON_SCHEMA_V1,
            config: *self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            InteractError::InvalidData(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Accepts either a bare config payload or the versioned contract.
    pub fn from_json_compat_str(input: &str) -> InteractResult<Self> {
        if let Ok(config) = serde_json::from_str::<Self>(input) {
            return Ok(config);
        }
        let payload: ConfigJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            InteractError::InvalidData(format!("failed to parse config json payload: {e}"))
        })?;
        if payload.schema_version != CONFIG_JSON_SCHEMA_V1 {
            return Err(InteractError::InvalidData(format!(
                "unsupported config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.config)
    }
}

fn default_layout() -> RegionMode {
    RegionMode::SingleIndex
}

fn default_axis() -> AxisKind {
    AxisKind::Continuous
}

fn default_chart() -> ChartKind {
    ChartKind::Cartesian
}

fn default_interaction_enabled() -> bool {
    true
}

fn default_point_sensitivity() -> f64 {
    10.0
}

fn default_focus_expand() -> bool {
    true
}
