use tracing::debug;

use crate::core::{
    AxisKind, ChartKind, CursorHint, DataPoint, HitRegion, Orientation, RegionMode, SeriesId,
    SeriesSet, StepKind, Surface,
};
use crate::core::mapper::CoordinateMapper;
use crate::error::{InteractError, InteractResult};
use crate::extensions::{InteractionEvent, InteractionObserver, ObserverContext};
use crate::interaction::{
    GestureThreshold, HitTarget, InteractionMode, Modality, PointerState, TouchPreventMode,
};
use crate::render::ShapeRenderer;

use super::behavior::{SelectionBehavior, TooltipBehavior, ZoomBehavior};
use super::engine_config::InteractionEngineConfig;

/// Main interaction facade consumed by host applications.
///
/// `InteractionEngine` owns pointer state, hit regions, and event emission;
/// it consumes coordinate mappers and a shape renderer as injected
/// collaborators and never draws or computes scales itself.
pub struct InteractionEngine<R: ShapeRenderer, M: CoordinateMapper> {
    pub(super) renderer: R,
    pub(super) x_mapper: M,
    pub(super) y_mapper: M,
    pub(super) surface: Surface,
    pub(super) layout: RegionMode,
    pub(super) orientation: Orientation,
    pub(super) axis: AxisKind,
    pub(super) chart: ChartKind,
    pub(super) step: Option<StepKind>,
    pub(super) interaction_enabled: bool,
    pub(super) selection: SelectionBehavior,
    pub(super) tooltip: TooltipBehavior,
    pub(super) zoom: ZoomBehavior,
    pub(super) point_sensitivity: f64,
    pub(super) categorical_region_width: Option<f64>,
    pub(super) focus_expand: bool,
    pub(super) series: SeriesSet,
    pub(super) regions: Vec<HitRegion>,
    pub(super) state: PointerState,
    pub(super) gesture: GestureThreshold,
    pub(super) closest_over: Option<DataPoint>,
    pub(super) tooltip_target: Option<(usize, Option<SeriesId>)>,
    pub(super) drag_moved: bool,
    pub(super) cursor: CursorHint,
    pub(super) observers: Vec<Box<dyn InteractionObserver>>,
    pub(super) destroyed: bool,
}

impl<R: ShapeRenderer, M: CoordinateMapper> InteractionEngine<R, M> {
    pub fn new(
        renderer: R,
        x_mapper: M,
        y_mapper: M,
        config: InteractionEngineConfig,
    ) -> InteractResult<Self> {
        if !config.surface.is_valid() {
            return Err(InteractError::InvalidSurface {
                width: config.surface.width,
                height: config.surface.height,
            });
        }
        if !config.point_sensitivity.is_finite() || config.point_sensitivity <= 0.0 {
            return Err(InteractError::InvalidData(
                "point sensitivity must be finite and > 0".to_owned(),
            ));
        }

        let mut engine = Self {
            renderer,
            x_mapper,
            y_mapper,
            surface: config.surface,
            layout: config.layout,
            orientation: config.orientation,
            axis: config.axis,
            chart: config.chart,
            step: config.step,
            interaction_enabled: config.interaction_enabled,
            selection: config.selection,
            tooltip: config.tooltip,
            zoom: config.zoom,
            point_sensitivity: config.point_sensitivity,
            categorical_region_width: config.categorical_region_width,
            focus_expand: config.focus_expand,
            series: SeriesSet::new(),
            regions: Vec::new(),
            state: PointerState::default(),
            gesture: GestureThreshold::new(config.touch_prevent),
            closest_over: None,
            tooltip_target: None,
            drag_moved: false,
            cursor: CursorHint::default(),
            observers: Vec::new(),
            destroyed: false,
        };
        engine.rebuild_regions()?;
        Ok(engine)
    }

    /// Replaces the full series set and atomically rebuilds hit regions.
    pub fn set_series(&mut self, series: SeriesSet) -> InteractResult<()> {
        if self.destroyed {
            return Ok(());
        }
        debug!(count = series.len(), "set series");
        self.series = series;
        self.rebuild_regions()
    }

    /// Shows/hides one series; returns `false` when the name is unknown.
    pub fn set_series_visible(&mut self, name: &str, visible: bool) -> InteractResult<bool> {
        if self.destroyed {
            return Ok(false);
        }
        if !self.series.set_visible(name, visible) {
            return Ok(false);
        }
        self.rebuild_regions()?;
        Ok(true)
    }

    pub fn set_surface(&mut self, surface: Surface) -> InteractResult<()> {
        if self.destroyed {
            return Ok(());
        }
        if !surface.is_valid() {
            return Err(InteractError::InvalidSurface {
                width: surface.width,
                height: surface.height,
            });
        }
        self.surface = surface;
        self.rebuild_regions()
    }

    /// Marks streaming-data flow; hover processing is suppressed while set,
    /// exactly like dragging.
    pub fn set_flowing(&mut self, flowing: bool) {
        self.state.set_flowing(flowing);
    }

    /// Tears the engine down. Every event arriving afterwards is silently
    /// dropped and no observer is ever called again.
    pub fn destroy(&mut self) {
        self.destroyed = true;
        self.state.reset();
        self.regions.clear();
        self.closest_over = None;
        self.tooltip_target = None;
        self.observers.clear();
    }

    pub fn register_observer(&mut self, observer: Box<dyn InteractionObserver>) {
        self.observers.push(observer);
    }

    #[must_use]
    pub fn surface(&self) -> Surface {
        self.surface
    }

    #[must_use]
    pub fn regions(&self) -> &[HitRegion] {
        &self.regions
    }

    #[must_use]
    pub fn series(&self) -> &SeriesSet {
        &self.series
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        if self.state.is_dragging() {
            InteractionMode::Dragging
        } else if self.state.hover_target().is_some() || self.closest_over.is_some() {
            InteractionMode::Hovering
        } else {
            InteractionMode::Idle
        }
    }

    #[must_use]
    pub fn hover_target(&self) -> Option<HitTarget> {
        self.state.hover_target()
    }

    /// Multi-series mode: the data point currently hovered, if any.
    #[must_use]
    pub fn hovered_point(&self) -> Option<DataPoint> {
        self.closest_over
    }

    #[must_use]
    pub fn cursor_hint(&self) -> CursorHint {
        self.cursor
    }

    /// Modality the session locked onto, once any input arrived.
    #[must_use]
    pub fn modality(&self) -> Option<Modality> {
        self.state.modality()
    }

    #[must_use]
    pub fn touch_prevent_mode(&self) -> TouchPreventMode {
        self.gesture.mode()
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn observer_context(&self) -> ObserverContext {
        ObserverContext {
            surface: self.surface,
            mode: self.interaction_mode(),
            hover: self.state.hover_target(),
            region_count: self.regions.len(),
            visible_series: self.series.visible_count(),
            cursor: self.cursor,
        }
    }

    pub(super) fn emit_event(&mut self, event: InteractionEvent) {
        if self.destroyed {
            return;
        }
        let context = self.observer_context();
        for observer in &mut self.observers {
            observer.on_event(event, context);
        }
    }
}
