use tracing::debug;

use crate::core::mapper::CoordinateMapper;
use crate::core::{CursorHint, HitRegion, HitRegionBuilder, Orientation};
use crate::error::InteractResult;
use crate::extensions::InteractionEvent;
use crate::interaction::HitTarget;
use crate::render::ShapeRenderer;

use super::InteractionEngine;

impl<R: ShapeRenderer, M: CoordinateMapper> InteractionEngine<R, M> {
    /// Rebuilds the hit-region partition from the current series set and
    /// surface. Atomic from the caller's perspective: the region vector is
    /// swapped wholesale, then the renderer is re-bound to the new identity
    /// mapping.
    pub(super) fn rebuild_regions(&mut self) -> InteractResult<()> {
        let positions = self.series.x_positions(self.axis);
        let regions = HitRegionBuilder::build(
            self.layout,
            self.surface,
            self.orientation,
            self.axis,
            &positions,
            &self.x_mapper,
            self.categorical_region_width,
        )?;
        self.regions = regions;
        self.renderer.regions_rebuilt(&self.regions);

        // Targets that no longer resolve after the rebuild degrade silently.
        if let Some(HitTarget::Index(index)) = self.state.hover_target() {
            if index >= self.regions.len() {
                self.state.clear_hover_silently();
                self.tooltip_target = None;
            }
        }
        if let Some(previous) = self.closest_over {
            if self.series.point(previous.series, previous.index).is_none() {
                self.closest_over = None;
            }
        }

        self.cursor = self.base_cursor_hint();
        let count = self.regions.len();
        debug!(count, "rebuilt hit regions");
        self.emit_event(InteractionEvent::RegionsRebuilt { count });
        Ok(())
    }

    #[must_use]
    pub(super) fn region_at(&self, x: f64, y: f64) -> Option<HitRegion> {
        self.regions.iter().copied().find(|region| region.contains(x, y))
    }

    #[must_use]
    pub(super) fn region_for_index(&self, index: usize) -> Option<HitRegion> {
        self.regions.iter().copied().find(|region| region.index == index)
    }

    #[must_use]
    pub(super) fn base_cursor_hint(&self) -> CursorHint {
        if self.zoom.enabled && !self.zoom.drag {
            match self.orientation {
                Orientation::Standard => CursorHint::EwResize,
                Orientation::Rotated => CursorHint::NsResize,
            }
        } else if self.selection.enabled && self.selection.grouped {
            CursorHint::Pointer
        } else {
            CursorHint::Arrow
        }
    }
}
