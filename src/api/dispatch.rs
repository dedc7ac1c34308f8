use tracing::{debug, trace};

use crate::core::mapper::CoordinateMapper;
use crate::core::{ChartKind, Orientation, RegionMode, SeriesId};
use crate::error::{InteractError, InteractResult};
use crate::interaction::Modality;
use crate::render::{ShapeRef, ShapeRenderer};

use super::pointer_router::{PointerEvent, PointerPhase};
use super::InteractionEngine;

impl<R: ShapeRenderer, M: CoordinateMapper> InteractionEngine<R, M> {
    /// Synthesizes a semantic pointer event over `index`, as if live input
    /// had produced it at `offset` within the target region.
    ///
    /// The event category follows the name prefix (`mouse*`/`click` vs
    /// `touch*`); the synthesized event enters the exact routing path live
    /// input uses, so state transitions are indistinguishable. Single-index
    /// coordinates center along the layout axis; multi-series ones offset
    /// from the surface origin.
    pub fn dispatch(&mut self, name: &str, index: usize, offset: (f64, f64)) -> InteractResult<()> {
        if self.destroyed {
            return Ok(());
        }
        let (modality, phase) = parse_event_name(name)?;

        if self.chart == ChartKind::Radial {
            // Radial charts have no per-index regions; anchor on the slice
            // geometry the renderer owns.
            let slice = SeriesId(index);
            if self.series.get(slice).is_none() {
                trace!(index, "dispatch slice does not exist; ignoring");
                return Ok(());
            }
            let bounds = self.renderer.bounding_geometry(ShapeRef::Arc { slice })?;
            let x = bounds.x + bounds.width / 2.0 + offset.0;
            let y = bounds.y + bounds.height / 2.0 + offset.1;
            debug!(name, index, x, y, "dispatch synthetic pointer event");
            self.route(PointerEvent {
                modality,
                phase,
                x,
                y,
            });
            return Ok(());
        }

        let region = match self.layout {
            RegionMode::MultiSeries => self.regions.first().copied(),
            RegionMode::SingleIndex => self.region_for_index(index),
        };
        let Some(region) = region else {
            trace!(index, "dispatch target has no hit region; ignoring");
            return Ok(());
        };

        let (x, y) = match self.layout {
            RegionMode::MultiSeries => (region.x + offset.0, region.y + offset.1),
            RegionMode::SingleIndex => match self.orientation {
                Orientation::Standard => (
                    region.x + region.width / 2.0 + offset.0,
                    region.y + offset.1,
                ),
                Orientation::Rotated => (
                    region.x + offset.0,
                    region.y + region.height / 2.0 + offset.1,
                ),
            },
        };

        debug!(name, index, x, y, "dispatch synthetic pointer event");
        self.route(PointerEvent {
            modality,
            phase,
            x,
            y,
        });
        Ok(())
    }
}

fn parse_event_name(name: &str) -> InteractResult<(Modality, PointerPhase)> {
    match name {
        "mouseover" => Ok((Modality::Mouse, PointerPhase::Enter)),
        "mousemove" => Ok((Modality::Mouse, PointerPhase::Move)),
        "mouseout" => Ok((Modality::Mouse, PointerPhase::Leave)),
        "click" => Ok((Modality::Mouse, PointerPhase::Click)),
        "touchstart" => Ok((Modality::Touch, PointerPhase::Enter)),
        "touchmove" => Ok((Modality::Touch, PointerPhase::Move)),
        "touchend" => Ok((Modality::Touch, PointerPhase::End)),
        _ => Err(InteractError::InvalidData(format!(
            "unsupported event type: {name}"
        ))),
    }
}
