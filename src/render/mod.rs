mod null_renderer;

pub use null_renderer::NullRenderer;

use serde::{Deserialize, Serialize};

use crate::core::{HitRegion, SeriesId};
use crate::error::InteractResult;

/// Reference to one drawn shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeRef {
    Point { series: SeriesId, index: usize },
    Arc { slice: SeriesId },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Contract implemented by the rendering collaborator.
///
/// The engine never draws; it asks the renderer about shape geometry and
/// pushes highlight/selection flags back. Implementations own all visual
/// consequences, including deferred fades.
pub trait ShapeRenderer {
    /// Called after every atomic region rebuild so region identity stays
    /// bound to index on the render side.
    fn regions_rebuilt(&mut self, regions: &[HitRegion]);

    fn bounding_geometry(&self, shape: ShapeRef) -> InteractResult<ShapeBounds>;

    fn is_pixel_inside(&self, shape: ShapeRef, pixel: (f64, f64)) -> bool;

    /// Expands/collapses the focus highlight of a shape.
    fn set_expanded(&mut self, shape: ShapeRef, expanded: bool);

    /// Toggles the persistent "selected" flag; returns the new state.
    fn toggle_selected(&mut self, shape: ShapeRef) -> bool;
}
