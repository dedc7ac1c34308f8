use std::collections::HashSet;

use crate::core::HitRegion;
use crate::error::InteractResult;
use crate::render::{ShapeBounds, ShapeRef, ShapeRenderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It records collaborator traffic so tests can assert the engine's
/// highlight/selection calls without a real backend.
#[derive(Debug)]
pub struct NullRenderer {
    pub last_region_count: usize,
    pub expanded_calls: Vec<(ShapeRef, bool)>,
    pub toggled: Vec<ShapeRef>,
    /// When `false`, `is_pixel_inside` reports a miss for every shape.
    pub inside_all: bool,
    pub bounds: ShapeBounds,
    selected: HashSet<ShapeRef>,
}

impl Default for NullRenderer {
    fn default() -> Self {
        Self {
            last_region_count: 0,
            expanded_calls: Vec::new(),
            toggled: Vec::new(),
            inside_all: true,
            bounds: ShapeBounds {
                x: 0.0,
                y: 0.0,
                width: 0.0,
                height: 0.0,
            },
            selected: HashSet::new(),
        }
    }
}

impl NullRenderer {
    #[must_use]
    pub fn is_selected(&self, shape: ShapeRef) -> bool {
        self.selected.contains(&shape)
    }
}

impl ShapeRenderer for NullRenderer {
    fn regions_rebuilt(&mut self, regions: &[HitRegion]) {
        self.last_region_count = regions.len();
    }

    fn bounding_geometry(&self, _shape: ShapeRef) -> InteractResult<ShapeBounds> {
        Ok(self.bounds)
    }

    fn is_pixel_inside(&self, _shape: ShapeRef, _pixel: (f64, f64)) -> bool {
        self.inside_all
    }

    fn set_expanded(&mut self, shape: ShapeRef, expanded: bool) {
        self.expanded_calls.push((shape, expanded));
    }

    fn toggle_selected(&mut self, shape: ShapeRef) -> bool {
        self.toggled.push(shape);
        if self.selected.remove(&shape) {
            false
        } else {
            self.selected.insert(shape);
            true
        }
    }
}
