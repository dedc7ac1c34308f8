use serde::{Deserialize, Serialize};

use crate::core::mapper::CoordinateMapper;
use crate::core::types::{AxisKind, Orientation, Surface};
use crate::error::{InteractError, InteractResult};

/// Hit-region layout mode.
///
/// `SingleIndex` partitions the surface into one region per x-position;
/// `MultiSeries` keeps a single full-surface region and resolves targets by
/// nearest-point distance instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionMode {
    SingleIndex,
    MultiSeries,
}

/// A rectangular pointer-detection zone bound to one logical index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitRegion {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl HitRegion {
    /// Half-open containment so adjacent regions never both claim a pixel.
    #[must_use]
    pub fn contains(self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    #[must_use]
    pub fn center(self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Pure builder partitioning the surface into hit regions.
pub struct HitRegionBuilder;

impl HitRegionBuilder {
    /// Builds the ordered region sequence for the given layout.
    ///
    /// `positions` are value-space x-positions in ascending order (index
    /// positions for categorical axes). The result is a contiguous,
    /// non-overlapping partition along the layout axis; rotated orientation
    /// swaps x/y and width/height.
    pub fn build(
        mode: RegionMode,
        surface: Surface,
        orientation: Orientation,
        axis: AxisKind,
        positions: &[f64],
        mapper: &impl CoordinateMapper,
        configured_width: Option<f64>,
    ) -> InteractResult<Vec<HitRegion>> {
        if !surface.is_valid() {
            return Err(InteractError::InvalidSurface {
                width: surface.width,
                height: surface.height,
            });
        }

        let full_width = f64::from(surface.width);
        let full_height = f64::from(surface.height);

        if mode == RegionMode::MultiSeries {
            return Ok(vec![HitRegion {
                index: 0,
                x: 0.0,
                y: 0.0,
                width: full_width,
                height: full_height,
            }]);
        }

        let along_full = match orientation {
            Orientation::Standard => full_width,
            Orientation::Rotated => full_height,
        };

        let spans = match axis {
            AxisKind::Categorical => {
                Self::categorical_spans(positions, mapper, configured_width, along_full)
            }
            AxisKind::Continuous => Self::continuous_spans(positions, mapper, along_full),
        };

        Ok(spans
            .into_iter()
            .enumerate()
            .map(|(index, (start, extent))| match orientation {
                Orientation::Standard => HitRegion {
                    index,
                    x: start,
                    y: 0.0,
                    width: extent,
                    height: full_height,
                },
                Orientation::Rotated => HitRegion {
                    index,
                    x: 0.0,
                    y: start,
                    width: full_width,
                    height: extent,
                },
            })
            .collect())
    }

    /// Fixed-width spans centered on each tick.
    fn categorical_spans(
        positions: &[f64],
        mapper: &impl CoordinateMapper,
        configured_width: Option<f64>,
        along_full: f64,
    ) -> Vec<(f64, f64)> {
        if positions.is_empty() {
            return Vec::new();
        }
        if positions.len() == 1 {
            return vec![(0.0, along_full)];
        }

        let default_width =
            (mapper.to_pixel(positions[1]) - mapper.to_pixel(positions[0])).abs();
        let width = match configured_width {
            Some(width) if width.is_finite() && width > 0.0 => width,
            _ => default_width,
        };

        positions
            .iter()
            .map(|&position| (mapper.to_pixel(position) - width / 2.0, width))
            .collect()
    }

    /// Midpoint-partition spans: the boundary between neighbors is the
    /// midpoint of their mapped positions, and the outermost regions run to
    /// the domain edges so the partition covers the full axis.
    fn continuous_spans(
        positions: &[f64],
        mapper: &impl CoordinateMapper,
        along_full: f64,
    ) -> Vec<(f64, f64)> {
        if positions.is_empty() {
            return Vec::new();
        }
        if positions.len() == 1 {
            return vec![(0.0, along_full)];
        }

        let (domain_start, domain_end) = mapper.domain();
        let lower_edge = mapper.to_pixel(domain_start);
        let upper_edge = mapper.to_pixel(domain_end);

        let pixels: Vec<f64> = positions.iter().map(|&p| mapper.to_pixel(p)).collect();
        let last = pixels.len() - 1;

        pixels
            .iter()
            .enumerate()
            .map(|(i, &px)| {
                let start = if i == 0 {
                    lower_edge
                } else {
                    (pixels[i - 1] + px) / 2.0
                };
                let end = if i == last {
                    upper_edge
                } else {
                    (px + pixels[i + 1]) / 2.0
                };
                (start, (end - start).max(0.0))
            })
            .collect()
    }
}
