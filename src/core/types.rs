use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_seconds, decimal_to_f64};
use crate::error::InteractResult;

/// Pixel dimensions of the interactive rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
}

impl Surface {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Layout direction of the value axis on the surface.
///
/// `Rotated` charts lay data out along the y-axis (horizontal bar charts);
/// hit regions and gesture axes swap accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Standard,
    Rotated,
}

impl Default for Orientation {
    fn default() -> Self {
        Self::Standard
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisKind {
    Categorical,
    Continuous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Cartesian,
    /// Pie/donut family; hit testing defers to slice geometry.
    Radial,
}

/// Step-line interpolation variant, when the chart draws step lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepKind {
    Step,
    StepBefore,
    StepAfter,
}

/// Cursor styling hint the host applies to the surface element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CursorHint {
    Arrow,
    Pointer,
    EwResize,
    NsResize,
}

impl Default for CursorHint {
    fn default() -> Self {
        Self::Arrow
    }
}

/// Ordinal of a series in declared order. Stable for the lifetime of a
/// dataset; resolves back to a name through `SeriesSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeriesId(pub usize);

/// One logical data sample, viewed through its series and x-position.
///
/// Screen coordinates are derived on demand through a `CoordinateMapper`,
/// never cached here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub series: SeriesId,
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(series: SeriesId, index: usize, x: f64, y: f64) -> Self {
        Self {
            series,
            index,
            x,
            y,
        }
    }

    pub fn from_decimal_time(
        series: SeriesId,
        index: usize,
        time: DateTime<Utc>,
        value: Decimal,
    ) -> InteractResult<Self> {
        Ok(Self {
            series,
            index,
            x: datetime_to_unix_seconds(time),
            y: decimal_to_f64(value, "value")?,
        })
    }
}
