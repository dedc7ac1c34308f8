pub mod hit_region;
pub mod mapper;
pub mod primitives;
pub mod series;
pub mod types;

pub use hit_region::{HitRegion, HitRegionBuilder, RegionMode};
pub use mapper::{CoordinateMapper, LinearScale};
pub use series::{Series, SeriesSet};
pub use types::{AxisKind, ChartKind, CursorHint, DataPoint, Orientation, SeriesId, StepKind, Surface};
