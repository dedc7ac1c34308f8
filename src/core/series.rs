use indexmap::IndexMap;

use crate::core::types::{AxisKind, DataPoint, SeriesId};

/// One data series: y-values with optional explicit x-values.
///
/// Without explicit x-values, samples sit at their index positions, which is
/// also how categorical axes address them.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    xs: Option<Vec<f64>>,
    ys: Vec<f64>,
    visible: bool,
}

impl Series {
    #[must_use]
    pub fn from_values(ys: Vec<f64>) -> Self {
        Self {
            xs: None,
            ys,
            visible: true,
        }
    }

    /// Attaches explicit x-values; pairs beyond the shorter of the two
    /// vectors are ignored by accessors.
    #[must_use]
    pub fn with_x_values(mut self, xs: Vec<f64>) -> Self {
        self.xs = Some(xs);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match &self.xs {
            Some(xs) => xs.len().min(self.ys.len()),
            None => self.ys.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn has_own_x(&self) -> bool {
        self.xs.is_some()
    }

    #[must_use]
    pub fn x_at(&self, index: usize) -> Option<f64> {
        if index >= self.len() {
            return None;
        }
        match &self.xs {
            Some(xs) => xs.get(index).copied(),
            None => Some(index as f64),
        }
    }

    #[must_use]
    pub fn y_at(&self, index: usize) -> Option<f64> {
        if index >= self.len() {
            return None;
        }
        self.ys.get(index).copied()
    }
}

/// Declared-order collection of named series.
///
/// Declared order matters: resolver ties go to the earliest series, and
/// `SeriesId` ordinals index into this order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesSet {
    series: IndexMap<String, Series>,
}

impl SeriesSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from rows of y-values, one row per series, named
    /// `data1`, `data2`, ... in row order.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let mut set = Self::new();
        for (ordinal, ys) in rows.into_iter().enumerate() {
            set.insert(format!("data{}", ordinal + 1), Series::from_values(ys));
        }
        set
    }

    pub fn insert(&mut self, name: impl Into<String>, series: Series) -> SeriesId {
        let entry = self.series.insert_full(name.into(), series);
        SeriesId(entry.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: SeriesId) -> Option<&Series> {
        self.series.get_index(id.0).map(|(_, series)| series)
    }

    #[must_use]
    pub fn name_of(&self, id: SeriesId) -> Option<&str> {
        self.series.get_index(id.0).map(|(name, _)| name.as_str())
    }

    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<SeriesId> {
        self.series.get_index_of(name).map(SeriesId)
    }

    /// Toggles visibility; returns `false` when no such series exists.
    pub fn set_visible(&mut self, name: &str, visible: bool) -> bool {
        match self.series.get_mut(name) {
            Some(series) => {
                series.visible = visible;
                true
            }
            None => false,
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = (SeriesId, &Series)> {
        self.series
            .values()
            .enumerate()
            .filter(|(_, series)| series.visible)
            .map(|(ordinal, series)| (SeriesId(ordinal), series))
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible().count()
    }

    #[must_use]
    pub fn max_visible_len(&self) -> usize {
        self.visible().map(|(_, series)| series.len()).max().unwrap_or(0)
    }

    #[must_use]
    pub fn point(&self, id: SeriesId, index: usize) -> Option<DataPoint> {
        let series = self.get(id)?;
        Some(DataPoint::new(id, index, series.x_at(index)?, series.y_at(index)?))
    }

    /// All visible values sharing one x-index, in declared series order.
    #[must_use]
    pub fn points_at(&self, index: usize) -> Vec<DataPoint> {
        self.visible()
            .filter_map(|(id, series)| {
                Some(DataPoint::new(id, index, series.x_at(index)?, series.y_at(index)?))
            })
            .collect()
    }

    /// Shared x-positions for single-index region layout.
    ///
    /// Categorical axes address ticks by index; continuous axes take the
    /// x-values of the longest visible series.
    #[must_use]
    pub fn x_positions(&self, axis: AxisKind) -> Vec<f64> {
        match axis {
            AxisKind::Categorical => (0..self.max_visible_len()).map(|i| i as f64).collect(),
            AxisKind::Continuous => {
                let longest = self
                    .visible()
                    .max_by_key(|(id, series)| (series.len(), std::cmp::Reverse(id.0)));
                match longest {
                    Some((_, series)) => {
                        (0..series.len()).filter_map(|i| series.x_at(i)).collect()
                    }
                    None => Vec::new(),
                }
            }
        }
    }
}
