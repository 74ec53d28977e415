//! Dataset seam: per-cell statistics supplied by the caller.
//!
//! The engine never derives statistics; quartiles, regular-range bounds and
//! far-out thresholds arrive precomputed through [`BoxWhiskerDataset`].
//! `MemoryDataset` is the in-memory implementation used by tests and small
//! plots.

use std::collections::HashMap;

/// Five-number summary for one cell, all fields optional.
///
/// Absence of a field means "not drawable": there is no error path for
/// missing statistics.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FiveNumberSummary {
    pub q1: Option<f64>,
    pub q3: Option<f64>,
    pub min_regular: Option<f64>,
    pub max_regular: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
}

impl FiveNumberSummary {
    /// The four box-defining statistics, or `None` if any is missing.
    ///
    /// Box and whiskers are all-or-nothing: a partial set never renders.
    pub fn box_stats(&self) -> Option<BoxStats> {
        Some(BoxStats {
            q1: self.q1?,
            q3: self.q3?,
            min_regular: self.min_regular?,
            max_regular: self.max_regular?,
        })
    }
}

/// The complete set of box-defining statistics for one cell.
///
/// Only obtainable via [`FiveNumberSummary::box_stats`], so holding one
/// proves all four fields were present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxStats {
    pub q1: f64,
    pub q3: f64,
    pub min_regular: f64,
    pub max_regular: f64,
}

/// Bounds beyond which a raw value is "far out" rather than a drawable
/// outlier.
///
/// `max_outlier < min_outlier` is a caller data-contract violation;
/// classification still applies its fixed decision order, without repair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlierThresholds {
    pub min_outlier: f64,
    pub max_outlier: f64,
}

/// Per-cell statistics source for a grouped box-and-whisker plot.
///
/// Cells are addressed by `(series, category)`; the two counts shape the
/// band subdivision.
pub trait BoxWhiskerDataset {
    fn series_count(&self) -> usize;

    fn category_count(&self) -> usize;

    /// Five-number summary for one cell.
    fn summary(&self, series: usize, category: usize) -> FiveNumberSummary;

    /// Far-out thresholds for one cell, if the dataset supplies them.
    fn thresholds(&self, series: usize, category: usize) -> Option<OutlierThresholds>;

    /// Raw outlier values for one cell, in dataset order (not pre-sorted).
    fn outliers(&self, series: usize, category: usize) -> &[f64];
}

/// The statistics stored for one cell of a [`MemoryDataset`].
#[derive(Debug, Clone, Default)]
pub struct CellStats {
    pub summary: FiveNumberSummary,
    pub thresholds: Option<OutlierThresholds>,
    pub outliers: Vec<f64>,
}

/// In-memory dataset backed by a per-cell map.
#[derive(Debug, Clone)]
pub struct MemoryDataset {
    series_count: usize,
    category_count: usize,
    cells: HashMap<(usize, usize), CellStats>,
}

impl MemoryDataset {
    pub fn new(series_count: usize, category_count: usize) -> Self {
        MemoryDataset {
            series_count,
            category_count,
            cells: HashMap::new(),
        }
    }

    /// Store the statistics for one cell, replacing any previous entry.
    pub fn set_cell(&mut self, series: usize, category: usize, stats: CellStats) {
        self.cells.insert((series, category), stats);
    }
}

impl BoxWhiskerDataset for MemoryDataset {
    fn series_count(&self) -> usize {
        self.series_count
    }

    fn category_count(&self) -> usize {
        self.category_count
    }

    fn summary(&self, series: usize, category: usize) -> FiveNumberSummary {
        self.cells
            .get(&(series, category))
            .map(|c| c.summary)
            .unwrap_or_default()
    }

    fn thresholds(&self, series: usize, category: usize) -> Option<OutlierThresholds> {
        self.cells.get(&(series, category)).and_then(|c| c.thresholds)
    }

    fn outliers(&self, series: usize, category: usize) -> &[f64] {
        self.cells
            .get(&(series, category))
            .map(|c| c.outliers.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_summary() -> FiveNumberSummary {
        FiveNumberSummary {
            q1: Some(10.0),
            q3: Some(20.0),
            min_regular: Some(5.0),
            max_regular: Some(25.0),
            mean: Some(15.0),
            median: Some(16.0),
        }
    }

    #[test]
    fn box_stats_present_when_all_four_fields_present() {
        let stats = full_summary().box_stats().unwrap();
        assert_eq!(stats.q1, 10.0);
        assert_eq!(stats.q3, 20.0);
        assert_eq!(stats.min_regular, 5.0);
        assert_eq!(stats.max_regular, 25.0);
    }

    #[test]
    fn box_stats_absent_when_any_field_missing() {
        for strip in 0..4 {
            let mut summary = full_summary();
            match strip {
                0 => summary.q1 = None,
                1 => summary.q3 = None,
                2 => summary.min_regular = None,
                _ => summary.max_regular = None,
            }
            assert!(summary.box_stats().is_none());
        }
    }

    #[test]
    fn box_stats_independent_of_mean_and_median() {
        let mut summary = full_summary();
        summary.mean = None;
        summary.median = None;
        assert!(summary.box_stats().is_some());
    }

    #[test]
    fn memory_dataset_empty_cell_has_nothing_to_draw() {
        let ds = MemoryDataset::new(1, 1);
        assert_eq!(ds.summary(0, 0), FiveNumberSummary::default());
        assert!(ds.thresholds(0, 0).is_none());
        assert!(ds.outliers(0, 0).is_empty());
    }

    #[test]
    fn memory_dataset_returns_stored_cell() {
        let mut ds = MemoryDataset::new(2, 3);
        ds.set_cell(
            1,
            2,
            CellStats {
                summary: full_summary(),
                thresholds: Some(OutlierThresholds {
                    min_outlier: -10.0,
                    max_outlier: 40.0,
                }),
                outliers: vec![26.0, 27.0],
            },
        );
        assert_eq!(ds.summary(1, 2), full_summary());
        assert_eq!(ds.outliers(1, 2), &[26.0, 27.0]);
        assert_eq!(ds.series_count(), 2);
        assert_eq!(ds.category_count(), 3);
    }
}
