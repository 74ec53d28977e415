//! Outlier classification and proximity clustering.
//!
//! Raw outlier values are first classified against the regular range and
//! the far-out thresholds, then the surviving points are greedily merged
//! into [`OutlierList`]s so that visually coincident markers collapse into
//! one averaged marker.

use crate::axis::ValueAxis;
use crate::data::{FiveNumberSummary, OutlierThresholds};
use crate::log::{debug, warn};

/// What one raw outlier value turned out to be.
///
/// Classification happens in raw data space; the pixel projection for
/// drawable outliers is captured here so it is computed exactly once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification {
    /// Beyond the upper far-out threshold; drawn as a boundary indicator.
    HighFarOut,
    /// Beyond the lower far-out threshold.
    LowFarOut,
    /// Outside the regular range but inside the thresholds; drawn at its
    /// projected position.
    Regular { position: f64 },
    /// Inside the regular range. Tolerated and dropped.
    Inlier,
}

/// Classify one raw value. First match wins:
/// far-out thresholds are checked before the regular-range bounds, so a
/// value beyond both only counts as far-out.
///
/// An absent regular bound makes its comparison false; with thresholds
/// where `max_outlier < min_outlier` the same fixed order applies and may
/// classify everything as far-out (caller data-contract violation, not
/// repaired here).
pub fn classify(
    value: f64,
    thresholds: OutlierThresholds,
    summary: &FiveNumberSummary,
    axis: &dyn ValueAxis,
) -> Classification {
    if value > thresholds.max_outlier {
        Classification::HighFarOut
    } else if value < thresholds.min_outlier {
        Classification::LowFarOut
    } else if summary.max_regular.is_some_and(|max| value > max)
        || summary.min_regular.is_some_and(|min| value < min)
    {
        Classification::Regular {
            position: axis.project(value),
        }
    } else {
        warn!(value, "raw outlier inside the regular range, dropping");
        Classification::Inlier
    }
}

/// One drawable outlier point: pixel position along the value axis plus
/// its nominal marker radius. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outlier {
    pub position: f64,
    pub radius: f64,
}

/// A non-empty run of visually coincident outliers, with a cached average.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlierList {
    members: Vec<Outlier>,
    averaged: Outlier,
}

impl OutlierList {
    fn new(first: Outlier) -> Self {
        OutlierList {
            averaged: first,
            members: vec![first],
        }
    }

    /// Would `outlier` visually touch this list's averaged marker?
    fn overlaps(&self, outlier: &Outlier, radius: f64) -> bool {
        (outlier.position - self.averaged.position).abs() <= 2.0 * radius
    }

    /// Append a member and recompute the average over all members. The
    /// average is recomputed, not updated incrementally, so the cached
    /// marker always equals the true mean of the member positions.
    fn push(&mut self, outlier: Outlier) {
        self.members.push(outlier);
        let sum: f64 = self.members.iter().map(|o| o.position).sum();
        self.averaged = Outlier {
            position: sum / self.members.len() as f64,
            radius: self.averaged.radius,
        };
    }

    /// The single marker this list renders as.
    pub fn averaged_outlier(&self) -> Outlier {
        self.averaged
    }

    pub fn members(&self) -> &[Outlier] {
        &self.members
    }

    /// True when this list merged more than one outlier.
    pub fn is_multiple(&self) -> bool {
        self.members.len() > 1
    }
}

/// All outlier lists for one cell, plus the cell-wide far-out flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutlierListCollection {
    lists: Vec<OutlierList>,
    high_far_out: bool,
    low_far_out: bool,
}

impl OutlierListCollection {
    /// Lists in ascending order of averaged position.
    pub fn lists(&self) -> &[OutlierList] {
        &self.lists
    }

    /// True if any raw value exceeded the upper far-out threshold.
    pub fn high_far_out(&self) -> bool {
        self.high_far_out
    }

    /// True if any raw value undershot the lower far-out threshold.
    pub fn low_far_out(&self) -> bool {
        self.low_far_out
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

/// Merge classified outliers into an [`OutlierListCollection`].
///
/// Drawable outliers are stable-sorted by position (equal positions keep
/// their insertion order) and scanned left to right. Each point is tested
/// only against the most recently opened list: it joins when its distance
/// to that list's *averaged* position is at most `2 * outlier_radius`,
/// otherwise it opens a new list. Earlier lists are never revisited, so a
/// list's centroid can drift toward later members and admit points its
/// first member alone would have rejected. The scan is a single pass and
/// its output order follows the sorted positions.
pub fn cluster<I>(classified: I, outlier_radius: f64) -> OutlierListCollection
where
    I: IntoIterator<Item = Classification>,
{
    let mut collection = OutlierListCollection::default();
    let mut outliers: Vec<Outlier> = Vec::new();

    for item in classified {
        match item {
            Classification::HighFarOut => collection.high_far_out = true,
            Classification::LowFarOut => collection.low_far_out = true,
            Classification::Regular { position } => outliers.push(Outlier {
                position,
                radius: outlier_radius,
            }),
            Classification::Inlier => {}
        }
    }

    // Vec::sort_by is stable: equal positions preserve insertion order.
    outliers.sort_by(|a, b| {
        a.position
            .partial_cmp(&b.position)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for outlier in outliers {
        let joined = match collection.lists.last_mut() {
            Some(last) if last.overlaps(&outlier, outlier_radius) => {
                debug!(
                    position = outlier.position,
                    averaged = last.averaged.position,
                    "outlier joins open list"
                );
                last.push(outlier);
                true
            }
            _ => false,
        };
        if !joined {
            collection.lists.push(OutlierList::new(outlier));
        }
    }

    collection
}
