//! Per-item layout: assembling one cell's glyph.
//!
//! This module is organized into submodules:
//! - `defaults`: sizing ratios and margins
//! - `band`: category-band subdivision across grouped series
//! - `glyph`: box, whisker, mean and median geometry
//! - `outliers`: outlier classification and proximity clustering
//!
//! [`ItemLayout::layout_item`] drives the whole pipeline for one
//! `(series, category)` cell and returns an [`ItemGlyph`]. Every part of
//! the glyph is computed independently from the same summary: a missing
//! statistic suppresses its own marker and nothing else.

pub mod band;
pub mod defaults;
pub mod glyph;
pub mod outliers;

pub use glyph::{BoxBody, Whiskers};
pub use outliers::{
    Classification, Outlier, OutlierList, OutlierListCollection, classify, cluster,
};

use crate::axis::{CategoryAxis, ValueAxis};
use crate::data::BoxWhiskerDataset;
use crate::errors::ConfigError;
use crate::log::debug;
use crate::types::{AxisPoint, Disc, EllipseMarker, Orientation, ScreenRect, Segment};

/// Glyph sizing and visibility settings, validated at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphConfig {
    /// Glyph width along the layout axis, in pixels.
    pub item_width: f64,
    /// Fraction of the layout extent reserved for gaps between grouped
    /// series, spread across all categories.
    pub item_margin: f64,
    /// Whisker-cap length as a ratio of the item width.
    pub whisker_width: f64,
    pub mean_visible: bool,
    pub median_visible: bool,
}

impl GlyphConfig {
    /// Validated configuration. Visibility toggles default to on and can
    /// be flipped on the returned value.
    pub fn new(item_width: f64, item_margin: f64, whisker_width: f64) -> Result<Self, ConfigError> {
        if !item_width.is_finite() || item_width <= 0.0 {
            return Err(ConfigError::InvalidItemWidth { value: item_width });
        }
        if !(0.0..1.0).contains(&item_margin) {
            return Err(ConfigError::InvalidItemMargin { value: item_margin });
        }
        if !(0.0..=1.0).contains(&whisker_width) {
            return Err(ConfigError::InvalidWhiskerWidth {
                value: whisker_width,
            });
        }
        Ok(GlyphConfig {
            item_width,
            item_margin,
            whisker_width,
            mean_visible: true,
            median_visible: true,
        })
    }

    /// Radius of the mean marker.
    pub fn mean_radius(&self) -> f64 {
        self.item_width * defaults::MEAN_RADIUS_RATIO
    }

    /// Nominal radius of a single outlier marker.
    pub fn outlier_radius(&self) -> f64 {
        self.item_width * defaults::OUTLIER_RADIUS_RATIO
    }
}

impl Default for GlyphConfig {
    fn default() -> Self {
        GlyphConfig {
            item_width: defaults::ITEM_WIDTH,
            item_margin: defaults::ITEM_MARGIN,
            whisker_width: defaults::WHISKER_WIDTH,
            mean_visible: true,
            median_visible: true,
        }
    }
}

/// One rendered outlier group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutlierMarker {
    /// A lone outlier: plain circle at its projected position.
    Single(Disc),
    /// A merged group: ellipse at the averaged position, stretched to the
    /// item width along the layout axis.
    Multiple(EllipseMarker),
}

/// Boundary indicator for values beyond the far-out thresholds, placed at
/// the projected axis bound offset outward by `half_size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FarOutMarker {
    pub center: AxisPoint,
    pub half_size: f64,
}

/// Everything one cell draws, in axis space. Owned by the caller of
/// [`ItemLayout::layout_item`]; the renderer consumes it once.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemGlyph {
    /// Box and whiskers; `None` when any box statistic was missing.
    pub body: Option<BoxBody>,
    pub mean: Option<Disc>,
    pub median: Option<Segment>,
    pub outliers: Vec<OutlierMarker>,
    pub high_far_out: Option<FarOutMarker>,
    pub low_far_out: Option<FarOutMarker>,
}

impl ItemGlyph {
    pub fn has_high_far_out(&self) -> bool {
        self.high_far_out.is_some()
    }

    pub fn has_low_far_out(&self) -> bool {
        self.low_far_out.is_some()
    }

    /// Screen-space box rectangle for hit-testing and tooltips, when a box
    /// was produced.
    pub fn entity_rect(&self, orientation: Orientation) -> Option<ScreenRect> {
        self.body.as_ref().map(|b| orientation.screen_rect(b.rect))
    }
}

/// Layout context for one plot: the axis seams, the data-area extent along
/// the layout axis, and the glyph configuration.
pub struct ItemLayout<'a> {
    value_axis: &'a dyn ValueAxis,
    category_axis: &'a dyn CategoryAxis,
    layout_extent: f64,
    config: GlyphConfig,
}

impl<'a> ItemLayout<'a> {
    pub fn new(
        value_axis: &'a dyn ValueAxis,
        category_axis: &'a dyn CategoryAxis,
        layout_extent: f64,
        config: GlyphConfig,
    ) -> Self {
        ItemLayout {
            value_axis,
            category_axis,
            layout_extent,
            config,
        }
    }

    /// Compute the full glyph for one `(series, category)` cell.
    ///
    /// Never fails: absent statistics, absent thresholds and off-canvas
    /// positions all resolve to "nothing to draw" for the affected part.
    pub fn layout_item(
        &self,
        dataset: &dyn BoxWhiskerDataset,
        series: usize,
        category: usize,
    ) -> ItemGlyph {
        let cfg = &self.config;
        let band = self.category_axis.band(category, dataset.category_count());
        let edge = band::leading_edge(
            band,
            cfg.item_width,
            series,
            dataset.series_count(),
            dataset.category_count(),
            cfg.item_margin,
            self.layout_extent,
        );
        let mid = edge + cfg.item_width / 2.0;

        let summary = dataset.summary(series, category);

        let body = summary.box_stats().map(|stats| {
            glyph::box_and_whiskers(stats, self.value_axis, edge, cfg.item_width, cfg.whisker_width)
        });
        if body.is_none() {
            debug!(series, category, "incomplete box statistics, no box");
        }

        let mean = if cfg.mean_visible {
            summary
                .mean
                .and_then(|m| glyph::mean_marker(m, self.value_axis, edge, cfg.item_width))
        } else {
            None
        };
        let median = if cfg.median_visible {
            summary
                .median
                .map(|m| glyph::median_line(m, self.value_axis, edge, cfg.item_width))
        } else {
            None
        };

        // The mean radius feeds the far-out indicator size whenever the mean
        // statistic is eligible for drawing, even if the marker was culled.
        let far_out_half = if cfg.mean_visible && summary.mean.is_some() {
            cfg.mean_radius() * defaults::FAR_OUT_HALF_RATIO
        } else {
            0.0
        };

        let raw = dataset.outliers(series, category);
        let collection = match dataset.thresholds(series, category) {
            Some(thresholds) if !raw.is_empty() => outliers::cluster(
                raw.iter()
                    .map(|&v| outliers::classify(v, thresholds, &summary, self.value_axis)),
                cfg.outlier_radius(),
            ),
            _ => OutlierListCollection::default(),
        };

        let markers = collection
            .lists()
            .iter()
            .map(|list| {
                let avg = list.averaged_outlier();
                let center = AxisPoint::new(mid, avg.position);
                if list.is_multiple() {
                    OutlierMarker::Multiple(EllipseMarker {
                        center,
                        layout_radius: cfg.item_width / 2.0,
                        value_radius: avg.radius,
                    })
                } else {
                    OutlierMarker::Single(Disc {
                        center,
                        radius: avg.radius,
                    })
                }
            })
            .collect();

        // Far-out indicators sit at the projected axis bounds, nudged
        // outward along the increasing-value (or decreasing, for the low
        // side) direction of the axis.
        let lo_px = self.value_axis.project(self.value_axis.lower_bound());
        let hi_px = self.value_axis.project(self.value_axis.upper_bound());
        let outward = (hi_px - lo_px).signum();
        let high_far_out = collection.high_far_out().then(|| FarOutMarker {
            center: AxisPoint::new(mid, hi_px + outward * far_out_half),
            half_size: far_out_half,
        });
        let low_far_out = collection.low_far_out().then(|| FarOutMarker {
            center: AxisPoint::new(mid, lo_px - outward * far_out_half),
            half_size: far_out_half,
        });

        ItemGlyph {
            body,
            mean,
            median,
            outliers: markers,
            high_far_out,
            low_far_out,
        }
    }
}
