//! Box-and-whisker glyph layout for grouped categorical plots.
//!
//! Given a five-number summary and raw outlier values for one
//! `(series, category)` cell, this crate computes everything a renderer
//! needs to draw that cell's glyph: the box rectangle, whisker and cap
//! segments, mean and median markers, proximity-clustered outlier markers
//! and far-out boundary indicators. It does not compute statistics and it
//! does not draw; axes and datasets plug in through the [`axis`] and
//! [`data`] trait seams, and the output is a plain [`layout::ItemGlyph`]
//! value.
//!
//! Layout happens in axis space (layout axis x value axis);
//! [`types::Orientation`] maps the result onto the screen, so horizontal
//! and vertical plots share one code path.
//!
//! # Example
//!
//! ```
//! use boxglyph::{
//!     CellStats, FiveNumberSummary, GlyphConfig, ItemLayout, LinearAxis, MemoryDataset,
//!     Orientation, OutlierThresholds, UniformBands,
//! };
//!
//! let mut dataset = MemoryDataset::new(1, 1);
//! dataset.set_cell(0, 0, CellStats {
//!     summary: FiveNumberSummary {
//!         q1: Some(10.0),
//!         q3: Some(20.0),
//!         min_regular: Some(5.0),
//!         max_regular: Some(25.0),
//!         mean: Some(15.0),
//!         median: Some(16.0),
//!     },
//!     thresholds: Some(OutlierThresholds { min_outlier: -10.0, max_outlier: 40.0 }),
//!     outliers: vec![26.0, 27.0],
//! });
//!
//! // Vertical plot: the value axis is screen-inverted.
//! let value_axis = LinearAxis::new(0.0, 50.0, 400.0, 0.0)?;
//! let bands = UniformBands::new(0.0, 120.0);
//! let layout = ItemLayout::new(&value_axis, &bands, 120.0, GlyphConfig::default());
//!
//! let item = layout.layout_item(&dataset, 0, 0);
//! assert!(item.body.is_some());
//! assert!(item.entity_rect(Orientation::Vertical).is_some());
//! # Ok::<(), boxglyph::AxisError>(())
//! ```

pub mod axis;
pub mod data;
pub mod errors;
pub mod layout;
pub mod log;
pub mod types;

pub use axis::{Band, CategoryAxis, LinearAxis, UniformBands, ValueAxis};
pub use data::{
    BoxStats, BoxWhiskerDataset, CellStats, FiveNumberSummary, MemoryDataset, OutlierThresholds,
};
pub use errors::{AxisError, ConfigError};
pub use layout::{
    BoxBody, FarOutMarker, GlyphConfig, ItemGlyph, ItemLayout, OutlierMarker, Whiskers,
};
pub use types::{
    AxisPoint, AxisRect, Disc, EllipseMarker, Orientation, ScreenRect, Segment,
};
