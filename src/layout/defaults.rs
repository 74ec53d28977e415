//! Default glyph sizing (ratios are relative to the item width)

pub const ITEM_WIDTH: f64 = 10.0;
pub const ITEM_MARGIN: f64 = 0.2;
pub const WHISKER_WIDTH: f64 = 1.0;
pub const MEAN_RADIUS_RATIO: f64 = 0.25;
pub const OUTLIER_RADIUS_RATIO: f64 = 1.0 / 3.0;
/// Far-out indicator half-size, as a ratio of the mean radius.
pub const FAR_OUT_HALF_RATIO: f64 = 0.5;
