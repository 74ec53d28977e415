//! Band subdivision: where one item sits inside its category band.

use crate::axis::Band;

/// Leading edge (smallest layout coordinate) of one item's glyph inside a
/// category band shared by `series_count` series.
///
/// A lone series is centered in the band. Grouped series split the band
/// into `series_count` slots separated by a gap derived from the plot-wide
/// margin fraction: the margin is spread over every inter-item gap of every
/// category, so `layout_extent` is the data area's full extent along the
/// layout axis.
pub fn leading_edge(
    band: Band,
    item_width: f64,
    series: usize,
    series_count: usize,
    category_count: usize,
    item_margin: f64,
    layout_extent: f64,
) -> f64 {
    if series_count > 1 {
        let gap = layout_extent * item_margin / (category_count * (series_count - 1)) as f64;
        let used = item_width * series_count as f64 + gap * (series_count - 1) as f64;
        let offset = (band.width() - used) / 2.0;
        band.start + offset + series as f64 * (item_width + gap)
    } else {
        band.start + (band.width() - item_width) / 2.0
    }
}
