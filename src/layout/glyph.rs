//! Box, whisker, mean and median geometry for one item.

use crate::axis::ValueAxis;
use crate::data::BoxStats;
use crate::log::debug;
use crate::types::{AxisPoint, AxisRect, Disc, Segment};

use super::defaults;

/// The four whisker segments of a box: a line from each extreme to the
/// nearer box edge, plus a perpendicular cap centered at the extreme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Whiskers {
    pub upper: Segment,
    pub upper_cap: Segment,
    pub lower: Segment,
    pub lower_cap: Segment,
}

/// Box rectangle and whiskers; always produced together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxBody {
    pub rect: AxisRect,
    pub whiskers: Whiskers,
}

/// Box rectangle plus whiskers for a complete set of box statistics.
///
/// The rectangle's value-axis origin is the smaller of the two projected
/// quartiles, so the geometry holds under inverted axes. Whisker lines run
/// from the projected extreme to the projected quartile on the item
/// midline; each cap has total length `item_width * whisker_width`.
pub fn box_and_whiskers(
    stats: BoxStats,
    axis: &dyn ValueAxis,
    leading_edge: f64,
    item_width: f64,
    whisker_width: f64,
) -> BoxBody {
    let q1 = axis.project(stats.q1);
    let q3 = axis.project(stats.q3);
    let max = axis.project(stats.max_regular);
    let min = axis.project(stats.min_regular);

    let mid = leading_edge + item_width / 2.0;
    let half_cap = (item_width / 2.0) * whisker_width;

    let rect = AxisRect::new(
        AxisPoint::new(leading_edge, q1.min(q3)),
        item_width,
        (q1 - q3).abs(),
    );

    let cap = |at: f64| {
        Segment::new(
            AxisPoint::new(mid - half_cap, at),
            AxisPoint::new(mid + half_cap, at),
        )
    };

    let whiskers = Whiskers {
        upper: Segment::new(AxisPoint::new(mid, max), AxisPoint::new(mid, q3)),
        upper_cap: cap(max),
        lower: Segment::new(AxisPoint::new(mid, min), AxisPoint::new(mid, q1)),
        lower_cap: cap(min),
    };

    BoxBody { rect, whiskers }
}

/// Mean marker disc, or `None` when the projected mean falls outside the
/// visible span (padded by one radius on each side). An off-canvas mean is
/// skipped, not an error.
pub fn mean_marker(
    mean: f64,
    axis: &dyn ValueAxis,
    leading_edge: f64,
    item_width: f64,
) -> Option<Disc> {
    let radius = item_width * defaults::MEAN_RADIUS_RATIO;
    let pos = axis.project(mean);
    let (span_min, span_max) = axis.pixel_span();
    if pos < span_min - radius || pos > span_max + radius {
        debug!(pos, span_min, span_max, "mean marker off-canvas, skipping");
        return None;
    }
    Some(Disc {
        center: AxisPoint::new(leading_edge + item_width / 2.0, pos),
        radius,
    })
}

/// Median line across the full item width.
pub fn median_line(
    median: f64,
    axis: &dyn ValueAxis,
    leading_edge: f64,
    item_width: f64,
) -> Segment {
    let pos = axis.project(median);
    Segment::new(
        AxisPoint::new(leading_edge, pos),
        AxisPoint::new(leading_edge + item_width, pos),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::LinearAxis;

    const EPS: f64 = 1e-9;

    fn axis() -> LinearAxis {
        // 1 data unit == 10 px
        LinearAxis::new(0.0, 30.0, 0.0, 300.0).unwrap()
    }

    fn stats() -> BoxStats {
        BoxStats {
            q1: 10.0,
            q3: 20.0,
            min_regular: 5.0,
            max_regular: 25.0,
        }
    }

    // ==================== box + whisker tests ====================

    #[test]
    fn box_spans_item_width_and_projected_quartiles() {
        let body = box_and_whiskers(stats(), &axis(), 40.0, 10.0, 0.5);
        assert_eq!(body.rect.origin, AxisPoint::new(40.0, 100.0));
        assert_eq!(body.rect.layout_extent, 10.0);
        assert!((body.rect.value_extent - 100.0).abs() < EPS);
    }

    #[test]
    fn box_origin_holds_under_inverted_axis() {
        let inverted = LinearAxis::new(0.0, 30.0, 300.0, 0.0).unwrap();
        let body = box_and_whiskers(stats(), &inverted, 40.0, 10.0, 0.5);
        // proj(q1)=200, proj(q3)=100: origin is the smaller projection
        assert_eq!(body.rect.origin.value, 100.0);
        assert!((body.rect.value_extent - 100.0).abs() < EPS);
    }

    #[test]
    fn whiskers_run_from_extreme_to_box_edge_on_the_midline() {
        let body = box_and_whiskers(stats(), &axis(), 40.0, 10.0, 0.5);
        let w = body.whiskers;
        assert_eq!(w.upper.from, AxisPoint::new(45.0, 250.0));
        assert_eq!(w.upper.to, AxisPoint::new(45.0, 200.0));
        assert_eq!(w.lower.from, AxisPoint::new(45.0, 50.0));
        assert_eq!(w.lower.to, AxisPoint::new(45.0, 100.0));
    }

    #[test]
    fn caps_are_centered_at_the_extremes() {
        let body = box_and_whiskers(stats(), &axis(), 40.0, 10.0, 0.5);
        let cap = body.whiskers.upper_cap;
        // total cap length = item_width * whisker_width = 5
        assert_eq!(cap.from, AxisPoint::new(42.5, 250.0));
        assert_eq!(cap.to, AxisPoint::new(47.5, 250.0));
        let low = body.whiskers.lower_cap;
        assert_eq!(low.from.value, 50.0);
        assert_eq!(low.to.value, 50.0);
    }

    // ==================== mean marker tests ====================

    #[test]
    fn mean_marker_sits_on_the_midline() {
        let disc = mean_marker(15.0, &axis(), 40.0, 10.0).unwrap();
        assert_eq!(disc.center, AxisPoint::new(45.0, 150.0));
        assert!((disc.radius - 2.5).abs() < EPS);
    }

    #[test]
    fn mean_marker_culled_when_off_canvas() {
        assert!(mean_marker(100.0, &axis(), 40.0, 10.0).is_none());
        assert!(mean_marker(-50.0, &axis(), 40.0, 10.0).is_none());
    }

    #[test]
    fn mean_marker_kept_within_one_radius_of_the_edge() {
        // proj(30.2) = 302, span max 300, radius 2.5 -> still visible
        let disc = mean_marker(30.2, &axis(), 40.0, 10.0);
        assert!(disc.is_some());
    }

    // ==================== median tests ====================

    #[test]
    fn median_line_spans_the_full_item_width() {
        let seg = median_line(16.0, &axis(), 40.0, 10.0);
        assert_eq!(seg.from, AxisPoint::new(40.0, 160.0));
        assert_eq!(seg.to, AxisPoint::new(50.0, 160.0));
    }
}
