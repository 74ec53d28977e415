//! Axis-space geometry primitives for glyph layout.
//!
//! All layout math happens in *axis space*: one coordinate along the layout
//! axis (where category bands live) and one along the value axis (where data
//! values project). `Orientation` maps axis space onto the two screen axes,
//! so horizontal and vertical plots share a single layout path.

use glam::{DVec2, dvec2};

/// Plot orientation: which screen axis the category bands run along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Bands along screen x, values along screen y (upright boxes).
    Vertical,
    /// Bands along screen y, values along screen x (sideways boxes).
    Horizontal,
}

impl Orientation {
    /// Map an axis-space point to screen pixels.
    pub fn screen_point(self, p: AxisPoint) -> DVec2 {
        match self {
            Orientation::Vertical => dvec2(p.layout, p.value),
            Orientation::Horizontal => dvec2(p.value, p.layout),
        }
    }

    /// Map an axis-space rectangle to a screen rectangle.
    pub fn screen_rect(self, r: AxisRect) -> ScreenRect {
        let origin = self.screen_point(r.origin);
        let size = match self {
            Orientation::Vertical => dvec2(r.layout_extent, r.value_extent),
            Orientation::Horizontal => dvec2(r.value_extent, r.layout_extent),
        };
        ScreenRect { origin, size }
    }

    /// Map an axis-space segment to its two screen endpoints.
    pub fn screen_segment(self, s: Segment) -> (DVec2, DVec2) {
        (self.screen_point(s.from), self.screen_point(s.to))
    }
}

/// A point in axis space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisPoint {
    /// Coordinate along the layout axis (pixels).
    pub layout: f64,
    /// Coordinate along the value axis (pixels).
    pub value: f64,
}

impl AxisPoint {
    pub fn new(layout: f64, value: f64) -> Self {
        AxisPoint { layout, value }
    }
}

/// An axis-aligned rectangle in axis space.
///
/// `origin` is the corner with the smallest coordinate on both axes; extents
/// are non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRect {
    pub origin: AxisPoint,
    pub layout_extent: f64,
    pub value_extent: f64,
}

impl AxisRect {
    pub fn new(origin: AxisPoint, layout_extent: f64, value_extent: f64) -> Self {
        AxisRect {
            origin,
            layout_extent,
            value_extent,
        }
    }

    /// Midpoint of the rectangle along the layout axis.
    pub fn layout_mid(&self) -> f64 {
        self.origin.layout + self.layout_extent / 2.0
    }
}

/// A line segment in axis space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: AxisPoint,
    pub to: AxisPoint,
}

impl Segment {
    pub fn new(from: AxisPoint, to: AxisPoint) -> Self {
        Segment { from, to }
    }
}

/// A filled circle marker in axis space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    pub center: AxisPoint,
    pub radius: f64,
}

/// An axis-aligned ellipse marker in axis space.
///
/// Used for merged outlier groups, which stretch along the layout axis to
/// signal "multiple values here".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseMarker {
    pub center: AxisPoint,
    pub layout_radius: f64,
    pub value_radius: f64,
}

/// A rectangle in screen pixels, origin at the minimum corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub origin: DVec2,
    pub size: DVec2,
}
