//! Axis, points and rectangles used by the split-pane engine

use serde::{Deserialize, Serialize};

/// Direction along which a group arranges and resizes its panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Panels side by side; sizes are widths, drags follow X
    #[default]
    Horizontal,
    /// Panels stacked; sizes are heights, drags follow Y
    Vertical,
}

impl Axis {
    /// The coordinate of `point` along this axis
    #[inline]
    pub fn main(self, point: Point) -> f64 {
        match self {
            Axis::Horizontal => point.x,
            Axis::Vertical => point.y,
        }
    }

    /// Extent of `rect` along this axis (width or height)
    #[inline]
    pub fn extent(self, rect: Rect) -> f64 {
        match self {
            Axis::Horizontal => rect.width,
            Axis::Vertical => rect.height,
        }
    }

    /// Extent of `rect` across this axis
    #[inline]
    pub fn cross_extent(self, rect: Rect) -> f64 {
        match self {
            Axis::Horizontal => rect.height,
            Axis::Vertical => rect.width,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        }
    }
}

/// A point in window coordinates (physical pixels)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rectangle for layout calculations
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    /// Grow the rect along `axis` so it is at least `min_extent` wide, keeping
    /// it centered. Used for hit rects of thin handles.
    pub fn expand_to(&self, axis: Axis, min_extent: f64) -> Rect {
        let extent = axis.extent(*self);
        if extent >= min_extent {
            return *self;
        }
        let pad = (min_extent - extent) / 2.0;
        match axis {
            Axis::Horizontal => Rect::new(self.x - pad, self.y, min_extent, self.height),
            Axis::Vertical => Rect::new(self.x, self.y - pad, self.width, min_extent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_picks_matching_coordinate() {
        let p = Point::new(3.0, 7.0);
        assert_eq!(Axis::Horizontal.main(p), 3.0);
        assert_eq!(Axis::Vertical.main(p), 7.0);

        let r = Rect::new(0.0, 0.0, 800.0, 600.0);
        assert_eq!(Axis::Horizontal.extent(r), 800.0);
        assert_eq!(Axis::Vertical.extent(r), 600.0);
        assert_eq!(Axis::Vertical.cross_extent(r), 800.0);
    }

    #[test]
    fn test_expand_to_centers_hit_rect() {
        let r = Rect::new(100.0, 0.0, 2.0, 50.0);
        let hit = r.expand_to(Axis::Horizontal, 8.0);
        assert_eq!(hit, Rect::new(97.0, 0.0, 8.0, 50.0));
        assert!(hit.contains(Point::new(97.5, 10.0)));
        assert!(!r.contains(Point::new(97.5, 10.0)));

        // Already wide enough
        assert_eq!(r.expand_to(Axis::Horizontal, 1.0), r);
    }
}
