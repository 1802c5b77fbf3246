#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Coordinates are viewport pixels (origin at top-left, y grows downward).
//! Callers measure element bounds fresh at call time; nothing here caches
//! layout.

/// A point in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// An element's bounding box, as reported by live layout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Left edge (alias for x).
    #[inline]
    pub const fn left(&self) -> f64 {
        self.x
    }

    /// Top edge (alias for y).
    #[inline]
    pub const fn top(&self) -> f64 {
        self.y
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    pub fn top_left(&self) -> Point {
        Point::new(self.left(), self.top())
    }

    #[inline]
    pub fn top_right(&self) -> Point {
        Point::new(self.right(), self.top())
    }

    #[inline]
    pub fn bottom_left(&self) -> Point {
        Point::new(self.left(), self.bottom())
    }

    #[inline]
    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    /// Center point of the rectangle.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check if a point is inside the rectangle, edges included.
    ///
    /// Pointer coordinates land exactly on element borders often enough that
    /// an inclusive test avoids flicker at the boundary.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Whether the horizontal extents of the two rectangles overlap.
    #[inline]
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.left() < other.right() && other.left() < self.right()
    }

    /// Whether the vertical extents of the two rectangles overlap.
    #[inline]
    pub fn overlaps_vertically(&self, other: &Rect) -> bool {
        self.top() < other.bottom() && other.top() < self.bottom()
    }

    /// Create a new rectangle that is the union of this rectangle and another.
    ///
    /// The result is the smallest rectangle that contains both.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());

        Rect {
            x,
            y,
            width: right - x,
            height: bottom - y,
        }
    }
}

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    #[inline]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Horizontal segment from `origin` to `far_x` at the same height.
    #[inline]
    pub const fn horizontal_ray(origin: Point, far_x: f64) -> Self {
        Self::new(origin, Point::new(far_x, origin.y))
    }
}

/// Counter-clockwise orientation test for three points.
///
/// Returns `true` when `a -> b -> c` turns counter-clockwise in a y-up frame
/// (clockwise on screen). Only the consistency of the answer matters to
/// [`segments_intersect`].
#[inline]
pub fn ccw(a: Point, b: Point, c: Point) -> bool {
    (c.y - a.y) * (b.x - a.x) > (b.y - a.y) * (c.x - a.x)
}

/// Whether two segments properly intersect.
///
/// Collinear and endpoint-touching configurations are not reported as
/// intersections.
#[inline]
pub fn segments_intersect(first: Segment, second: Segment) -> bool {
    let (p1, p2) = (first.start, first.end);
    let (p3, p4) = (second.start, second.end);
    ccw(p1, p3, p4) != ccw(p2, p3, p4) && ccw(p1, p2, p3) != ccw(p1, p2, p4)
}

#[cfg(test)]
mod tests {
    use super::{Point, Rect, Segment, segments_intersect};

    #[test]
    fn rect_contains_edges() {
        let rect = Rect::new(2.0, 3.0, 4.0, 5.0);
        assert!(rect.contains(Point::new(2.0, 3.0)));
        assert!(rect.contains(Point::new(6.0, 8.0)));
        assert!(!rect.contains(Point::new(6.5, 3.0)));
        assert!(!rect.contains(Point::new(2.0, 8.5)));
    }

    #[test]
    fn rect_corners_and_center() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.top_left(), Point::new(10.0, 20.0));
        assert_eq!(rect.top_right(), Point::new(40.0, 20.0));
        assert_eq!(rect.bottom_left(), Point::new(10.0, 60.0));
        assert_eq!(rect.bottom_right(), Point::new(40.0, 60.0));
        assert_eq!(rect.center(), Point::new(25.0, 40.0));
    }

    #[test]
    fn rect_union_covers_both() {
        let a = Rect::new(0.0, 0.0, 2.0, 2.0);
        let b = Rect::new(5.0, 1.0, 2.0, 4.0);
        assert_eq!(a.union(&b), Rect::new(0.0, 0.0, 7.0, 5.0));
    }

    #[test]
    fn extent_overlap_checks() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(100.0, 5.0, 10.0, 10.0);
        let below = Rect::new(5.0, 100.0, 10.0, 10.0);
        assert!(a.overlaps_vertically(&right));
        assert!(!a.overlaps_horizontally(&right));
        assert!(a.overlaps_horizontally(&below));
        assert!(!a.overlaps_vertically(&below));
    }

    #[test]
    fn crossing_segments_intersect() {
        let a = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        let b = Segment::new(Point::new(0.0, 10.0), Point::new(10.0, 0.0));
        assert!(segments_intersect(a, b));
        assert!(segments_intersect(b, a));
    }

    #[test]
    fn parallel_segments_do_not_intersect() {
        let a = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let b = Segment::new(Point::new(0.0, 5.0), Point::new(10.0, 5.0));
        assert!(!segments_intersect(a, b));
    }

    #[test]
    fn disjoint_segments_do_not_intersect() {
        let a = Segment::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let b = Segment::new(Point::new(5.0, 0.0), Point::new(5.0, 10.0));
        assert!(!segments_intersect(a, b));
    }

    #[test]
    fn horizontal_ray_keeps_height() {
        let ray = Segment::horizontal_ray(Point::new(3.0, 7.0), 50.0);
        assert_eq!(ray.end, Point::new(50.0, 7.0));
    }
}
