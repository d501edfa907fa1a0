//! Plain value types for points, sizes and rectangles.
//!
//! Rectangles follow the GDI+ convention of an origin plus a size. Internally the
//! engine works on euclid boxes (`MathRect`) which store the min/max corners and
//! make edge arithmetic straightforward.

use std::fmt;

pub(crate) type MathRect = euclid::default::Box2D<f32>;
pub(crate) type MathPoint = euclid::default::Point2D<f32>;

/// A point with floating point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub(crate) fn to_euclid(self) -> MathPoint {
        MathPoint::new(self.x, self.y)
    }

    pub(crate) fn from_euclid(point: MathPoint) -> Self {
        Self::new(point.x, point.y)
    }
}

impl From<(f32, f32)> for PointF {
    fn from(value: (f32, f32)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl fmt::Display for PointF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeF {
    pub width: f32,
    pub height: f32,
}

impl SizeF {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle described by its top-left corner and its size.
///
/// A rectangle with a non-positive width or height encloses no points.
///
/// ```
/// use clipframe::RectF;
///
/// let a = RectF::new(0.0, 0.0, 10.0, 10.0);
/// let b = RectF::new(5.0, 5.0, 10.0, 10.0);
/// assert_eq!(a.intersect(&b), Some(RectF::new(5.0, 5.0, 5.0, 5.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectF {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RectF {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// The same rectangle with a non-negative width and height. A negative
    /// extent moves the origin to the opposite edge.
    pub fn normalized(&self) -> RectF {
        RectF::from_ltrb(
            self.left().min(self.right()),
            self.top().min(self.bottom()),
            self.left().max(self.right()),
            self.top().max(self.bottom()),
        )
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Returns true if `point` is inside the rectangle. The right and bottom edges
    /// are exclusive.
    pub fn contains_point(&self, point: PointF) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Geometric intersection, or `None` when the rectangles do not overlap.
    pub fn intersect(&self, other: &RectF) -> Option<RectF> {
        self.to_box()
            .intersection(&other.to_box())
            .map(RectF::from_box)
    }

    /// Smallest rectangle enclosing both rectangles.
    pub fn union(&self, other: &RectF) -> RectF {
        RectF::from_ltrb(
            self.left().min(other.left()),
            self.top().min(other.top()),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }

    pub fn offset(&self, dx: f32, dy: f32) -> RectF {
        RectF::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    pub fn corners(&self) -> [PointF; 4] {
        [
            PointF::new(self.left(), self.top()),
            PointF::new(self.right(), self.top()),
            PointF::new(self.right(), self.bottom()),
            PointF::new(self.left(), self.bottom()),
        ]
    }

    /// Smallest rectangle enclosing every point. Returns an empty rectangle at
    /// the origin for an empty slice.
    pub fn enclosing(points: &[PointF]) -> RectF {
        let Some(first) = points.first() else {
            return RectF::default();
        };
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for point in &points[1..] {
            min_x = min_x.min(point.x);
            min_y = min_y.min(point.y);
            max_x = max_x.max(point.x);
            max_y = max_y.max(point.y);
        }
        RectF::from_ltrb(min_x, min_y, max_x, max_y)
    }

    pub(crate) fn to_box(self) -> MathRect {
        MathRect::new(
            MathPoint::new(self.left(), self.top()),
            MathPoint::new(self.right(), self.bottom()),
        )
    }

    pub(crate) fn from_box(rect: MathRect) -> Self {
        RectF::from_ltrb(rect.min.x, rect.min.y, rect.max.x, rect.max.y)
    }
}

impl fmt::Display for RectF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{x={}, y={}, w={}, h={}}}",
            self.x, self.y, self.width, self.height
        )
    }
}
