//! Integer geometry primitives shared by every pipeline stage.
//!
//! All coordinates are whole canvas units. Intermediate math runs in `f64` through
//! [`glam::DVec2`] and is brought back to the lattice with [`round_vec`], so every
//! stage rounds at the same points with the same rule.
use std::fmt;
use std::ops::{Add, Neg, Sub};

use glam::{DVec2, IVec2};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::grid::GridIndex;

/// A point on the canvas in whole units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Converts to a double-precision vector for intermediate math.
    #[inline]
    pub fn as_dvec2(self) -> DVec2 {
        DVec2::new(self.x as f64, self.y as f64)
    }

    /// Euclidean length when the point is read as a vector.
    #[inline]
    pub fn length(self) -> f64 {
        self.as_dvec2().length()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl From<IVec2> for Point {
    fn from(v: IVec2) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for IVec2 {
    fn from(p: Point) -> Self {
        IVec2::new(p.x, p.y)
    }
}

impl From<mint::Point2<i32>> for Point {
    fn from(p: mint::Point2<i32>) -> Self {
        Point::new(p.x, p.y)
    }
}

impl From<Point> for mint::Point2<i32> {
    fn from(p: Point) -> Self {
        mint::Point2 { x: p.x, y: p.y }
    }
}

/// Rounds each component half away from zero.
#[inline]
pub fn round_vec(v: DVec2) -> Point {
    Point::new(v.x.round() as i32, v.y.round() as i32)
}

/// Lattice direction of an edge, taken from its grid indices rather than its
/// (possibly perturbed) geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EdgeOrientation {
    Horizontal,
    Vertical,
}

/// Adjacency between two neighboring grid points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge {
    pub start: Point,
    pub end: Point,
    /// Lattice index of `start`.
    pub from: GridIndex,
    /// Lattice index of `end`.
    pub to: GridIndex,
}

impl Edge {
    pub fn new(start: Point, end: Point, from: GridIndex, to: GridIndex) -> Self {
        Self {
            start,
            end,
            from,
            to,
        }
    }

    /// `end - start`.
    #[inline]
    pub fn vector(&self) -> Point {
        self.end - self.start
    }

    pub fn orientation(&self) -> EdgeOrientation {
        if self.from.iy == self.to.iy {
            EdgeOrientation::Horizontal
        } else {
            EdgeOrientation::Vertical
        }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// True when both endpoints sit on the same side of the `width` x `height` canvas.
    pub fn lies_on_border(&self, width: i32, height: i32) -> bool {
        let (a, b) = (self.start, self.end);
        let both = |u: i32, v: i32, line: i32| u == line && v == line;
        both(a.x, b.x, 0) || both(a.x, b.x, width) || both(a.y, b.y, 0) || both(a.y, b.y, height)
    }
}

/// Six-point tongue descriptor: two cubic Bézier segments meeting at `middle`.
///
/// The first segment runs `start → middle` with controls `start_control` and
/// `middle_control`; the second runs `middle → end` with `end_control`, its first
/// control being the reflection of `middle_control` about `middle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Curve {
    pub start: Point,
    pub start_control: Point,
    pub middle: Point,
    pub middle_control: Point,
    pub end_control: Point,
    pub end: Point,
}

impl Curve {
    /// All six points in declaration order.
    pub fn points(&self) -> [Point; 6] {
        [
            self.start,
            self.start_control,
            self.middle,
            self.middle_control,
            self.end_control,
            self.end,
        ]
    }
}
