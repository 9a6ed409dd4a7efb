//! Regular point lattice keyed by integer grid indices.
//!
//! A [`Grid`] always holds exactly `(nx + 1) * (ny + 1)` points. Later stages never add
//! or remove keys; they build a new grid with the same key set via [`Grid::map_points`].
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Lattice key. Orders lexicographically by `(ix, iy)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridIndex {
    pub ix: u32,
    pub iy: u32,
}

impl GridIndex {
    pub const fn new(ix: u32, iy: u32) -> Self {
        Self { ix, iy }
    }
}

impl fmt::Display for GridIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.ix, self.iy)
    }
}

/// Points stored in key order: `ix` major, `iy` minor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid {
    nx: u32,
    ny: u32,
    points: Vec<Point>,
}

impl Grid {
    fn from_fn(nx: u32, ny: u32, mut f: impl FnMut(GridIndex) -> Point) -> Self {
        let count = (nx as usize + 1) * (ny as usize + 1);
        let mut points = Vec::with_capacity(count);
        for ix in 0..=nx {
            for iy in 0..=ny {
                points.push(f(GridIndex::new(ix, iy)));
            }
        }
        Self { nx, ny, points }
    }

    /// Number of cells along X; the grid has `nx + 1` columns of points.
    pub fn nx(&self) -> u32 {
        self.nx
    }

    /// Number of cells along Y; the grid has `ny + 1` rows of points.
    pub fn ny(&self) -> u32 {
        self.ny
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; even a `0 x 0` grid holds its origin point.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, index: GridIndex) -> bool {
        index.ix <= self.nx && index.iy <= self.ny
    }

    pub fn get(&self, index: GridIndex) -> Option<Point> {
        if !self.contains(index) {
            return None;
        }
        let slot = index.ix as usize * (self.ny as usize + 1) + index.iy as usize;
        self.points.get(slot).copied()
    }

    /// Points in key order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn indices(&self) -> impl Iterator<Item = GridIndex> + '_ {
        let ny = self.ny;
        (0..=self.nx).flat_map(move |ix| (0..=ny).map(move |iy| GridIndex::new(ix, iy)))
    }

    /// `(key, point)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (GridIndex, Point)> + '_ {
        self.indices().zip(self.points.iter().copied())
    }

    /// Builds a new grid over the same key set, visiting keys in order.
    pub fn map_points(&self, mut f: impl FnMut(GridIndex, Point) -> Point) -> Grid {
        let points = self.iter().map(|(index, p)| f(index, p)).collect();
        Grid {
            nx: self.nx,
            ny: self.ny,
            points,
        }
    }
}

/// Evenly spaced lattice: the point at `(ix, iy)` is `(ix * c, iy * c)`.
pub fn build_grid(nx: u32, ny: u32, pixels_per_cell: u32) -> Grid {
    debug_assert!(
        nx as i64 * pixels_per_cell as i64 <= i32::MAX as i64
            && ny as i64 * pixels_per_cell as i64 <= i32::MAX as i64,
        "grid extent must fit in i32"
    );
    let c = pixels_per_cell as i32;
    Grid::from_fn(nx, ny, |index| {
        Point::new(index.ix as i32 * c, index.iy as i32 * c)
    })
}
