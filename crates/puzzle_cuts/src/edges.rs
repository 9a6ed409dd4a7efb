//! Lattice adjacency edges derived from a grid.
//!
//! The order of [`derive_edges`] feeds the flip-coin draws of the tongue stage, so it is
//! part of the reproducibility contract: all horizontal edges first, sorted by `iy` and
//! then `ix`; after them all vertical edges, sorted by `ix` and then `iy`.
use tracing::debug;

use crate::geometry::{Edge, EdgeOrientation};
use crate::grid::{Grid, GridIndex};

/// Number of edges in an `nx` x `ny` lattice.
pub fn expected_edge_count(nx: u32, ny: u32) -> usize {
    let (nx, ny) = (nx as usize, ny as usize);
    nx * (ny + 1) + ny * (nx + 1)
}

/// Connects every key to its right and lower neighbor when that neighbor exists.
pub fn derive_edges(grid: &Grid) -> Vec<Edge> {
    let mut horizontal = Vec::new();
    let mut vertical = Vec::new();

    for (from, start) in grid.iter() {
        let right = GridIndex::new(from.ix + 1, from.iy);
        if let Some(end) = grid.get(right) {
            horizontal.push(Edge::new(start, end, from, right));
        }
        let below = GridIndex::new(from.ix, from.iy + 1);
        if let Some(end) = grid.get(below) {
            vertical.push(Edge::new(start, end, from, below));
        }
    }

    // Key iteration already orders ties by the other index; the sorts are stable.
    horizontal.sort_by_key(|e| e.from.iy);
    vertical.sort_by_key(|e| e.from.ix);

    let mut edges = horizontal;
    edges.append(&mut vertical);
    debug_assert_eq!(edges.len(), expected_edge_count(grid.nx(), grid.ny()));
    edges
}

/// Drops edges lying on the canvas border, keeping order.
pub fn interior_edges(edges: &[Edge], width: i32, height: i32) -> Vec<Edge> {
    let interior: Vec<Edge> = edges
        .iter()
        .filter(|e| !e.lies_on_border(width, height))
        .copied()
        .collect();
    debug!(
        "{} of {} edges are interior ({} horizontal).",
        interior.len(),
        edges.len(),
        interior
            .iter()
            .filter(|e| e.orientation() == EdgeOrientation::Horizontal)
            .count()
    );
    interior
}
