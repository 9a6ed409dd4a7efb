//! Tongue curves: the interlocking tab drawn across each interior edge.
//!
//! For an edge `start → end` with vector `v` and cell size `c`:
//!
//! 1. `p` is a rounded perpendicular of `v`: `(1, round(-v.x / v.y))` when the endpoints
//!    differ in `y`, `(round(-v.y / v.x), 1)` otherwise.
//! 2. `p` is normalized and multiplied by `+1` when the edge's coin came up `true`,
//!    `-1` otherwise.
//! 3. `middle = round((start + end) / 2) + round(round(0.18 c) * p)`.
//! 4. `start_control = start + round(0.8 v)`, `end_control = end - round(0.8 v)`,
//!    `middle_control = middle - round(0.4 v)`.
//!
//! Every product is rounded half away from zero before it is added.
use rand::RngCore;
use tracing::debug;

use crate::error::{Error, Result};
use crate::geometry::{round_vec, Curve, Edge, Point};
use crate::random::flip_coin;

const MIDDLE_SCALE: f64 = 0.18;
const END_CONTROL_FRACTION: f64 = 0.8;
const MIDDLE_CONTROL_FRACTION: f64 = 0.4;

/// Rounded perpendicular of the edge vector, before normalization.
///
/// Fails with [`Error::DegenerateEdge`] when both endpoints coincide, which is the only
/// case where the divisor would be zero.
pub fn perpendicular(edge: &Edge) -> Result<Point> {
    if edge.is_degenerate() {
        return Err(Error::DegenerateEdge {
            start: edge.start,
            end: edge.end,
        });
    }
    let v = edge.vector().as_dvec2();
    if edge.start.y != edge.end.y {
        Ok(Point::new(1, (-v.x / v.y).round() as i32))
    } else {
        Ok(Point::new((-v.y / v.x).round() as i32, 1))
    }
}

/// Builds the tongue for one edge. `flip = true` keeps the perpendicular's sign.
pub fn tongue_for_edge(edge: &Edge, cell_size: u32, flip: bool) -> Result<Curve> {
    let p = perpendicular(edge)?;
    let flip_mult = if flip { 1.0 } else { -1.0 };
    let unit = p.as_dvec2().normalize() * flip_mult;
    let middle_scale = (MIDDLE_SCALE * cell_size as f64).round();

    let v = edge.vector().as_dvec2();
    let midpoint = round_vec(0.5 * (edge.start.as_dvec2() + edge.end.as_dvec2()));
    let middle = midpoint + round_vec(middle_scale * unit);

    Ok(Curve {
        start: edge.start,
        start_control: edge.start + round_vec(END_CONTROL_FRACTION * v),
        middle,
        middle_control: middle - round_vec(MIDDLE_CONTROL_FRACTION * v),
        end_control: edge.end - round_vec(END_CONTROL_FRACTION * v),
        end: edge.end,
    })
}

/// One tongue per edge, in edge order, drawing one coin per edge from `rng`.
///
/// `edges` should already exclude border edges.
pub fn synthesize_tongues(
    edges: &[Edge],
    cell_size: u32,
    rng: &mut dyn RngCore,
) -> Result<Vec<Curve>> {
    let mut curves = Vec::with_capacity(edges.len());
    let mut kept = 0usize;
    for edge in edges {
        let flip = flip_coin(rng);
        kept += usize::from(flip);
        curves.push(tongue_for_edge(edge, cell_size, flip)?);
    }
    debug!(
        "Synthesized {} tongues ({} keep the perpendicular sign).",
        curves.len(),
        kept
    );
    Ok(curves)
}
