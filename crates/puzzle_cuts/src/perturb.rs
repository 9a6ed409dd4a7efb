//! Random jitter for grid points with border snapping.
//!
//! Every point receives an offset drawn uniformly from `[-r, r]` on each axis, x first,
//! in grid-key order. Each perturbed coordinate within `r` of `0` or of the canvas
//! extent is then snapped onto that border (inclusive at exactly `r`). Since the snap
//! radius equals the largest possible offset, border points never leave the border.
use rand::RngCore;
use tracing::debug;

use crate::geometry::Point;
use crate::grid::Grid;
use crate::random::random_offset;

/// Counters collected while perturbing a grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PerturbStats {
    /// Raw draws taken from the random stream (two per point).
    pub draws: usize,
    /// Points whose final position differs from the input.
    pub moved: usize,
    /// Coordinates changed by the border snap.
    pub snapped: usize,
}

/// Snaps `value` onto `0` or `extent` when it lies within `radius` of either.
///
/// The `0` border wins when both are within reach.
pub fn snap_coordinate(value: i64, radius: u32, extent: i32) -> i32 {
    let r = radius as i64;
    if value.abs() <= r {
        0
    } else if (value - extent as i64).abs() <= r {
        extent
    } else {
        debug_assert!(
            value >= i32::MIN as i64 && value <= i32::MAX as i64,
            "perturbed coordinate must fit in i32"
        );
        value as i32
    }
}

/// Jitters and snaps every point of `grid`. See the module docs for the draw order.
pub fn perturb_grid(
    grid: &Grid,
    radius: u32,
    width: i32,
    height: i32,
    rng: &mut dyn RngCore,
) -> Grid {
    perturb_grid_with_stats(grid, radius, width, height, rng).0
}

/// Like [`perturb_grid`], also reporting [`PerturbStats`].
pub fn perturb_grid_with_stats(
    grid: &Grid,
    radius: u32,
    width: i32,
    height: i32,
    rng: &mut dyn RngCore,
) -> (Grid, PerturbStats) {
    let mut stats = PerturbStats::default();

    let perturbed = grid.map_points(|_, p| {
        let dx = random_offset(rng, radius);
        let dy = random_offset(rng, radius);
        stats.draws += 2;

        let raw_x = p.x as i64 + dx;
        let raw_y = p.y as i64 + dy;
        let x = snap_coordinate(raw_x, radius, width);
        let y = snap_coordinate(raw_y, radius, height);
        stats.snapped += usize::from(x as i64 != raw_x) + usize::from(y as i64 != raw_y);

        let q = Point::new(x, y);
        if q != p {
            stats.moved += 1;
        }
        q
    });

    debug!(
        "Perturbed {} points (radius {}): {} moved, {} coordinates snapped.",
        perturbed.len(),
        radius,
        stats.moved,
        stats.snapped
    );

    (perturbed, stats)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::grid::build_grid;
    use crate::random::testing::CountingRng;

    #[test]
    fn snap_is_inclusive_at_radius() {
        assert_eq!(snap_coordinate(5, 5, 100), 0);
        assert_eq!(snap_coordinate(-5, 5, 100), 0);
        assert_eq!(snap_coordinate(6, 5, 100), 6);
        assert_eq!(snap_coordinate(95, 5, 100), 100);
        assert_eq!(snap_coordinate(105, 5, 100), 100);
        assert_eq!(snap_coordinate(94, 5, 100), 94);
    }

    #[test]
    fn snap_prefers_zero_border_when_both_in_reach() {
        assert_eq!(snap_coordinate(3, 5, 6), 0);
        assert_eq!(snap_coordinate(4, 2, 0), 4);
    }

    #[test]
    fn zero_radius_is_identity() {
        let grid = build_grid(4, 3, 20);
        let mut rng = StdRng::seed_from_u64(9);
        let (out, stats) = perturb_grid_with_stats(&grid, 0, 80, 60, &mut rng);
        assert_eq!(out, grid);
        assert_eq!(stats.moved, 0);
        assert_eq!(stats.snapped, 0);
        assert_eq!(stats.draws, 2 * grid.len());
    }

    #[test]
    fn offsets_are_bounded_and_border_points_stay_pinned() {
        let (nx, ny, c, r) = (6, 5, 40, 7);
        let (w, h) = (nx as i32 * c, ny as i32 * c);
        let grid = build_grid(nx, ny, c as u32);
        let mut rng = StdRng::seed_from_u64(1234);
        let out = perturb_grid(&grid, r, w, h, &mut rng);

        for (index, original) in grid.iter() {
            let p = out.get(index).expect("same key set");
            assert!((p.x - original.x).abs() <= r as i32);
            assert!((p.y - original.y).abs() <= r as i32);
            assert!((0..=w).contains(&p.x) && (0..=h).contains(&p.y));

            // Nothing left in the snap band.
            assert!(!(1..=r as i32).contains(&p.x));
            assert!(!(w - r as i32..w).contains(&p.x));
            assert!(!(1..=r as i32).contains(&p.y));
            assert!(!(h - r as i32..h).contains(&p.y));

            if original.x == 0 || original.x == w {
                assert_eq!(p.x, original.x);
            }
            if original.y == 0 || original.y == h {
                assert_eq!(p.y, original.y);
            }
        }
    }

    #[test]
    fn consumes_two_words_per_point() {
        let grid = build_grid(3, 2, 30);
        let mut rng = CountingRng::new(StdRng::seed_from_u64(2));
        perturb_grid(&grid, 4, 90, 60, &mut rng);
        assert_eq!(rng.u64_draws, 2 * 12);
        assert_eq!(rng.u32_draws, 0);
    }

    #[test]
    fn same_seed_same_grid() {
        let grid = build_grid(5, 5, 50);
        let a = perturb_grid(&grid, 6, 250, 250, &mut StdRng::seed_from_u64(77));
        let b = perturb_grid(&grid, 6, 250, 250, &mut StdRng::seed_from_u64(77));
        let c = perturb_grid(&grid, 6, 250, 250, &mut StdRng::seed_from_u64(78));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
