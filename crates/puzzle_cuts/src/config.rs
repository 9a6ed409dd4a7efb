//! Static generation parameters.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};

/// Everything a generation run depends on. Two runs with equal configs produce
/// byte-identical documents.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PuzzleConfig {
    /// Overlay grid markers, grid lines and a checkerboard background.
    pub draft_mode: bool,
    /// Number of cells along X.
    pub pieces_x: u32,
    /// Number of cells along Y.
    pub pieces_y: u32,
    /// Cell edge length in canvas units.
    pub pixels_per_cell: u32,
    /// Seed for the shared random stream.
    pub seed: u64,
    /// Perturbation radius, also used as the border snap radius.
    pub grid_perturb: u32,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            draft_mode: false,
            pieces_x: 6,
            pieces_y: 4,
            pixels_per_cell: 100,
            seed: 42,
            grid_perturb: 8,
        }
    }
}

impl PuzzleConfig {
    /// Creates a config with the given piece counts and defaults elsewhere.
    pub fn new(pieces_x: u32, pieces_y: u32) -> Self {
        Self {
            pieces_x,
            pieces_y,
            ..Default::default()
        }
    }

    /// Sets the piece counts along X and Y.
    pub fn with_pieces(mut self, pieces_x: u32, pieces_y: u32) -> Self {
        self.pieces_x = pieces_x;
        self.pieces_y = pieces_y;
        self
    }

    /// Sets the cell edge length.
    pub fn with_pixels_per_cell(mut self, pixels_per_cell: u32) -> Self {
        self.pixels_per_cell = pixels_per_cell;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the perturbation and snap radius.
    pub fn with_grid_perturb(mut self, grid_perturb: u32) -> Self {
        self.grid_perturb = grid_perturb;
        self
    }

    /// Enables or disables draft overlays.
    pub fn with_draft_mode(mut self, draft_mode: bool) -> Self {
        self.draft_mode = draft_mode;
        self
    }

    /// Canvas width, `pieces_x * pixels_per_cell`.
    pub fn width(&self) -> i32 {
        (self.pieces_x as i64 * self.pixels_per_cell as i64) as i32
    }

    /// Canvas height, `pieces_y * pixels_per_cell`.
    pub fn height(&self) -> i32 {
        (self.pieces_y as i64 * self.pixels_per_cell as i64) as i32
    }

    /// Validates the configuration, returning an error if invalid.
    ///
    /// Zero piece counts are accepted and produce a single row or column of points.
    /// `grid_perturb` must stay below half of `pixels_per_cell`.
    pub fn validate(&self) -> Result<()> {
        if self.pixels_per_cell == 0 {
            return Err(Error::InvalidConfig("pixels_per_cell must be > 0".into()));
        }
        // Neighbors start one cell apart and each moves at most `grid_perturb` per axis
        // (snapping only moves a point onto a border no neighbor can reach), so
        // `2 * grid_perturb < pixels_per_cell` keeps every edge non-degenerate.
        if 2 * self.grid_perturb as u64 >= self.pixels_per_cell as u64 {
            return Err(Error::InvalidConfig(format!(
                "grid_perturb ({}) must be less than half of pixels_per_cell ({})",
                self.grid_perturb, self.pixels_per_cell
            )));
        }
        let limit = i32::MAX as i64;
        let reach = self.grid_perturb as i64;
        for (name, pieces) in [("pieces_x", self.pieces_x), ("pieces_y", self.pieces_y)] {
            let extent = pieces as i64 * self.pixels_per_cell as i64;
            if extent + reach > limit {
                return Err(Error::InvalidConfig(format!(
                    "{name} * pixels_per_cell + grid_perturb must fit in i32 (got {})",
                    extent + reach
                )));
            }
        }

        for message in self.warnings() {
            warn!("{}", message);
        }

        Ok(())
    }

    /// Non-fatal observations about this configuration.
    pub fn warnings(&self) -> Vec<String> {
        let mut out = Vec::new();
        if self.pieces_x == 0 || self.pieces_y == 0 {
            out.push(format!(
                "Degenerate puzzle {}x{}: no interior edges along the empty axis.",
                self.pieces_x, self.pieces_y
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let config = PuzzleConfig::new(3, 2)
            .with_pixels_per_cell(40)
            .with_seed(5)
            .with_grid_perturb(3)
            .with_draft_mode(true);
        assert_eq!((config.pieces_x, config.pieces_y), (3, 2));
        assert_eq!(config.pixels_per_cell, 40);
        assert_eq!(config.seed, 5);
        assert_eq!(config.grid_perturb, 3);
        assert!(config.draft_mode);
        assert_eq!((config.width(), config.height()), (120, 80));
    }

    #[test]
    fn default_is_valid() {
        assert!(PuzzleConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_cell_size_is_rejected() {
        let err = PuzzleConfig::default()
            .with_pixels_per_cell(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn oversized_canvas_is_rejected() {
        let config = PuzzleConfig::new(u32::MAX, 1).with_pixels_per_cell(2);
        assert!(config.validate().is_err());

        let edge = PuzzleConfig::new(1, 1)
            .with_pixels_per_cell(i32::MAX as u32 - 1)
            .with_grid_perturb(2);
        assert!(edge.validate().is_err());
    }

    #[test]
    fn warnings_flag_degenerate_grids() {
        assert!(PuzzleConfig::default().warnings().is_empty());
        assert_eq!(PuzzleConfig::new(0, 2).warnings().len(), 1);
    }

    #[test]
    fn radius_of_half_a_cell_or_more_is_rejected() {
        for (cell, radius) in [(10, 5), (10, 6), (10, 10), (1, 1)] {
            let err = PuzzleConfig::new(6, 4)
                .with_pixels_per_cell(cell)
                .with_grid_perturb(radius)
                .validate()
                .unwrap_err();
            assert!(matches!(err, Error::InvalidConfig(_)));
        }
        assert!(PuzzleConfig::new(6, 4)
            .with_pixels_per_cell(10)
            .with_grid_perturb(4)
            .validate()
            .is_ok());
        assert!(PuzzleConfig::new(6, 4)
            .with_pixels_per_cell(1)
            .with_grid_perturb(0)
            .validate()
            .is_ok());
    }

    #[test]
    fn zero_pieces_are_allowed() {
        assert!(PuzzleConfig::new(0, 3).validate().is_ok());
        assert!(PuzzleConfig::new(0, 0).validate().is_ok());
    }
}
