#![forbid(unsafe_code)]
//! puzzle_cuts: Seeded jigsaw-puzzle cut patterns rendered as SVG.
//!
//! Modules:
//! - geometry: integer points, lattice edges, and six-point tongue curves
//! - grid / perturb / edges / tongue: the generation stages, in pipeline order
//! - pipeline: the seeded entry point that threads one random stream through all stages
//! - events: observe a generation run stage by stage
//! - render: serialize a generated puzzle to an SVG document
//!
//! Quick start:
//! ```no_run
//! use puzzle_cuts::prelude::*;
//!
//! let config = PuzzleConfig::default().with_pieces(4, 3).with_seed(7);
//! let svg = render_document(&config).expect("valid config");
//! assert!(svg.starts_with("<svg"));
//! ```
pub mod config;
pub mod edges;
pub mod error;
pub mod events;
pub mod geometry;
pub mod grid;
pub mod perturb;
pub mod pipeline;
pub mod random;
pub mod render;
pub mod tongue;

/// Convenient re-exports for common types. Import with `use puzzle_cuts::prelude::*;`.
pub mod prelude {
    pub use crate::config::PuzzleConfig;
    pub use crate::edges::{derive_edges, interior_edges};
    pub use crate::error::{Error, Result};
    pub use crate::events::{EventSink, FnSink, PuzzleEvent, VecSink};
    pub use crate::geometry::{Curve, Edge, EdgeOrientation, Point};
    pub use crate::grid::{build_grid, Grid, GridIndex};
    pub use crate::perturb::{perturb_grid, perturb_grid_with_stats, PerturbStats};
    pub use crate::pipeline::{
        generate, generate_with_events, generate_with_rng, render_document, Puzzle,
        PuzzleSummary,
    };
    pub use crate::render::{render_svg, RenderOptions, RenderStyle};
    pub use crate::tongue::{synthesize_tongues, tongue_for_edge};
}
