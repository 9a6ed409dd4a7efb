//! Seeded generation pipeline.
//!
//! Stages run once, in order: build grid, perturb, derive edges, drop border edges,
//! synthesize tongues. One random stream is threaded through explicitly; perturbation
//! takes `2 * (nx + 1) * (ny + 1)` 64-bit draws, then tongue synthesis takes one
//! 32-bit draw per interior edge.
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::info;

use crate::config::PuzzleConfig;
use crate::edges::{derive_edges, interior_edges};
use crate::error::Result;
use crate::events::{EventSink, PuzzleEvent};
use crate::geometry::{Curve, Edge};
use crate::grid::{build_grid, Grid};
use crate::perturb::perturb_grid_with_stats;
use crate::render::{render_svg, RenderOptions};
use crate::tongue::synthesize_tongues;

/// Everything produced by one generation run. Read-only once built.
#[derive(Debug, Clone)]
pub struct Puzzle {
    /// Configuration the puzzle was generated from.
    pub config: PuzzleConfig,
    /// Canvas width.
    pub width: i32,
    /// Canvas height.
    pub height: i32,
    /// Perturbed and snapped grid.
    pub grid: Grid,
    /// All lattice edges, in derivation order.
    pub edges: Vec<Edge>,
    /// Edges not on the border, in derivation order.
    pub interior_edges: Vec<Edge>,
    /// One tongue per interior edge, same order.
    pub curves: Vec<Curve>,
}

impl Puzzle {
    pub fn summary(&self) -> PuzzleSummary {
        PuzzleSummary {
            points: self.grid.len(),
            edges: self.edges.len(),
            interior_edges: self.interior_edges.len(),
            curves: self.curves.len(),
        }
    }
}

/// Entity counts of a generated puzzle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PuzzleSummary {
    pub points: usize,
    pub edges: usize,
    pub interior_edges: usize,
    pub curves: usize,
}

/// Generates a puzzle, seeding the stream from `config.seed`.
pub fn generate(config: &PuzzleConfig) -> Result<Puzzle> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    generate_with_rng(config, &mut rng)
}

/// Generates a puzzle from a caller-provided stream. `config.seed` is ignored.
pub fn generate_with_rng<R: RngCore>(config: &PuzzleConfig, rng: &mut R) -> Result<Puzzle> {
    generate_with_events(config, rng, &mut ())
}

pub fn generate_with_events<R: RngCore>(
    config: &PuzzleConfig,
    rng: &mut R,
    sink: &mut dyn EventSink,
) -> Result<Puzzle> {
    config.validate()?;
    let (width, height) = (config.width(), config.height());
    info!(
        "Generating {}x{} puzzle on a {}x{} canvas (perturb {}).",
        config.pieces_x, config.pieces_y, width, height, config.grid_perturb
    );
    sink.send(PuzzleEvent::GenerationStarted {
        config: config.clone(),
        canvas: (width, height),
    });
    for message in config.warnings() {
        sink.send(PuzzleEvent::Warning {
            context: "config".into(),
            message,
        });
    }

    let regular = build_grid(config.pieces_x, config.pieces_y, config.pixels_per_cell);
    sink.send(PuzzleEvent::GridBuilt {
        points: regular.len(),
    });

    let (grid, stats) = perturb_grid_with_stats(&regular, config.grid_perturb, width, height, rng);
    sink.send(PuzzleEvent::GridPerturbed {
        radius: config.grid_perturb,
        stats,
    });

    let edges = derive_edges(&grid);
    let interior = interior_edges(&edges, width, height);
    sink.send(PuzzleEvent::EdgesDerived {
        total: edges.len(),
        interior: interior.len(),
    });

    let curves = synthesize_tongues(&interior, config.pixels_per_cell, rng)?;
    sink.send(PuzzleEvent::TonguesSynthesized {
        curves: curves.len(),
    });

    let puzzle = Puzzle {
        config: config.clone(),
        width,
        height,
        grid,
        edges,
        interior_edges: interior,
        curves,
    };
    let summary = puzzle.summary();
    info!(
        "Generated {} points, {} edges, {} tongues.",
        summary.points, summary.edges, summary.curves
    );
    sink.send(PuzzleEvent::GenerationFinished { summary });

    Ok(puzzle)
}

/// Generates and renders one SVG document from `config`.
pub fn render_document(config: &PuzzleConfig) -> Result<String> {
    let puzzle = generate(config)?;
    render_svg(&puzzle, &RenderOptions::from_config(config))
}
