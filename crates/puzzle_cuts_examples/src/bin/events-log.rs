use puzzle_cuts::prelude::*;
use puzzle_cuts_examples::{init_tracing, write_svg};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = PuzzleConfig::new(10, 0)
        .with_pixels_per_cell(40)
        .with_grid_perturb(4)
        .with_seed(2026);
    let mut rng = StdRng::seed_from_u64(config.seed);

    let mut sink = FnSink::new(|event| match event {
        PuzzleEvent::GenerationStarted { canvas, .. } => {
            info!("Run started on a {}x{} canvas", canvas.0, canvas.1);
        }
        PuzzleEvent::GridBuilt { points } => info!("Grid: {points} points"),
        PuzzleEvent::GridPerturbed { radius, stats } => {
            debug!(
                "Perturbed with radius {radius}: {} draws, {} moved, {} snapped",
                stats.draws, stats.moved, stats.snapped
            );
        }
        PuzzleEvent::EdgesDerived { total, interior } => {
            info!("Edges: {total} total, {interior} interior");
        }
        PuzzleEvent::TonguesSynthesized { curves } => info!("Tongues: {curves}"),
        PuzzleEvent::GenerationFinished { summary } => info!("Finished: {summary:?}"),
        PuzzleEvent::Warning { context, message } => warn!("Warning '{context}': {message}"),
        _ => {}
    });

    let puzzle = generate_with_events(&config, &mut rng, &mut sink)?;
    let svg = render_svg(&puzzle, &RenderOptions::new(true))?;
    write_svg("events-log.svg", &svg)?;
    Ok(())
}
