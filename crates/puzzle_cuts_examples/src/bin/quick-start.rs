use puzzle_cuts::prelude::*;
use puzzle_cuts_examples::{init_tracing, write_svg};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = PuzzleConfig::new(8, 6)
        .with_pixels_per_cell(80)
        .with_grid_perturb(8)
        .with_seed(42);

    let svg = render_document(&config)?;
    write_svg("quick-start.svg", &svg)?;
    Ok(())
}
