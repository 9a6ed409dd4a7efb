use puzzle_cuts::prelude::*;
use puzzle_cuts_examples::{init_tracing, write_svg};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Same seed for both so only the radius differs:
    // - regular lattice (perturb = 0)
    // - jittered lattice (perturb = 12)
    let base = PuzzleConfig::new(6, 4)
        .with_pixels_per_cell(100)
        .with_seed(7)
        .with_draft_mode(true);

    for (radius, out_path) in [
        (0, "draft-regular.svg"),
        (12, "draft-perturbed.svg"),
    ] {
        let config = base.clone().with_grid_perturb(radius);
        let svg = render_document(&config)?;
        write_svg(out_path, &svg)?;
    }

    Ok(())
}
