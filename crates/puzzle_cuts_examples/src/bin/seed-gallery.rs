use puzzle_cuts::prelude::*;
use puzzle_cuts_examples::{init_tracing, write_svg};

const SEEDS: [u64; 4] = [1, 2, 3, 4];

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Thicker red cuts on a plain background.
    let options = RenderOptions::new(false).with_style(
        RenderStyle::default()
            .with_cut_stroke("#c0392b", 2.0)
            .with_border_stroke("#2c3e50", 3.0),
    );

    for seed in SEEDS {
        let config = PuzzleConfig::new(5, 5)
            .with_pixels_per_cell(60)
            .with_grid_perturb(6)
            .with_seed(seed);
        let puzzle = generate(&config)?;
        let svg = render_svg(&puzzle, &options)?;
        write_svg(format!("seed-gallery/seed-{seed}.svg"), &svg)?;
    }

    Ok(())
}
