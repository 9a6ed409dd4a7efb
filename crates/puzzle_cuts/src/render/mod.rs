//! SVG serialization of a generated puzzle.
//!
//! Output always has `viewBox="0 0 W H"`. Layers, back to front: checkerboard
//! background (draft), border rectangle, tongue curves, grid markers (draft),
//! interior grid lines (draft).
use std::fmt::Write;

use tracing::debug;

use crate::error::Result;
use crate::pipeline::Puzzle;

pub mod path;
pub mod style;

pub use path::curve_path_data;
pub use style::{RenderOptions, RenderStyle};

use path::escape_attr;

const TILE_PATTERN_ID: &str = "draft-tiles";

/// Renders `puzzle` into a standalone SVG document.
pub fn render_svg(puzzle: &Puzzle, options: &RenderOptions) -> Result<String> {
    let style = &options.style;
    let (w, h) = (puzzle.width, puzzle.height);
    let mut s = String::with_capacity(256 + puzzle.curves.len() * 96);

    writeln!(
        s,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">"
    )?;

    if options.draft_mode && style.tile_size > 0 {
        write_checkerboard(&mut s, w, h, style)?;
    }

    writeln!(
        s,
        "<rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
        escape_attr(&style.border_stroke),
        style.border_stroke_width
    )?;

    writeln!(
        s,
        "<g class=\"tongues\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\">",
        escape_attr(&style.cut_stroke),
        style.cut_stroke_width
    )?;
    for curve in &puzzle.curves {
        writeln!(s, "<path d=\"{}\"/>", curve_path_data(curve))?;
    }
    s.push_str("</g>\n");

    if options.draft_mode {
        writeln!(
            s,
            "<g class=\"grid-markers\" fill=\"{}\">",
            escape_attr(&style.marker_fill)
        )?;
        for p in puzzle.grid.points() {
            writeln!(
                s,
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"/>",
                p.x, p.y, style.marker_radius
            )?;
        }
        s.push_str("</g>\n");

        writeln!(
            s,
            "<g class=\"grid-edges\" stroke=\"{}\" stroke-width=\"{}\">",
            escape_attr(&style.grid_stroke),
            style.grid_stroke_width
        )?;
        for e in &puzzle.interior_edges {
            writeln!(
                s,
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"/>",
                e.start.x, e.start.y, e.end.x, e.end.y
            )?;
        }
        s.push_str("</g>\n");
    }

    s.push_str("</svg>\n");
    debug!(
        "Rendered {} bytes ({} tongues, draft: {}).",
        s.len(),
        puzzle.curves.len(),
        options.draft_mode
    );
    Ok(s)
}

/// Alternating `tile_size` squares, starting with the dark fill at the origin.
fn write_checkerboard(s: &mut String, w: i32, h: i32, style: &RenderStyle) -> Result<()> {
    let t = style.tile_size;
    let period = 2 * t as u64;
    writeln!(
        s,
        "<defs><pattern id=\"{TILE_PATTERN_ID}\" width=\"{period}\" height=\"{period}\" patternUnits=\"userSpaceOnUse\">"
    )?;
    writeln!(
        s,
        "<rect width=\"{period}\" height=\"{period}\" fill=\"{}\"/>",
        escape_attr(&style.tile_light)
    )?;
    let dark = escape_attr(&style.tile_dark);
    writeln!(s, "<rect width=\"{t}\" height=\"{t}\" fill=\"{dark}\"/>")?;
    writeln!(
        s,
        "<rect x=\"{t}\" y=\"{t}\" width=\"{t}\" height=\"{t}\" fill=\"{dark}\"/>"
    )?;
    s.push_str("</pattern></defs>\n");
    writeln!(
        s,
        "<rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\" fill=\"url(#{TILE_PATTERN_ID})\"/>"
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PuzzleConfig;
    use crate::pipeline::generate;

    fn puzzle(draft: bool) -> Puzzle {
        let config = PuzzleConfig::new(3, 2)
            .with_pixels_per_cell(50)
            .with_seed(11)
            .with_draft_mode(draft);
        generate(&config).unwrap()
    }

    #[test]
    fn view_box_matches_canvas() {
        let svg = render_svg(&puzzle(false), &RenderOptions::new(false)).unwrap();
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.contains("viewBox=\"0 0 150 100\""));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn final_mode_draws_only_border_and_tongues() {
        let p = puzzle(false);
        let svg = render_svg(&p, &RenderOptions::new(false)).unwrap();
        assert_eq!(svg.matches("<path ").count(), p.curves.len());
        assert_eq!(svg.matches("<rect ").count(), 1);
        assert!(!svg.contains("<circle"));
        assert!(!svg.contains("<line"));
        assert!(!svg.contains("<pattern"));
    }

    #[test]
    fn draft_mode_adds_overlays() {
        let p = puzzle(true);
        let svg = render_svg(&p, &RenderOptions::from_config(&p.config)).unwrap();
        assert!(svg.contains(&format!("fill=\"url(#{TILE_PATTERN_ID})\"")));
        assert!(svg.contains("<rect width=\"10\" height=\"10\""));
        assert_eq!(svg.matches("<circle ").count(), p.grid.len());
        assert_eq!(svg.matches("<line ").count(), p.interior_edges.len());
        assert_eq!(svg.matches("<path ").count(), p.curves.len());

        // Background sits under the border, overlays above the tongues.
        let background = svg.find("url(#").unwrap();
        let tongues = svg.find("class=\"tongues\"").unwrap();
        let markers = svg.find("class=\"grid-markers\"").unwrap();
        let lines = svg.find("class=\"grid-edges\"").unwrap();
        assert!(background < tongues && tongues < markers && markers < lines);
    }

    #[test]
    fn zero_tile_size_skips_background() {
        let p = puzzle(true);
        let options = RenderOptions::new(true)
            .with_style(RenderStyle::default().with_tiles(0, "#fff", "#000"));
        let svg = render_svg(&p, &options).unwrap();
        assert!(!svg.contains("<pattern"));
        assert!(svg.contains("<circle"));
    }

    #[test]
    fn style_colors_are_escaped() {
        let p = puzzle(false);
        let options = RenderOptions::new(false)
            .with_style(RenderStyle::default().with_cut_stroke("r\"ed", 2.5));
        let svg = render_svg(&p, &options).unwrap();
        assert!(svg.contains("stroke=\"r&quot;ed\" stroke-width=\"2.5\""));
    }
}
