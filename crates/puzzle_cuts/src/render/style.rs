//! Colors and sizes used by the SVG renderer.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::PuzzleConfig;

/// Visual style for rendered documents. Colors are any SVG paint string.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderStyle {
    /// Stroke of the tongue curves.
    pub cut_stroke: String,
    pub cut_stroke_width: f32,
    /// Stroke of the outer border rectangle.
    pub border_stroke: String,
    pub border_stroke_width: f32,
    /// Draft only: fill and radius of the grid point markers.
    pub marker_fill: String,
    pub marker_radius: f32,
    /// Draft only: stroke of the interior grid lines.
    pub grid_stroke: String,
    pub grid_stroke_width: f32,
    /// Draft only: checkerboard tile edge length; `0` disables the background.
    pub tile_size: u32,
    pub tile_light: String,
    pub tile_dark: String,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            cut_stroke: "#000000".into(),
            cut_stroke_width: 1.0,
            border_stroke: "#000000".into(),
            border_stroke_width: 1.0,
            marker_fill: "#d33682".into(),
            marker_radius: 2.0,
            grid_stroke: "#268bd2".into(),
            grid_stroke_width: 0.5,
            tile_size: 10,
            tile_light: "#ffffff".into(),
            tile_dark: "#eeeeee".into(),
        }
    }
}

impl RenderStyle {
    /// Sets the tongue stroke color and width.
    pub fn with_cut_stroke(mut self, color: impl Into<String>, width: f32) -> Self {
        self.cut_stroke = color.into();
        self.cut_stroke_width = width;
        self
    }

    /// Sets the border stroke color and width.
    pub fn with_border_stroke(mut self, color: impl Into<String>, width: f32) -> Self {
        self.border_stroke = color.into();
        self.border_stroke_width = width;
        self
    }

    /// Sets the checkerboard tile size and its two fills.
    pub fn with_tiles(
        mut self,
        size: u32,
        light: impl Into<String>,
        dark: impl Into<String>,
    ) -> Self {
        self.tile_size = size;
        self.tile_light = light.into();
        self.tile_dark = dark.into();
        self
    }
}

/// What to draw and how.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderOptions {
    /// Adds the checkerboard, grid markers and grid lines.
    pub draft_mode: bool,
    pub style: RenderStyle,
}

impl RenderOptions {
    pub fn new(draft_mode: bool) -> Self {
        Self {
            draft_mode,
            style: RenderStyle::default(),
        }
    }

    /// Takes `draft_mode` from the config with the default style.
    pub fn from_config(config: &PuzzleConfig) -> Self {
        Self::new(config.draft_mode)
    }

    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }
}
