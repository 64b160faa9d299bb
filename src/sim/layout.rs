//! Brick grid generation
//!
//! Bricks are laid out row-major in a uniform grid. The brick width is
//! derived from the viewport so that every column plus the padding between
//! and around them fits across the screen:
//!
//! ```text
//! W = width / columns - padding - padding / columns
//! ```
//!
//! Positions are brick centres (the host engine anchors entities at their
//! centre).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Named colours understood by the host renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Color {
    Violet,
    Orange,
    Yellow,
    Chartreuse,
    Red,
    #[default]
    White,
}

/// Grid parameters for brick generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    pub rows: u32,
    pub columns: u32,
    /// Gap between bricks and around the grid (px)
    pub padding: f32,
    pub brick_height: f32,
    pub x_offset: f32,
    pub y_offset: f32,
    /// Row colours, cycled when there are more rows than entries
    pub palette: Vec<Color>,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            rows: BRICK_ROWS,
            columns: BRICK_COLUMNS,
            padding: BRICK_PADDING,
            brick_height: BRICK_HEIGHT,
            x_offset: BRICK_X_OFFSET,
            y_offset: BRICK_Y_OFFSET,
            palette: vec![Color::Violet, Color::Orange, Color::Yellow],
        }
    }
}

impl LayoutParams {
    /// Width of a single brick for the given viewport width
    pub fn brick_width(&self, viewport_width: f32) -> f32 {
        if self.columns == 0 {
            return 0.0;
        }
        let columns = self.columns as f32;
        viewport_width / columns - self.padding - self.padding / columns
    }
}

/// Where a brick goes and how it looks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrickPlacement {
    pub row: u32,
    pub column: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Color,
}

/// Compute every brick placement for a viewport of the given width.
///
/// Pure; the caller creates entities from the returned records.
pub fn generate_layout(viewport_width: f32, params: &LayoutParams) -> Vec<BrickPlacement> {
    let width = params.brick_width(viewport_width);
    let height = params.brick_height;
    let pad = params.padding;

    let mut placements =
        Vec::with_capacity((params.rows as usize).saturating_mul(params.columns as usize));
    for row in 0..params.rows {
        let color = if params.palette.is_empty() {
            Color::default()
        } else {
            params.palette[row as usize % params.palette.len()]
        };
        let y = params.y_offset + row as f32 * (height + pad) + pad;

        for column in 0..params.columns {
            let x = params.x_offset + column as f32 * (width + pad) + pad;
            placements.push(BrickPlacement {
                row,
                column,
                pos: Vec2::new(x, y),
                size: Vec2::new(width, height),
                color,
            });
        }
    }

    log::debug!(
        "Generated {}x{} brick layout (brick width {})",
        params.rows,
        params.columns,
        width
    );
    placements
}
