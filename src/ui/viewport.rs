//! Mapping between terminal cells and world units.

use flappy::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use flappy::geometry::Point;
use ratatui::layout::Rect;

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: u32 = 2;

/// Terminal area the 400×600 world is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub area: Rect,
}

impl Viewport {
    /// Largest aspect-correct area centered inside `frame`.
    pub fn fit(frame: Rect) -> Self {
        let (world_w, world_h) = (SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32);
        let rows_for_width = frame.width as u32 * world_h / (world_w * CELL_ASPECT);
        let rows = (frame.height as u32).min(rows_for_width);
        let cols = (rows * world_w * CELL_ASPECT / world_h).min(frame.width as u32);

        let (cols, rows) = (cols as u16, rows as u16);
        Self {
            area: Rect::new(
                frame.x + (frame.width - cols) / 2,
                frame.y + (frame.height - rows) / 2,
                cols,
                rows,
            ),
        }
    }

    /// World units covered by one terminal column.
    pub fn units_per_column(&self) -> f64 {
        if self.area.width == 0 {
            return 0.0;
        }
        SCREEN_WIDTH as f64 / self.area.width as f64
    }

    /// World units covered by one terminal row.
    pub fn units_per_row(&self) -> f64 {
        if self.area.height == 0 {
            return 0.0;
        }
        SCREEN_HEIGHT as f64 / self.area.height as f64
    }

    /// World point at the center of the given cell. Cells outside the
    /// viewport map to points outside the world.
    pub fn to_world(&self, column: u16, row: u16) -> Point {
        let col = column as f64 - self.area.x as f64 + 0.5;
        let row = row as f64 - self.area.y as f64 + 0.5;
        Point::new(
            (col * self.units_per_column()).floor() as i32,
            (row * self.units_per_row()).floor() as i32,
        )
    }
}
