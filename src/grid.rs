// src/grid.rs

//! The 16×16 canvas grid and its default checkerboard pattern.
//!
//! `Grid` owns the cell colors; all mutation goes through `GridEngine` in
//! `crate::engine`. The serde form is transparent, so a grid persists as a
//! nested JSON array of 16 rows × 16 hex color strings in `[row][col]` order.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Number of rows and columns. The canvas is always square and fixed-size.
pub const GRID_DIM: usize = 16;

/// Checkerboard tone for "blank" cells on the even parity.
pub const CHECKER_GRAY: Color = Color::rgb(222, 222, 222); // #dedede
/// Checkerboard tone for "blank" cells on the odd parity.
pub const CHECKER_WHITE: Color = Color::rgb(255, 255, 255); // #ffffff

/// A 16×16 grid of cell colors, indexed `[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    cells: [[Color; GRID_DIM]; GRID_DIM],
}

/// The default color of an unpainted cell: a two-tone checkerboard.
///
/// Even rows alternate gray/white starting with gray at column 0; odd rows
/// invert the phase. Pure function of the coordinates, recomputed on demand.
pub fn blank_cell_color(row: usize, col: usize) -> Color {
    if (row + col) % 2 == 0 {
        CHECKER_GRAY
    } else {
        CHECKER_WHITE
    }
}

impl Grid {
    /// Builds the default checkerboard grid.
    pub fn checkerboard() -> Grid {
        let mut cells = [[Color::BLACK; GRID_DIM]; GRID_DIM];
        for (row, row_cells) in cells.iter_mut().enumerate() {
            for (col, cell) in row_cells.iter_mut().enumerate() {
                *cell = blank_cell_color(row, col);
            }
        }
        Grid { cells }
    }

    /// Builds a grid with every cell set to `color`.
    pub fn solid(color: Color) -> Grid {
        Grid {
            cells: [[color; GRID_DIM]; GRID_DIM],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Color {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, color: Color) {
        self.cells[row][col] = color;
    }

    /// Sets every cell to `color`. This is the Bucket tool's whole-grid fill.
    pub fn fill(&mut self, color: Color) {
        for row_cells in self.cells.iter_mut() {
            row_cells.fill(color);
        }
    }

    /// Iterates cells in row-major order, left-to-right, top-to-bottom.
    pub fn iter_cells(&self) -> impl Iterator<Item = Color> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    /// Flattens the grid into an RGBA byte buffer, 4 bytes per cell in
    /// row-major order. Always `GRID_DIM * GRID_DIM * 4` = 1024 bytes.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(GRID_DIM * GRID_DIM * 4);
        for color in self.iter_cells() {
            bytes.extend_from_slice(&color.to_rgba().to_bytes());
        }
        bytes
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::checkerboard()
    }
}
