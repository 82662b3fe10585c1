// src/engine.rs

//! The stateful canvas engine: tool dispatch, persistence, and export.
//!
//! `GridEngine` owns the grid, the active tool, and the active color. Every
//! mutation (paint or clear) synchronously rewrites the whole canvas blob to
//! the injected `PersistenceStore`; construction restores from that blob or
//! falls back to the default checkerboard. Control flow is a direct call
//! chain throughout, with no scheduling or async boundaries.

use log::{debug, trace, warn};
use thiserror::Error;

use crate::color::Color;
use crate::grid::{blank_cell_color, Grid, GRID_DIM};
use crate::platform::{ImageSink, PersistenceStore};

/// Fixed key the canvas blob is stored under.
pub const STORAGE_KEY: &str = "a03-canvas";

/// Filename suggested to the sink on export.
pub const EXPORT_FILENAME: &str = "pixel-art.png";

/// The three drawing tools. Selected by the UI layer, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Pencil,
    Bucket,
    Eraser,
}

/// Errors surfaced by engine operations.
///
/// Store and sink failures pass through unmodified; the embedding decides how
/// to present them. Malformed colors and corrupted blobs are not errors at
/// all, they degrade per the fail-soft policies in `color` and `new`.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("cell ({row}, {col}) is outside the {dim}x{dim} canvas", dim = GRID_DIM)]
    OutOfRange { row: usize, col: usize },
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// An exported raster image: row-major RGBA bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

/// Owns all canvas state and mediates every mutation.
pub struct GridEngine {
    grid: Grid,
    active_tool: Tool,
    active_color: Color,
    store: Box<dyn PersistenceStore>,
}

impl GridEngine {
    /// Creates an engine backed by `store`, restoring a previously saved
    /// canvas when one exists.
    ///
    /// A missing blob initializes the checkerboard and saves it; a blob that
    /// fails to deserialize into a 16×16 grid is discarded the same way
    /// (self-healing, never a construction failure). A store that errors on
    /// `get` propagates.
    pub fn new(store: Box<dyn PersistenceStore>) -> Result<Self, EngineError> {
        let mut engine = GridEngine {
            grid: Grid::checkerboard(),
            active_tool: Tool::default(),
            active_color: Color::BLACK,
            store,
        };
        match engine.store.get(STORAGE_KEY)? {
            Some(blob) => match serde_json::from_str::<Grid>(&blob) {
                Ok(grid) => {
                    debug!("restored canvas from store key '{}'", STORAGE_KEY);
                    engine.grid = grid;
                }
                Err(e) => {
                    warn!("discarding corrupted canvas blob: {}", e);
                    engine.clear_canvas()?;
                }
            },
            None => engine.clear_canvas()?,
        }
        Ok(engine)
    }

    pub fn active_tool(&self) -> Tool {
        self.active_tool
    }

    pub fn set_active_tool(&mut self, tool: Tool) {
        trace!("active tool -> {:?}", tool);
        self.active_tool = tool;
    }

    pub fn active_color(&self) -> Color {
        self.active_color
    }

    pub fn set_active_color(&mut self, color: Color) {
        trace!("active color -> {}", color.to_hex());
        self.active_color = color;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Applies the active tool at `(row, col)` and persists the grid.
    ///
    /// Pencil paints the one cell with the active color. Bucket repaints all
    /// 256 cells with the active color regardless of the target coordinates
    /// or existing contents; it is a whole-canvas fill, not a connected-region
    /// flood fill. Eraser restores the cell to its checkerboard default,
    /// whatever was painted there before.
    pub fn paint_cell(&mut self, row: usize, col: usize) -> Result<(), EngineError> {
        if row >= GRID_DIM || col >= GRID_DIM {
            return Err(EngineError::OutOfRange { row, col });
        }
        match self.active_tool {
            Tool::Pencil => self.grid.set(row, col, self.active_color),
            Tool::Bucket => self.grid.fill(self.active_color),
            Tool::Eraser => self.grid.set(row, col, blank_cell_color(row, col)),
        }
        trace!(
            "{:?} applied at ({}, {})",
            self.active_tool,
            row,
            col
        );
        self.save()
    }

    /// Rebuilds the full checkerboard, replacing any prior content, and
    /// persists it.
    pub fn clear_canvas(&mut self) -> Result<(), EngineError> {
        self.grid = Grid::checkerboard();
        debug!("canvas cleared to default pattern");
        self.save()
    }

    /// Flattens the grid into an RGBA raster. Pure; does not touch the ports.
    pub fn export_image(&self) -> RasterBuffer {
        RasterBuffer {
            width: GRID_DIM,
            height: GRID_DIM,
            rgba: self.grid.to_rgba_bytes(),
        }
    }

    /// Exports the canvas through `sink` under the suggested filename.
    pub fn export_to(&self, sink: &mut dyn ImageSink) -> Result<(), EngineError> {
        let image = self.export_image();
        sink.emit(image.width, image.height, &image.rgba, EXPORT_FILENAME)?;
        Ok(())
    }

    /// Whole-grid overwrite of the persisted blob. Runs after every mutation.
    fn save(&mut self) -> Result<(), EngineError> {
        let blob = serde_json::to_string(&self.grid).map_err(anyhow::Error::from)?;
        self.store.set(STORAGE_KEY, &blob)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
