// src/lib.rs

//! pixelgrid: the engine behind a 16×16 pixel-art editor.
//!
//! The crate owns the canvas state and tool semantics; everything visual
//! (cell elements, cursor highlight, button chrome) belongs to the embedding
//! layer. [`GridEngine`] paints with a [`Tool`] (pencil, bucket, eraser),
//! restores and persists the canvas through a [`PersistenceStore`], and
//! exports row-major RGBA rasters through an [`ImageSink`]. All of it is
//! synchronous and single-threaded.
//!
//! ```
//! use pixelgrid::{Color, GridEngine, MemoryStore, Tool};
//!
//! let store = MemoryStore::new();
//! let mut engine = GridEngine::new(Box::new(store))?;
//! engine.set_active_color(Color::from_hex("#ff0000"));
//! engine.set_active_tool(Tool::Pencil);
//! engine.paint_cell(4, 4)?;
//! # Ok::<(), pixelgrid::EngineError>(())
//! ```

pub mod color;
pub mod engine;
pub mod grid;
pub mod platform;

pub use color::{hex_to_rgb, Color, Rgba};
pub use engine::{EngineError, GridEngine, RasterBuffer, Tool, EXPORT_FILENAME, STORAGE_KEY};
pub use grid::{blank_cell_color, Grid, GRID_DIM};
pub use platform::{CaptureSink, FileSink, FileStore, ImageSink, MemoryStore, PersistenceStore};
