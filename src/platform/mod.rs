// src/platform/mod.rs

//! Ports to the embedding platform.
//!
//! The engine is platform-agnostic: it persists through a string-keyed
//! `PersistenceStore` and exports through an `ImageSink`, both injected at
//! the call sites that need them. The original application backed these with
//! browser `localStorage` and an anchor-element download; this crate ships a
//! filesystem pair in [`fs`] and in-memory test doubles in [`mock`].
//!
//! Both ports are synchronous and one-shot. There is no retry logic anywhere;
//! a failing store or sink surfaces directly to the caller of the engine
//! operation that touched it.

pub mod fs;
pub mod mock;

pub use fs::{FileSink, FileStore};
pub use mock::{CaptureSink, MemoryStore};

use anyhow::Result;

/// String-keyed blob storage for the persisted canvas.
///
/// The engine always overwrites the whole blob under a fixed key; there is no
/// incremental update. `get` distinguishes "no saved state" (`Ok(None)`) from
/// a store failure (`Err`).
pub trait PersistenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Receiver for exported raster images.
///
/// `rgba` is row-major, left-to-right, top-to-bottom, 4 bytes per pixel with
/// alpha always 255. The sink owns materialization: encoding, the actual file
/// name, and whatever "download" means on the platform.
pub trait ImageSink {
    fn emit(
        &mut self,
        width: usize,
        height: usize,
        rgba: &[u8],
        suggested_filename: &str,
    ) -> Result<()>;
}
