// src/platform/fs.rs

//! Filesystem-backed port implementations.
//!
//! `FileStore` keeps one file per key under a root directory and stands in
//! for the browser's `localStorage`. `FileSink` materializes exported rasters
//! as PAM images (P7, RGB_ALPHA), which keeps the dump viewable without
//! pulling an encoder into the engine; a real embedding would substitute its
//! own sink with PNG encoding and a download trigger.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};

use crate::platform::{ImageSink, PersistenceStore};

/// A `PersistenceStore` that maps each key to `<root>/<key>`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileStore { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl PersistenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("failed to read store file {:?}", path)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        fs::create_dir_all(&self.root)
            .with_context(|| format!("failed to create store directory {:?}", self.root))?;
        fs::write(&path, value)
            .with_context(|| format!("failed to write store file {:?}", path))?;
        debug!("persisted {} bytes under key '{}'", value.len(), key);
        Ok(())
    }
}

/// An `ImageSink` that writes the buffer as a PAM file under a directory.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileSink { dir: dir.into() }
    }
}

impl ImageSink for FileSink {
    fn emit(
        &mut self,
        width: usize,
        height: usize,
        rgba: &[u8],
        suggested_filename: &str,
    ) -> Result<()> {
        let path = self.dir.join(suggested_filename);
        let header = format!(
            "P7\nWIDTH {}\nHEIGHT {}\nDEPTH 4\nMAXVAL 255\nTUPLTYPE RGB_ALPHA\nENDHDR\n",
            width, height
        );
        let mut bytes = header.into_bytes();
        bytes.extend_from_slice(rgba);
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create export directory {:?}", self.dir))?;
        fs::write(&path, &bytes)
            .with_context(|| format!("failed to write image file {:?}", path))?;
        info!("exported {}x{} image to {:?}", width, height, path);
        Ok(())
    }
}
