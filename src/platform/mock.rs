// src/platform/mock.rs

//! In-memory `PersistenceStore` and `ImageSink` doubles.
//!
//! `MemoryStore` clones share one backing map, so a test can keep a handle to
//! seed or inspect the store after handing a clone to the engine.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use anyhow::Result;

use crate::platform::{ImageSink, PersistenceStore};

/// A `HashMap`-backed store with shared interior state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a value, as if a previous session had saved it.
    pub fn seed(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// Returns the stored value for `key`, if any.
    pub fn stored(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PersistenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A single emitted image, as seen by a `CaptureSink`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
    pub suggested_filename: String,
}

/// An `ImageSink` that records every emission for assertions.
#[derive(Debug, Default)]
pub struct CaptureSink {
    emitted: Vec<EmittedImage>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emitted(&self) -> &[EmittedImage] {
        &self.emitted
    }
}

impl ImageSink for CaptureSink {
    fn emit(
        &mut self,
        width: usize,
        height: usize,
        rgba: &[u8],
        suggested_filename: &str,
    ) -> Result<()> {
        self.emitted.push(EmittedImage {
            width,
            height,
            rgba: rgba.to_vec(),
            suggested_filename: suggested_filename.to_string(),
        });
        Ok(())
    }
}
