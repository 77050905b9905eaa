//! Highscore persistence
//!
//! The engine only ever needs to load and store one integer. Stores must
//! tolerate a missing or unreadable backing (treat it as 0) and never fail the
//! caller; problems are logged and the game carries on.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::StoreError;

/// Persistence collaborator for the highscore.
pub trait HighscoreStore: fmt::Debug {
    /// Stored highscore, 0 when absent.
    fn load_highscore(&self) -> u64;

    fn store_highscore(&mut self, value: u64);
}

/// In-memory store (tests, or hosts without persistence).
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<u64>,
    writes: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a highscore.
    pub fn with_highscore(value: u64) -> Self {
        Self {
            value: Some(value),
            writes: 0,
        }
    }

    /// Number of `store_highscore` calls so far.
    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl HighscoreStore for MemoryStore {
    fn load_highscore(&self) -> u64 {
        self.value.unwrap_or(0)
    }

    fn store_highscore(&mut self, value: u64) {
        self.value = Some(value);
        self.writes += 1;
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct HighscoreDoc {
    highscore: u64,
}

/// JSON file store: `{"highscore": 123}`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<u64>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&self.path)?;
        let doc: HighscoreDoc = serde_json::from_str(&text)?;
        Ok(Some(doc.highscore))
    }

    fn write(&self, value: u64) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string(&HighscoreDoc { highscore: value })?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

impl HighscoreStore for JsonFileStore {
    fn load_highscore(&self) -> u64 {
        match self.read() {
            Ok(value) => {
                debug!(path = %self.path.display(), ?value, "loaded highscore");
                value.unwrap_or(0)
            }
            Err(e) => {
                warn!(path = %self.path.display(), "ignoring highscore file: {}", e);
                0
            }
        }
    }

    fn store_highscore(&mut self, value: u64) {
        if let Err(e) = self.write(value) {
            warn!(path = %self.path.display(), "failed to store highscore: {}", e);
        }
    }
}
