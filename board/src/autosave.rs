//! Periodic local snapshots of the open case.
//!
//! Snapshots are plain (unobfuscated) case JSON kept in a single key-value
//! slot. The slot backend is abstracted behind [`SlotStore`] so the browser
//! host can back it with local storage while the CLI and tests use
//! [`FileStore`] or [`MemoryStore`].

#[cfg(test)]
#[path = "autosave_test.rs"]
mod autosave_test;

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::codec::{self, Case, CodecError};
use crate::consts::AUTOSAVE_CASE_NAME;

/// Error raised by slot backends and snapshot writes.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access auto-save slot at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Encode(#[from] CodecError),
}

/// A key-value store holding one string per key.
pub trait SlotStore {
    /// Read a slot; `Ok(None)` when it has never been written or was cleared.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite a slot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend cannot be written.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Empty a slot. Clearing an empty slot succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend cannot be modified.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-process slots, lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.slots.remove(key);
        Ok(())
    }
}

/// Slots stored as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File backing `key`.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SlotStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io { path: self.dir.clone(), source })?;
        let path = self.path_for(key);
        std::fs::write(&path, value).map_err(|source| StoreError::Io { path, source })
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }
}

/// Decides when a snapshot is due and writes it.
#[derive(Debug, Clone)]
pub struct AutoSaver {
    interval: Duration,
    key: String,
    last: Instant,
}

impl AutoSaver {
    /// Start the interval clock at `started`.
    pub fn new(interval: Duration, key: impl Into<String>, started: Instant) -> Self {
        Self { interval, key: key.into(), last: started }
    }

    /// Whether an interval has elapsed since the last due tick. A due tick
    /// restarts the clock at `now`.
    pub fn due(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) < self.interval {
            return false;
        }
        self.last = now;
        true
    }

    /// Write `case` to the slot unless it holds no pins and no cards.
    /// Returns whether a snapshot was written.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if encoding or the slot write fails.
    pub fn save(&self, store: &mut dyn SlotStore, case: &Case) -> Result<bool, StoreError> {
        if case.pins.is_empty() && case.evidence.is_empty() {
            debug!("nothing on the board; skipping auto-save");
            return Ok(false);
        }
        let json = if case.name.is_empty() {
            let named = Case { name: AUTOSAVE_CASE_NAME.to_string(), ..case.clone() };
            codec::to_plain_json(&named)?
        } else {
            codec::to_plain_json(case)?
        };
        store.write(&self.key, &json)?;
        info!(key = %self.key, pins = case.pins.len(), evidence = case.evidence.len(), "auto-saved case");
        Ok(true)
    }

    /// Tick the clock and save if due.
    pub fn tick(&mut self, now: Instant, store: &mut dyn SlotStore, case: &Case) -> bool {
        self.due(now) && self.save_logged(store, case)
    }

    /// [`save`](Self::save) with failures logged instead of returned; a
    /// broken slot must not interrupt editing.
    pub fn save_logged(&self, store: &mut dyn SlotStore, case: &Case) -> bool {
        match self.save(store, case) {
            Ok(saved) => saved,
            Err(e) => {
                warn!(error = %e, key = %self.key, "auto-save failed");
                false
            }
        }
    }
}

/// The snapshot to offer for restore at session start, if there is a usable one.
///
/// Unreadable slots and corrupt snapshots are logged and yield `None`.
pub fn restore_offer(store: &dyn SlotStore, key: &str) -> Option<Case> {
    let raw = match store.read(key) {
        Ok(Some(raw)) if !raw.trim().is_empty() => raw,
        Ok(_) => return None,
        Err(e) => {
            warn!(error = %e, key, "could not read auto-save slot");
            return None;
        }
    };
    match codec::decode_plain(&raw) {
        Ok(case) => Some(case),
        Err(e) => {
            warn!(error = %e, key, "ignoring corrupt auto-save snapshot");
            None
        }
    }
}
