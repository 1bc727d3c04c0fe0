//! File-backed task store.
//!
//! The whole collection lives in one JSON file: a pretty-printed array of
//! task objects, rewritten in full on every mutation. A missing or empty
//! file reads as an empty store; anything else that fails to parse is a
//! hard error so a corrupt file is never silently clobbered.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::task::Task;

/// Errors surfaced by store and command operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The backing file could not be read or written.
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// The backing file exists but is not valid task JSON.
    #[error("corrupt task file: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// No task with the given id exists.
    #[error("task with ID {id} not found")]
    NotFound { id: u64 },
}

/// In-memory task collection, insertion-order preserved.
#[derive(Debug, Default)]
pub struct Store {
    pub tasks: Vec<Task>,
}

impl Store {
    /// Load the store from `path`.
    ///
    /// A nonexistent or empty file yields an empty store; unreadable or
    /// malformed contents are errors.
    pub fn load(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            return Ok(Store::default());
        }
        let buf = fs::read_to_string(path)?;
        if buf.trim().is_empty() {
            return Ok(Store::default());
        }
        let tasks = serde_json::from_str(&buf)?;
        Ok(Store { tasks })
    }

    /// Save the full collection to `path` as a pretty-printed JSON array.
    ///
    /// Writes via temp file + rename so a failed write never leaves a
    /// truncated store behind.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let data = serde_json::to_string_pretty(&self.tasks)?;
        let tmp = path.with_extension("json.tmp");
        let mut f = File::create(&tmp)?;
        f.write_all(data.as_bytes())?;
        f.flush()?;
        fs::rename(tmp, path)?;
        Ok(())
    }

    /// Next available task id: one past the current maximum, 1 when empty.
    pub fn next_id(&self) -> u64 {
        self.tasks.iter().map(|t| t.task_id).max().unwrap_or(0) + 1
    }

    /// Get a mutable reference to a task by id.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.task_id == id)
    }

    /// Remove the task with the given id, preserving the order of the rest.
    /// Returns false if no task matched.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.task_id != id);
        self.tasks.len() != before
    }
}
