//! Task data structure and status values.
//!
//! The serialized field names (`task_id`, `create_time`, ...) are the store's
//! on-disk format and must not change without migrating existing files.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// A single to-do item.
///
/// Timestamps are stored as pre-formatted local-time strings with second
/// precision so the file stays human-readable and lexicographically sortable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub task_id: u64,
    pub description: String,
    pub create_time: String,
    pub update_time: String,
    pub status: Status,
}

impl Task {
    /// Create a fresh task in status `new`, with both timestamps set to now.
    pub fn new(id: u64, description: String) -> Self {
        let now = now_stamp();
        Task {
            task_id: id,
            description,
            create_time: now.clone(),
            update_time: now,
            status: Status::New,
        }
    }

    /// Refresh `update_time` to the current local time.
    pub fn touch(&mut self) {
        self.update_time = now_stamp();
    }
}

/// Task completion status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    New,
    InProgress,
    Done,
}

impl Status {
    /// The wire/display spelling, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::New => "new",
            Status::InProgress => "in-progress",
            Status::Done => "done",
        }
    }
}

/// Current local time formatted as `YYYY-MM-DD HH:MM:SS`.
pub fn now_stamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
