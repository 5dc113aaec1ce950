//! Task data model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Integer task identifier, stored as a bare number in `tasks.json`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl TaskId {
    /// The ID handed out when the store is empty
    pub const FIRST: TaskId = TaskId(1);

    /// The ID that follows this one, or `None` past `i64::MAX`
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl FromStr for TaskId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(TaskId)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,

    /// Name given at creation; never edited afterwards
    pub name: String,

    /// Absent in the file means pending
    #[serde(default)]
    pub done: bool,
}

impl Task {
    /// Create a new pending task
    pub fn new(id: TaskId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            done: false,
        }
    }

    /// Mark task as done. Marking twice is a no-op.
    pub fn complete(&mut self) {
        self.done = true;
    }

    /// "Done" or "Pending"
    pub fn status_label(&self) -> &'static str {
        if self.done {
            "Done"
        } else {
            "Pending"
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} - {}", self.id, self.name, self.status_label())
    }
}
