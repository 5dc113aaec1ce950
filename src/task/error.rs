// Task store error types

use std::path::PathBuf;
use thiserror::Error;

use super::model::TaskId;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddError {
    #[error("Please provide a task name.")]
    EmptyName,

    #[error("Cannot add task: no task IDs left after {0}")]
    IdsExhausted(TaskId),
}

pub type Result<T> = std::result::Result<T, StoreError>;
