//! Application configuration

use std::path::PathBuf;

/// Name of the task file, relative to the working directory
pub const DEFAULT_TASKS_FILE: &str = "tasks.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tasks_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tasks_file: PathBuf::from(DEFAULT_TASKS_FILE),
        }
    }
}

impl Config {
    /// Same settings with the task file placed under `dir`
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            tasks_file: dir.into().join(DEFAULT_TASKS_FILE),
        }
    }
}
