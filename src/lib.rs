//! todo-cli library - task store, command parsing and the interactive loop

pub mod cli;
pub mod config;
pub mod logging;
pub mod task;
