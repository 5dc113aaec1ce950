//! Command handlers. Each one prints its own result; only output errors
//! are returned.

use std::io::{self, Write};
use tracing::debug;

use crate::task::{StoreError, TaskId, TaskStore};

pub const HELP_TEXT: &str = "\
To-Do List CLI Application
Commands:
  add <task name>      - Add a new task
  list                 - List all tasks
  done <task ID>       - Mark a task as done
  delete <task ID>     - Delete a task
  help                 - Show this help message
  exit                 - Exit the application";

pub fn help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", HELP_TEXT)
}

pub fn add(store: &mut TaskStore, name: &str, out: &mut impl Write) -> io::Result<()> {
    let name = match store.add(name) {
        Ok(task) => task.name,
        Err(e) => return writeln!(out, "{}", e),
    };
    persist(store, out)?;
    writeln!(out, "Task added: {}", name)
}

pub fn list(store: &TaskStore, out: &mut impl Write) -> io::Result<()> {
    if store.is_empty() {
        return writeln!(out, "No tasks available.");
    }

    writeln!(out, "Tasks:")?;
    for task in store.tasks() {
        writeln!(out, "{}", task)?;
    }
    Ok(())
}

pub fn mark_done(store: &mut TaskStore, id: TaskId, out: &mut impl Write) -> io::Result<()> {
    let Some(task) = store.mark_done(id) else {
        return writeln!(out, "Task not found with ID: {}", id);
    };
    let name = task.name.clone();
    persist(store, out)?;
    writeln!(out, "Task marked as done: {}", name)
}

pub fn delete(store: &mut TaskStore, id: TaskId, out: &mut impl Write) -> io::Result<()> {
    let Some(task) = store.delete(id) else {
        return writeln!(out, "Task not found with ID: {}", id);
    };
    persist(store, out)?;
    writeln!(out, "Task deleted: {}", task.name)
}

/// Save after a mutation. Serialization failures are shown to the user;
/// write failures are dropped.
fn persist(store: &TaskStore, out: &mut impl Write) -> io::Result<()> {
    match store.save() {
        Ok(()) => Ok(()),
        Err(StoreError::Serialize(e)) => writeln!(out, "Error saving tasks: {}", e),
        Err(e) => {
            debug!("Discarding save failure: {}", e);
            Ok(())
        }
    }
}
