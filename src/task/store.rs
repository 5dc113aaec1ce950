//! Task store - ordered in-memory list mirrored to a JSON file

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::error::{AddError, Result, StoreError};
use super::model::{Task, TaskId};

pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Empty store backed by `path`. Nothing is read until `load`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            tasks: Vec::new(),
        }
    }

    /// Build the store and load whatever is on disk.
    ///
    /// Load failures are not surfaced: the store just starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut store = Self::new(path);
        if let Err(e) = store.load() {
            debug!("Ignoring unreadable task file: {}", e);
        }
        store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Replace the in-memory tasks with the file's content.
    ///
    /// A missing or blank file yields an empty store. On a read or parse
    /// error the current tasks are kept as they were.
    pub fn load(&mut self) -> Result<()> {
        if !self.path.exists() {
            debug!("No task file at {}", self.path.display());
            return Ok(());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        if content.trim().is_empty() {
            self.tasks.clear();
            return Ok(());
        }

        let tasks: Vec<Task> =
            serde_json::from_str(&content).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;
        debug!("Loaded {} tasks from {}", tasks.len(), self.path.display());
        self.tasks = tasks;
        Ok(())
    }

    /// Overwrite the file with the full task list, pretty-printed.
    pub fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.tasks).map_err(StoreError::Serialize)?;
        fs::write(&self.path, content).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!("Saved {} tasks to {}", self.tasks.len(), self.path.display());
        Ok(())
    }

    /// Highest stored ID plus one, or 1 for an empty store.
    pub fn next_id(&self) -> std::result::Result<TaskId, AddError> {
        match self.tasks.iter().map(|t| t.id).max() {
            None => Ok(TaskId::FIRST),
            Some(max) => max.next().ok_or(AddError::IdsExhausted(max)),
        }
    }

    /// Append a pending task. Does not persist.
    pub fn add(&mut self, name: &str) -> std::result::Result<Task, AddError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AddError::EmptyName);
        }

        let task = Task::new(self.next_id()?, name);
        debug!("Adding task {}", task.id);
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Mark the first task with `id` as done. Does not persist.
    pub fn mark_done(&mut self, id: TaskId) -> Option<&Task> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.complete();
        Some(task)
    }

    /// Remove the first task with `id`, keeping the order of the rest.
    /// Does not persist.
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn names(store: &TaskStore) -> Vec<&str> {
        store.tasks().iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_add_assigns_increasing_ids_from_one() {
        let mut store = TaskStore::new("unused.json");
        for name in ["a", "b", "c"] {
            store.add(name).unwrap();
        }
        let ids: Vec<i64> = store.tasks().iter().map(|t| t.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(store.tasks().iter().all(|t| !t.done));
    }

    #[test]
    fn test_add_rejects_blank_name() {
        let mut store = TaskStore::new("unused.json");
        assert_eq!(store.add("").unwrap_err(), AddError::EmptyName);
        assert_eq!(store.add("   ").unwrap_err(), AddError::EmptyName);
        assert!(store.is_empty());
    }

    #[test]
    fn test_next_id_uses_max_not_last() {
        let mut store = TaskStore::new("unused.json");
        store.tasks = vec![Task::new(TaskId(7), "late"), Task::new(TaskId(2), "early")];
        assert_eq!(store.next_id(), Ok(TaskId(8)));
    }

    #[test]
    fn test_add_after_max_id_is_rejected() {
        let mut store = TaskStore::new("unused.json");
        store.tasks = vec![Task::new(TaskId(i64::MAX), "last")];

        assert_eq!(
            store.add("y").unwrap_err(),
            AddError::IdsExhausted(TaskId(i64::MAX))
        );
        assert_eq!(names(&store), vec!["last"]);
    }

    #[test]
    fn test_deleting_highest_id_lets_it_be_reissued() {
        let mut store = TaskStore::new("unused.json");
        store.add("one").unwrap();
        store.add("two").unwrap();
        store.delete(TaskId(2)).unwrap();
        assert_eq!(store.add("three").unwrap().id, TaskId(2));
    }

    #[test]
    fn test_mark_done_unknown_id_changes_nothing() {
        let mut store = TaskStore::new("unused.json");
        store.add("one").unwrap();
        store.add("two").unwrap();
        store.mark_done(TaskId(1)).unwrap();
        let before = store.tasks().to_vec();

        assert!(store.mark_done(TaskId(99)).is_none());
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn test_delete_keeps_order_of_remaining_tasks() {
        let mut store = TaskStore::new("unused.json");
        for name in ["a", "b", "c", "d"] {
            store.add(name).unwrap();
        }
        let removed = store.delete(TaskId(2)).unwrap();
        assert_eq!(removed.name, "b");
        assert_eq!(names(&store), vec!["a", "c", "d"]);
        assert!(store.delete(TaskId(2)).is_none());
    }

    #[test]
    fn test_store_roundtrip() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("tasks.json");

        let mut store = TaskStore::new(&path);
        store.add("foo")?;
        store.add("bar")?;
        store.mark_done(TaskId(2));
        store.save()?;

        let reopened = TaskStore::open(&path);
        assert_eq!(reopened.tasks(), store.tasks());
        Ok(())
    }

    #[test]
    fn test_save_writes_two_space_indented_array() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("tasks.json");

        let mut store = TaskStore::new(&path);
        store.add("foo")?;
        store.save()?;

        let content = fs::read_to_string(&path)?;
        assert_eq!(
            content,
            "[\n  {\n    \"id\": 1,\n    \"name\": \"foo\",\n    \"done\": false\n  }\n]"
        );
        Ok(())
    }

    #[test]
    fn test_save_empty_store() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("tasks.json");

        TaskStore::new(&path).save()?;
        assert_eq!(fs::read_to_string(&path)?.trim(), "[]");
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp = tempdir().unwrap();
        let mut store = TaskStore::new(temp.path().join("missing.json"));
        assert!(store.load().is_ok());
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_whitespace_only_file() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("tasks.json");
        fs::write(&path, "   \n  \t  ")?;

        let mut store = TaskStore::new(&path);
        store.load()?;
        assert!(store.is_empty());
        Ok(())
    }

    #[test]
    fn test_load_invalid_json_keeps_current_tasks() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("tasks.json");
        fs::write(&path, "{ invalid json }")?;

        let mut store = TaskStore::new(&path);
        store.add("kept")?;
        let err = store.load().unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
        assert_eq!(names(&store), vec!["kept"]);
        Ok(())
    }

    #[test]
    fn test_load_entry_without_done_field() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("tasks.json");
        fs::write(&path, r#"[{"id": 1, "name": "x"}]"#)?;

        let store = TaskStore::open(&path);
        assert_eq!(store.tasks(), &[Task::new(TaskId(1), "x")]);
        Ok(())
    }

    #[test]
    fn test_open_swallows_invalid_json() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("tasks.json");
        fs::write(&path, "not json")?;

        assert!(TaskStore::open(&path).is_empty());
        Ok(())
    }

    #[test]
    fn test_save_into_missing_directory_is_write_error() {
        let temp = tempdir().unwrap();
        let mut store = TaskStore::new(temp.path().join("no-such-dir").join("tasks.json"));
        store.add("foo").unwrap();

        let err = store.save().unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
    }
}
