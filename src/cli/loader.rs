//! Task file loading and persistence
//!
//! A task file is a JSON array of `{id, description, duration, status}`
//! objects. Decoding happens entirely here; the engine only ever sees an
//! already-materialized [`TaskSet`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::task::TaskSet;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("task file {path:?} not found")]
    NotFound { path: PathBuf },

    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: io::Error,
    },

    #[error("task file {path:?} is not a valid task list: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Load and decode a task file.
pub fn load_tasks<P: AsRef<Path>>(path: P) -> Result<TaskSet, LoadError> {
    let path = path.as_ref().to_path_buf();

    debug!("loading task file: {:?}", path);

    let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound { path: path.clone() },
        _ => LoadError::Io {
            path: path.clone(),
            source: e,
        },
    })?;

    let tasks: TaskSet = serde_json::from_str(&content).map_err(|e| LoadError::Parse {
        path: path.clone(),
        source: e,
    })?;

    if tasks.is_empty() {
        warn!("no tasks found in {:?}", path);
    }
    debug!("loaded {} tasks from {:?}", tasks.len(), path);

    Ok(tasks)
}

/// Write a task set back to a file, pretty-printed.
pub fn save_tasks<P: AsRef<Path>>(path: P, tasks: &TaskSet) -> Result<(), LoadError> {
    let path = path.as_ref().to_path_buf();

    let content = serde_json::to_string_pretty(tasks).map_err(|e| LoadError::Parse {
        path: path.clone(),
        source: e,
    })?;
    fs::write(&path, content).map_err(|e| LoadError::Io {
        path: path.clone(),
        source: e,
    })?;

    debug!("saved {} tasks to {:?}", tasks.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskStatus;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_tasks() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(
            &temp_file,
            r#"[
                {"id": 1, "description": "write docs", "duration": 3, "status": "not_started"},
                {"id": 2, "description": "review PR", "duration": 1, "status": "done"}
            ]"#,
        )
        .unwrap();

        let tasks = load_tasks(temp_file.path()).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks.get(0).unwrap().description, "write docs");
        assert_eq!(tasks.get(1).unwrap().status, TaskStatus::Done);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_tasks("/definitely/not/here/tasks.json");
        assert!(matches!(result, Err(LoadError::NotFound { .. })));
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(&temp_file, "{not json").unwrap();

        let result = load_tasks(temp_file.path());
        assert!(matches!(result, Err(LoadError::Parse { .. })));
    }

    #[test]
    fn test_load_rejects_unknown_status() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(
            &temp_file,
            r#"[{"id": 1, "description": "x", "duration": 0, "status": "paused"}]"#,
        )
        .unwrap();

        let result = load_tasks(temp_file.path());
        assert!(matches!(result, Err(LoadError::Parse { .. })));
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let temp_file = NamedTempFile::new().unwrap();
        let original = load_and_mutate();

        save_tasks(temp_file.path(), &original).unwrap();
        let reloaded = load_tasks(temp_file.path()).unwrap();

        assert_eq!(reloaded, original);
    }

    fn load_and_mutate() -> TaskSet {
        let mut tasks = TaskSet::new(vec![
            crate::task::Task::new(1, "first", 2),
            crate::task::Task::new(2, "second", 0),
        ]);
        if let Some(task) = tasks.get_mut(0) {
            task.update_status(TaskStatus::Done);
        }
        tasks
    }
}
