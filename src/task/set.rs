use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::types::{Task, TaskId, TaskStatus};

/// Ordered, in-memory collection of tasks for one processing run.
///
/// A `TaskSet` is read in full from a task file before a run, mutated in
/// place by workers during the run, and left in its final state afterwards.
/// Tasks are never added or removed while a run is underway. Serializes as a
/// plain JSON array of tasks.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct TaskSet {
    tasks: Vec<Task>,
}

impl TaskSet {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Task at a given position, not a given identity.
    pub fn get(&self, position: usize) -> Option<&Task> {
        self.tasks.get(position)
    }

    pub fn get_mut(&mut self, position: usize) -> Option<&mut Task> {
        self.tasks.get_mut(position)
    }

    /// Tasks not yet done, in their original relative order.
    pub fn pending(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.is_pending()).collect()
    }

    /// Identifiers of the tasks not yet done, deduplicated, in their original
    /// relative order. This is exactly the set of identifiers a run enqueues.
    pub fn pending_ids(&self) -> Vec<TaskId> {
        let mut seen = HashSet::new();
        self.tasks
            .iter()
            .filter(|task| task.is_pending())
            .map(|task| task.id)
            .filter(|id| seen.insert(*id))
            .collect()
    }

    /// Tasks currently in the given status, in their original relative order.
    pub fn with_status(&self, status: TaskStatus) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.status == status)
            .collect()
    }

    /// Identity-to-position map, built once before workers start so each
    /// lookup during the run is O(1). The first occurrence wins if a file
    /// carries duplicate identifiers.
    pub fn index_by_id(&self) -> HashMap<TaskId, usize> {
        let mut index = HashMap::with_capacity(self.tasks.len());
        for (position, task) in self.tasks.iter().enumerate() {
            index.entry(task.id).or_insert(position);
        }
        index
    }
}

impl From<Vec<Task>> for TaskSet {
    fn from(tasks: Vec<Task>) -> Self {
        Self::new(tasks)
    }
}

impl FromIterator<Task> for TaskSet {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TaskSet {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
