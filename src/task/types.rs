use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for tasks.
///
/// Identifiers are assigned by whoever produced the task file; the runner
/// never generates them. They are unique within a [`TaskSet`](super::TaskSet)
/// but need not match positions.
pub type TaskId = i64;

/// The unit of work: identity, human description, simulated duration, and
/// lifecycle status.
///
/// `id` and `duration` are fixed at creation; only `status` changes during a
/// run, and only forward (see [`Task::update_status`]).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    /// Simulated processing time, in seconds.
    pub duration: u64,
    pub status: TaskStatus,
}

/// Task lifecycle status.
///
/// The only legal path is `NotStarted -> InProgress -> Done`; `Done` is
/// terminal. The derived ordering reflects lifecycle progress.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    NotStarted,
    InProgress,
    Done,
}

impl Task {
    /// Create a fresh, not-yet-started task.
    pub fn new(id: TaskId, description: impl Into<String>, duration: u64) -> Self {
        Self {
            id,
            description: description.into(),
            duration,
            status: TaskStatus::NotStarted,
        }
    }

    pub fn is_not_started(&self) -> bool {
        self.status == TaskStatus::NotStarted
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == TaskStatus::InProgress
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }

    /// Check if the task still needs processing.
    pub fn is_pending(&self) -> bool {
        self.status != TaskStatus::Done
    }

    /// Advance the lifecycle status. Regressions are ignored: a task never
    /// moves backwards and `Done` is terminal.
    pub fn update_status(&mut self, status: TaskStatus) {
        if status > self.status {
            self.status = status;
        }
    }
}

impl TaskStatus {
    /// Wire-format name, as it appears in task files.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "not_started",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Done => "done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
