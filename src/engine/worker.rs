use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock, mpsc};
use tracing::debug;

use super::notify::{done_message, processing_message};
use super::runner::RunError;
use crate::task::{TaskId, TaskSet, TaskStatus};

/// One worker: pulls identifiers until the work queue is closed and drained,
/// advances each resolved task through its lifecycle, and publishes progress
/// events on the notification bus.
pub(crate) async fn worker_loop(
    worker_id: usize,
    queue: Arc<Mutex<mpsc::Receiver<TaskId>>>,
    tasks: Arc<RwLock<TaskSet>>,
    index: Arc<HashMap<TaskId, usize>>,
    notifications: mpsc::Sender<String>,
) -> Result<(), RunError> {
    loop {
        // Hold the queue lock only for the handoff, never while processing.
        let task_id = {
            let mut queue = queue.lock().await;
            match queue.recv().await {
                Some(id) => id,
                None => break,
            }
        };
        debug!("worker {} picked up task {}", worker_id, task_id);
        process_task(worker_id, task_id, &tasks, &index, &notifications).await?;
    }

    debug!("worker {} stopping: queue closed and drained", worker_id);
    Ok(())
}

/// Drive a single task through the state machine.
///
/// A not-yet-started task is marked in progress and finished in one visit,
/// emitting both events. A task already in progress gets its full simulated
/// duration again (partial elapsed time is not tracked) and emits only the
/// done event. A task already done is left untouched.
pub(crate) async fn process_task(
    worker_id: usize,
    task_id: TaskId,
    tasks: &RwLock<TaskSet>,
    index: &HashMap<TaskId, usize>,
    notifications: &mpsc::Sender<String>,
) -> Result<(), RunError> {
    let position = *index
        .get(&task_id)
        .ok_or(RunError::UnknownTask { id: task_id })?;

    let (status, duration) = {
        let tasks = tasks.read().await;
        let task = tasks
            .get(position)
            .ok_or(RunError::UnknownTask { id: task_id })?;
        (task.status, task.duration)
    };

    match status {
        TaskStatus::Done => {}
        TaskStatus::NotStarted => {
            set_status(tasks, position, TaskStatus::InProgress).await;
            send(notifications, processing_message(task_id, worker_id)).await?;

            set_status(tasks, position, TaskStatus::Done).await;
            send(notifications, done_message(task_id, duration, worker_id)).await?;
        }
        TaskStatus::InProgress => {
            tokio::time::sleep(Duration::from_secs(duration)).await;

            set_status(tasks, position, TaskStatus::Done).await;
            send(notifications, done_message(task_id, duration, worker_id)).await?;
        }
    }

    Ok(())
}

// The write lock is held only for the status flip; the queue hands each
// position to at most one worker, so positions never race.
async fn set_status(tasks: &RwLock<TaskSet>, position: usize, status: TaskStatus) {
    let mut tasks = tasks.write().await;
    if let Some(task) = tasks.get_mut(position) {
        task.update_status(status);
    }
}

async fn send(notifications: &mpsc::Sender<String>, message: String) -> Result<(), RunError> {
    notifications
        .send(message)
        .await
        .map_err(|_| RunError::NotificationBusClosed)
}
