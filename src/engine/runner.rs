use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{Mutex, RwLock, mpsc};
use tokio::task::JoinSet;
use tracing::{debug, error, info};

use super::notify::NotificationSink;
use super::worker::worker_loop;
use crate::task::{TaskId, TaskSet};

/// Default number of concurrent workers.
pub const DEFAULT_WORKERS: usize = 5;

/// Errors raised by a processing run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RunError {
    /// No task in the set needs processing. Raised before any worker is
    /// launched or any notification produced.
    #[error("no tasks to process")]
    NoPendingTasks,

    /// A queued identifier did not resolve to any task. The queue is built
    /// from the same set it is resolved against, so this indicates a
    /// population bug and aborts the worker rather than being skipped.
    #[error("task ({id}) was queued but does not exist in the task set")]
    UnknownTask { id: TaskId },

    /// The notification bus went away while a worker still had events to
    /// publish.
    #[error("notification bus closed while a worker was still producing events")]
    NotificationBusClosed,

    /// A worker terminated abnormally instead of returning.
    #[error("a worker terminated abnormally")]
    WorkerPanicked,
}

/// Configuration for a processing run.
#[derive(Clone, Debug)]
pub struct RunnerConfig {
    /// Number of concurrent workers. Values below 1 are clamped to 1.
    pub workers: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
        }
    }
}

/// Coordinates one processing run end-to-end.
///
/// A run loads every pending task identifier into a bounded work queue,
/// closes it, launches the worker pool against the shared task set, and
/// drains the notification bus to the caller's sink until every worker has
/// terminated. The task set is handed back fully mutated, including partial
/// mutation when the run fails midway.
pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Run the engine over `tasks`, forwarding each notification to `sink`
    /// in arrival order. Returns only once the bus is drained and closed.
    ///
    /// Fails fast with [`RunError::NoPendingTasks`] when nothing needs
    /// processing; deciding what that means (exit code, message) is the
    /// caller's business.
    pub async fn run<S>(&self, tasks: &mut TaskSet, sink: &mut S) -> Result<(), RunError>
    where
        S: NotificationSink + ?Sized,
    {
        let pending = tasks.pending_ids();
        if pending.is_empty() {
            return Err(RunError::NoPendingTasks);
        }

        let workers = self.config.workers.max(1);
        info!(
            "processing {} pending tasks with {} workers",
            pending.len(),
            workers
        );

        // Identity lookups are resolved against this map for the whole run;
        // it is built once, before any worker starts.
        let index = Arc::new(tasks.index_by_id());
        let shared = Arc::new(RwLock::new(std::mem::take(tasks)));

        // Work queue: capacity matches the pending set, loaded in full, then
        // closed by dropping the sender. Nothing is ever enqueued afterwards.
        let (work_tx, work_rx) = mpsc::channel(pending.len());
        for id in pending {
            // The receiver is alive and capacity covers every id.
            let _ = work_tx.send(id).await;
        }
        drop(work_tx);
        let work_rx = Arc::new(Mutex::new(work_rx));

        // Notification bus: minimal buffering, so worker sends block until
        // the drain loop below reads them.
        let (notify_tx, mut notify_rx) = mpsc::channel::<String>(1);

        let mut pool = JoinSet::new();
        for worker_id in 1..=workers {
            pool.spawn(worker_loop(
                worker_id,
                Arc::clone(&work_rx),
                Arc::clone(&shared),
                Arc::clone(&index),
                notify_tx.clone(),
            ));
        }
        drop(notify_tx);

        // The bus closes only once every worker, and with it every sender
        // clone, is gone. The supervisor joins them all and keeps the first
        // failure.
        let supervisor = tokio::spawn(async move {
            let mut failure = None;
            while let Some(joined) = pool.join_next().await {
                match joined {
                    Ok(Ok(())) => {}
                    Ok(Err(run_error)) => {
                        error!("worker aborted: {}", run_error);
                        if failure.is_none() {
                            failure = Some(run_error);
                        }
                    }
                    Err(join_error) => {
                        error!("worker panicked: {}", join_error);
                        if failure.is_none() {
                            failure = Some(RunError::WorkerPanicked);
                        }
                    }
                }
            }
            failure
        });

        while let Some(message) = notify_rx.recv().await {
            sink.deliver(message);
        }
        debug!("notification bus drained and closed");

        let failure = supervisor.await.map_err(|_| RunError::WorkerPanicked)?;

        // Every worker has joined, so this is the last live handle.
        *tasks = match Arc::try_unwrap(shared) {
            Ok(lock) => lock.into_inner(),
            Err(arc) => arc.read().await.clone(),
        };

        match failure {
            Some(run_error) => Err(run_error),
            None => Ok(()),
        }
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new(RunnerConfig::default())
    }
}
