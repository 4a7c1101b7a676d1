//! # taskfan
//!
//! A bounded-concurrency task runner: given an ordered collection of tasks,
//! each carrying a status and a simulated processing duration, taskfan
//! advances every not-yet-finished task through a fixed lifecycle using a
//! limited pool of concurrent workers, and reports each state transition as
//! an ordered stream of human-readable events.
//!
//! ## Architecture Overview
//!
//! - **[`task`]**: The data model: tasks, the three-state lifecycle, and the
//!   ordered set a run operates on.
//! - **[`engine`]**: The concurrent dispatch-and-status engine: the bounded
//!   work queue, the worker pool, and the notification bus with its
//!   close-after-all-writers shutdown sequence.
//! - **[`cli`]**: The I/O wrappers around the engine: argument parsing, JSON
//!   task file handling, colorized table rendering, and configuration
//!   discovery.
//!
//! ## Guarantees
//!
//! - Each pending identifier is delivered to exactly one worker, exactly once.
//! - For a single task, the "is being processed" event (when emitted) always
//!   precedes its "has been done" event, and the done event never appears
//!   before the status mutation has taken effect. Cross-task interleaving is
//!   unordered.
//! - A run over a set with nothing pending fails fast, launching no workers
//!   and emitting no events.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use taskfan::engine::{Runner, RunnerConfig};
//! use taskfan::task::{Task, TaskSet};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut tasks = TaskSet::new(vec![
//!         Task::new(1, "ship the release", 3),
//!         Task::new(2, "update the changelog", 1),
//!     ]);
//!
//!     let runner = Runner::new(RunnerConfig { workers: 2 });
//!     runner
//!         .run(&mut tasks, &mut |message: String| println!("{message}"))
//!         .await?;
//!
//!     assert!(tasks.iter().all(Task::is_done));
//!     Ok(())
//! }
//! ```

/// Task data model.
///
/// The task entity with its identity, description, duration and status, the
/// forward-only lifecycle, and the ordered task set with its pending filter
/// and identity index.
pub mod task;

/// Concurrent dispatch-and-status engine.
///
/// Work queue population, worker pool, per-task state machine, and the
/// notification bus shutdown sequencing.
pub mod engine;

/// CLI wrappers: argument parsing, task file I/O, rendering, configuration.
pub mod cli;

// Re-export the types most callers need
pub use engine::{NotificationSink, RunError, Runner, RunnerConfig};
pub use task::{Task, TaskId, TaskSet, TaskStatus};
