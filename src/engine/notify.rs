//! Notification formatting and delivery.
//!
//! Workers publish fully formatted text events; the runner drains them in
//! arrival order to a single [`NotificationSink`]. Ownership of a message
//! passes to the sink, the engine never retains one.

use crate::task::TaskId;

/// Consumer of the progress events drained from the notification bus.
///
/// A blanket impl covers closures, so `&mut |message: String| ...` works both
/// for printing and for collecting into a buffer in tests.
pub trait NotificationSink {
    fn deliver(&mut self, message: String);
}

impl<F: FnMut(String)> NotificationSink for F {
    fn deliver(&mut self, message: String) {
        self(message)
    }
}

/// Event emitted once when a worker picks up a task that had not started yet.
pub fn processing_message(id: TaskId, worker_id: usize) -> String {
    format!("Task ({id}) is being processed by worker {worker_id}")
}

/// Event emitted once per processed task, after its status reached done.
pub fn done_message(id: TaskId, duration: u64, worker_id: usize) -> String {
    format!("Task ({id}) has been done in {duration}(s) by worker {worker_id}")
}
