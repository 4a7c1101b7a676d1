//! Concurrent dispatch-and-status engine.
//!
//! Feeds pending task identifiers through a bounded, pre-loaded work queue to
//! a fixed pool of workers, advances each task's lifecycle in the shared task
//! set, and serializes progress events back to a single consumer. The bus is
//! closed only after every worker has terminated, so the consumer sees a
//! clean end-of-stream.

pub mod notify;
pub mod runner;
mod worker;


pub use notify::{NotificationSink, done_message, processing_message};
pub use runner::{DEFAULT_WORKERS, RunError, Runner, RunnerConfig};
