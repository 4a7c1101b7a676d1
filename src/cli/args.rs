//! Command line argument parsing
//!
//! Subcommands:
//! - `list`: print the task table, optionally limited to the first N tasks
//! - `filter`: print only the tasks in a given status
//! - `process`: run every not-yet-done task through the worker pool

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::task::TaskStatus;

#[derive(Debug, Parser)]
#[command(name = "taskfan")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A bounded-concurrency task runner over a JSON task list")]
#[command(arg_required_else_help = true)]
pub struct Args {
    /// Path to the JSON task file
    #[arg(short = 'f', long = "file", global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the task table
    List {
        /// Print at most this many tasks
        #[arg(short = 'n', long = "limit")]
        limit: Option<usize>,
    },
    /// Print the tasks in a specific status
    Filter {
        /// Status to filter on
        #[arg(short = 's', long = "status", value_enum)]
        status: StatusArg,
    },
    /// Process every task that is not yet done
    Process {
        /// Number of concurrent workers
        #[arg(short = 'w', long = "workers")]
        workers: Option<usize>,
        /// Write the mutated task set back to the task file afterwards
        #[arg(long = "save")]
        save: bool,
    },
}

/// CLI-facing status values, kept separate from the data model so clap's
/// kebab-case convention does not leak into the JSON wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    NotStarted,
    InProgress,
    Done,
}

impl StatusArg {
    pub fn to_status(self) -> TaskStatus {
        match self {
            StatusArg::NotStarted => TaskStatus::NotStarted,
            StatusArg::InProgress => TaskStatus::InProgress,
            StatusArg::Done => TaskStatus::Done,
        }
    }
}
