//! Colorized tabular task listing.
//!
//! Prints tasks exactly as loaded, one row per task; the only interpretation
//! applied is the status color.

use colored::{ColoredString, Colorize};

use crate::task::{Task, TaskStatus};

/// Print a header and one aligned row per task.
pub fn print_tasks<'a, I>(tasks: I)
where
    I: IntoIterator<Item = &'a Task>,
{
    println!(
        "{:<8} {:<32} {:<10} {}",
        "ID", "Description", "Duration", "Status"
    );
    for task in tasks {
        println!(
            "{:<8} {:<32} {:<10} {}",
            task.id,
            task.description,
            format!("{}s", task.duration),
            colored_status(task.status)
        );
    }
}

fn colored_status(status: TaskStatus) -> ColoredString {
    match status {
        TaskStatus::NotStarted => status.as_str().red().bold(),
        TaskStatus::InProgress => status.as_str().yellow().bold(),
        TaskStatus::Done => status.as_str().green().bold(),
    }
}
