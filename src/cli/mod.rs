//! CLI-specific functionality: argument parsing, task file I/O, tabular
//! rendering, and configuration discovery. Everything here is a thin wrapper
//! around the engine's inputs and outputs.

pub mod args;
pub mod config;
pub mod loader;
pub mod render;

pub use args::{Args, Commands, StatusArg};
pub use config::{CliConfig, ConfigDiscovery};
pub use loader::{LoadError, load_tasks, save_tasks};
