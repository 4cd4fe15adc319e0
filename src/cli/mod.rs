//! CLI layer - Command-line interface

pub mod commands;
pub mod output;
pub mod shell;

pub use commands::{Cli, Commands};
pub use output::{format_entry, format_entry_list};
pub use shell::Shell;
