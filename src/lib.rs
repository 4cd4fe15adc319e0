//! diary - Personal journal application
//!
//! Keeps diary entries (title, content, timestamp) in one JSON file per
//! journal, with a command-line front end and an interactive editing shell.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::DiaryError;
