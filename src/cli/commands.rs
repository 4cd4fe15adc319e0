//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "diary")]
#[command(about = "Personal journal kept in a single JSON file", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// List entries, newest first
    List {
        /// Show at most this many entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Print one entry
    Show {
        /// List position (1 = newest) or entry id
        reference: String,
    },

    /// Write a new entry
    Add {
        /// Entry title
        #[arg(short, long)]
        title: String,

        /// Entry text (opens your editor when omitted)
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Update an existing entry
    Edit {
        /// List position (1 = newest) or entry id
        reference: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New text (opens your editor when neither --title nor --content is given)
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Delete an entry
    Delete {
        /// List position (1 = newest) or entry id
        reference: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Interactive editing session (the default)
    Shell,
}
