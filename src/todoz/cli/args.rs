use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "todoz", bin_name = "todoz", version)]
#[command(about = "A small todo tracker for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding todoz data (defaults to the platform data dir)
    #[arg(long, global = true, env = "TODOZ_HOME", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    /// Highest priority first
    Priority,
    /// Soonest deadline first, undated last
    Deadline,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List todos
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Only open todos
        #[arg(long, conflicts_with = "done")]
        open: bool,

        /// Only completed todos
        #[arg(long)]
        done: bool,
    },

    /// Add a new todo
    #[command(alias = "n", display_order = 2)]
    Add {
        /// Name words (joined with spaces, 2 to 32 characters)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// Priority from 1 (low) to 5 (high)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
        priority: Option<u8>,

        /// Deadline, e.g. 2025-03-01, 2025-03-01T18:30 or RFC 3339
        #[arg(short, long)]
        deadline: Option<String>,
    },

    /// Edit a todo's name, priority or deadline
    #[command(alias = "e", display_order = 3)]
    Edit {
        /// Index or id prefix of the todo
        index: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New priority from 1 (low) to 5 (high)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
        priority: Option<u8>,

        /// New deadline
        #[arg(short, long, conflicts_with = "no_deadline")]
        deadline: Option<String>,

        /// Remove the deadline
        #[arg(long)]
        no_deadline: bool,
    },

    /// Mark todos as completed
    #[command(display_order = 4)]
    Done {
        /// Indexes of the todos (e.g. 1 3 5, 2-4)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Mark todos as not completed
    #[command(display_order = 5)]
    Undone {
        /// Indexes of the todos (e.g. 1 3 5, 2-4)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Delete todos
    #[command(alias = "rm", display_order = 6)]
    Delete {
        /// Indexes of the todos (e.g. 1 3 5, 2-4)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Delete all completed todos
    #[command(display_order = 7)]
    Clear,

    /// Re-order the list
    #[command(display_order = 8)]
    Sort {
        #[arg(value_enum)]
        by: SortArg,
    },

    /// Show or set your display name
    #[command(display_order = 9)]
    User {
        /// New display name (prints the current one if omitted)
        name: Option<String>,
    },

    /// Check whether a name would be accepted
    #[command(display_order = 10)]
    CheckName {
        /// Candidate name
        #[arg(num_args = 0..)]
        name: Vec<String>,
    },

    /// Get or set configuration
    #[command(display_order = 11)]
    Config {
        /// Configuration key (default-priority, date-format)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
