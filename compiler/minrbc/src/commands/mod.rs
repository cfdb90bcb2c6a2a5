//! Command handlers for the minrb CLI.

mod run;

pub use run::{execute, parse_run_options, run_file, RunError, RunOptions, UsageError};
