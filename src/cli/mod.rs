//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Command implementations.
pub mod commands;

/// Exit code mapping for fatal errors.
pub mod exit;

pub use args::{Args, normalize_args};
pub use exit::exit_code_for;
