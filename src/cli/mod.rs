//! CLI module for Ihsan.
//!
//! This module provides the command-line front end:
//! - Argument parsing
//! - Version display
//! - Command handlers over the production adapters
//!
//! # Usage
//!
//! ```ignore
//! use ihsan::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! runtime.block_on(run_cli_command(command))?;
//! ```

pub mod args;
pub mod commands;
pub mod version;

pub use args::{parse_args, CaptureArgs, CliCommand, PlatformArg, USAGE};
pub use commands::run_cli_command;
pub use version::{version_line, VERSION};
