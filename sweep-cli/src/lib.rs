//! Sweep CLI library
//!
//! This library provides the command-line interface for the sweep
//! sequence algorithms: argument parsing, configuration files, job file
//! loading and result formatting.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use commands::Cli;
pub use error::{CliError, CliResult};
