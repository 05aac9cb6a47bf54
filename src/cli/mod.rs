//! Command-line interface
//!
//! This module contains the CLI commands and argument parsing
//! for the key format converter.

pub mod commands;

pub use commands::{Command, Opt};
