//! Output utilities for CLI commands
//!
//! Centralized error formatting for resolution failures.

pub mod errors;

pub use errors::show_error;
