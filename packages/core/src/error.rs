//! Directory resolution error types
//!
//! Resolution has a single failure kind: the platform could not provide a
//! base directory. The OS error code captured at that moment travels with it.

use std::io;

use thiserror::Error;

use crate::category::Category;

/// Errors that can occur while resolving application directories
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirsError {
    /// The platform yielded no base directory for the category
    #[error("Could not resolve the {category} directory (os error {code})")]
    Unresolved { category: Category, code: i32 },

    /// A category name did not match any known category
    #[error("Unknown directory category: {0}")]
    UnknownCategory(String),
}

impl DirsError {
    /// The OS error captured when resolution failed, if any
    pub fn os_error(&self) -> Option<io::Error> {
        match self {
            DirsError::Unresolved { code, .. } => Some(io::Error::from_raw_os_error(*code)),
            DirsError::UnknownCategory(_) => None,
        }
    }

    /// The category that failed to resolve
    pub fn category(&self) -> Option<Category> {
        match self {
            DirsError::Unresolved { category, .. } => Some(*category),
            DirsError::UnknownCategory(_) => None,
        }
    }
}

pub type Result<T, E = DirsError> = std::result::Result<T, E>;
