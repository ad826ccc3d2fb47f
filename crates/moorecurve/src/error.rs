//! Error types used across the crate.

use thiserror::Error;

/// Errors produced while constructing or running a generator.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested curve degree is outside the supported range.
    #[error("Invalid degree: {0}")]
    Degree(String),
    /// A working buffer could not be reserved.
    #[error("Allocation failed: {0}")]
    Allocation(String),
    /// The requested solution name or code is unknown.
    #[error("Unknown solution: {0}")]
    Solution(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
