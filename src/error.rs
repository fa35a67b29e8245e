//! Errors surfaced by the `bst-demo` driver. The tree itself has no failure modes: missing
//! values are `None` and duplicates are ignored.

use std::io;

use thiserror::Error;

/// Errors the demo driver reports to the user.
#[derive(Error, Debug)]
pub enum DemoError {
    /// The random value range is empty.
    #[error("invalid value range: min {min} is greater than max {max}")]
    InvalidRange {
        /// Requested lower bound.
        min: i32,
        /// Requested upper bound.
        max: i32,
    },

    /// Writing the report failed.
    #[error("failed to write demo output: {0}")]
    Output(#[from] io::Error),
}

/// Result type for demo operations.
pub type DemoResult<T> = Result<T, DemoError>;

impl DemoError {
    /// Process exit code for this error, following `sysexits.h`.
    pub fn exit_code(&self) -> i32 {
        match self {
            DemoError::InvalidRange { .. } => 64,
            DemoError::Output(_) => 74,
        }
    }
}
