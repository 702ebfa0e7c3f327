//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// Attempted to create an arena with no cells.
    Empty,
    /// `publish()` was called without a preceding `begin_sweep()`.
    NoSweepInProgress,
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "arena must hold at least one cell"),
            Self::NoSweepInProgress => write!(f, "publish called with no sweep in progress"),
        }
    }
}

impl Error for ArenaError {}
