//! Core types for the gridmdp workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the environment model and the solver:
//! cell classification, compass directions, the drift transition model,
//! and the error type for environment construction.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod direction;
pub mod drift;
pub mod error;

pub use cell::Cell;
pub use direction::Direction;
pub use drift::DriftModel;
pub use error::GridError;
