//! Test fixtures and grid generators for gridmdp development.
//!
//! Provides the standard environment descriptions used across the
//! workspace's tests and benchmarks, plus [`open_field`], a seeded random
//! grid generator.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    corridor, open_field, single_cell, CLASSIC_4X3, CORRIDOR, MALFORMED_TOKEN, SINGLE_CELL,
};
