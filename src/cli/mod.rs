//! Command-line interface for the knight's tour search.
//! This module is not part of the public library API.

pub mod args;
pub mod commands;

pub use args::KnightsTour;
