//! Plumbing commands
//!
//! ## Commands
//!
//! - `highlight`: render the highlighted diff of two files on disk

pub mod highlight;
