//! Data structures and algorithms
//!
//! - `core`: pager plumbing
//! - `diff`: the diff engine and highlight renderer
//! - `objects`: object ids, commits and tree snapshots
//! - `walk`: cursor and menu of the interactive walk

pub mod core;
pub mod diff;
pub mod objects;
pub mod walk;
