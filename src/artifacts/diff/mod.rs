//! Diff engine
//!
//! - `change`: edit paths and the change blocks they compress into
//! - `equality`: element equality strategies (identity, space-insensitive)
//! - `myers`: trace-keeping Myers search for short inputs
//! - `bisect`: linear-space Myers search for long inputs
//! - `sequence`: the entry point choosing between the two
//! - `granularity`: coalescing of changes split by tiny unchanged runs
//! - `content`: file contents, line splitting and binary sniffing
//! - `highlight`: rendering of the after side with marked changes

pub mod bisect;
pub mod change;
pub mod content;
pub mod equality;
pub mod granularity;
pub mod highlight;
pub mod myers;
pub mod sequence;
