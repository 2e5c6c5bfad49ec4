//! State of the interactive commit walk
//!
//! - `cursor`: position within the commit list
//! - `menu`: the options offered at each stop and parsing of the user's pick

pub mod cursor;
pub mod menu;
