//! Porcelain commands
//!
//! ## Commands
//!
//! - `show`: highlighted diff of one file as changed by one commit
//! - `walk`: interactive commit-by-commit traversal of a branch

pub mod show;
pub mod walk;
