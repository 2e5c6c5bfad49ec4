//! Repository access
//!
//! - `git`: thin async wrappers around the git plumbing commands
//! - `repository`: the working directory, its I/O handles and the pager

pub mod git;
pub mod repository;
