//! Command implementations
//!
//! - `plumbing`: building blocks usable without a commit history (highlight)
//! - `porcelain`: user-facing commands over a repository's history (show, walk)
//!
//! Each command is an `impl Repository` block, so commands share the
//! repository's writer, reader and pager.

pub mod plumbing;
pub mod porcelain;
