//! dt: walk the commits of a branch and show what each one changed
//!
//! - `areas`: the repository and the git plumbing it drives
//! - `artifacts`: diff engine, object ids, commit snapshots, walk state
//! - `commands`: the user-facing commands built on top of them

pub mod areas;
pub mod artifacts;
pub mod commands;

use clap::ValueEnum;

/// Marker tokens used to wrap highlighted spans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MarkerStyle {
    /// Bold bright green terminal escapes
    #[default]
    Ansi,
    /// `{+` and `+}`, for surfaces without escape support
    Bracket,
}
