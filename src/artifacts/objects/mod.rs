//! Git objects as seen through the plumbing commands
//!
//! - `object_id`: validated hexadecimal object ids
//! - `commit`: commits listed by `git log`
//! - `snapshot`: the blob entries of a commit's tree
//!
//! Nothing here reads `.git` directly; git itself stays the source of truth.

pub mod commit;
pub mod object_id;
pub mod snapshot;

/// Length of a SHA-1 object id in hexadecimal format
pub const SHA1_ID_LENGTH: usize = 40;

/// Length of a SHA-256 object id in hexadecimal format
pub const SHA256_ID_LENGTH: usize = 64;

/// Length of an abbreviated object id
pub const SHORT_ID_LENGTH: usize = 7;
