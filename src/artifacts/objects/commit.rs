//! Commits listed on a branch
//!
//! `git log` is asked for one record per commit, fields separated by NUL:
//!
//! ```text
//! <oid>\0<author name> <<author email>>\0<author date, strict ISO 8601>
//! ```

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use chrono::{DateTime, FixedOffset};
use derive_new::new;

/// Pretty format understood by [`CommitInfo::parse`]
pub const LOG_FORMAT: &str = "%H%x00%an <%ae>%x00%aI";

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct CommitInfo {
    oid: ObjectId,
    author: String,
    timestamp: DateTime<FixedOffset>,
}

impl CommitInfo {
    pub fn parse(line: &str) -> anyhow::Result<Self> {
        let mut fields = line.split('\0');
        let (Some(oid), Some(author), Some(date), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            anyhow::bail!("Malformed log record: {line:?}");
        };

        Ok(Self {
            oid: ObjectId::try_parse(oid)?,
            author: author.to_string(),
            timestamp: DateTime::parse_from_rfc3339(date.trim())
                .with_context(|| format!("Invalid commit date: {date}"))?,
        })
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }
}
