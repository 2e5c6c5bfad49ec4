//! Blob entries of a commit's tree
//!
//! Built from `git ls-tree -r -z <commit>`, whose records look like:
//!
//! ```text
//! <mode> SP <type> SP <oid> TAB <path> NUL
//! ```
//!
//! Only blobs are kept; submodule links and (with `-r`) trees are skipped.

use crate::artifacts::objects::object_id::ObjectId;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const LS_TREE_REGEX: &str = r"^(?s)(?<mode>[0-7]{6}) (?<kind>[a-z]+) (?<oid>[0-9a-fA-F]+)\t(?<path>.+)$";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    blobs: BTreeMap<PathBuf, ObjectId>,
}

impl Snapshot {
    pub fn parse(ls_tree: &str) -> anyhow::Result<Self> {
        let re = regex::Regex::new(LS_TREE_REGEX)?;
        let mut blobs = BTreeMap::new();

        for record in ls_tree.split('\0').filter(|r| !r.trim().is_empty()) {
            let caps = re
                .captures(record.trim_start_matches('\n'))
                .ok_or_else(|| anyhow::anyhow!("Malformed ls-tree record: {record:?}"))?;

            if &caps["kind"] != "blob" {
                continue;
            }

            blobs.insert(
                PathBuf::from(&caps["path"]),
                ObjectId::try_parse(&caps["oid"])?,
            );
        }

        Ok(Self { blobs })
    }

    pub fn get(&self, path: &Path) -> Option<&ObjectId> {
        self.blobs.get(path)
    }

    /// Paths added or modified relative to `previous`, in path order
    ///
    /// Deleted paths are not reported.
    pub fn changed_since(&self, previous: &Snapshot) -> Vec<PathBuf> {
        self.blobs
            .iter()
            .filter(|(path, oid)| previous.get(path) != Some(*oid))
            .map(|(path, _)| path.clone())
            .collect()
    }
}

impl FromIterator<(PathBuf, ObjectId)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (PathBuf, ObjectId)>>(iter: I) -> Self {
        Self {
            blobs: iter.into_iter().collect(),
        }
    }
}
