//! Git plumbing
//!
//! Every repository query goes through the `git` binary. Commands are run
//! with `tokio::process` so independent lookups can be awaited together.

use crate::artifacts::diff::content::Content;
use crate::artifacts::objects::commit::{CommitInfo, LOG_FORMAT};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::snapshot::Snapshot;
use anyhow::Context;
use derive_new::new;
use std::path::Path;
use std::process::Output;
use tokio::process::Command;
use tracing::debug;

#[derive(Debug, Clone, new)]
pub struct Git {
    workdir: Box<Path>,
}

impl Git {
    async fn output(&self, args: &[&str]) -> anyhow::Result<Output> {
        debug!(?args, "running git");

        Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .kill_on_drop(true)
            .output()
            .await
            .with_context(|| format!("Failed to run git {}", args.join(" ")))
    }

    async fn run(&self, args: &[&str]) -> anyhow::Result<Vec<u8>> {
        let output = self.output(args).await?;

        if !output.status.success() {
            anyhow::bail!(
                "git {} failed: {}\n{}",
                args.join(" "),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim_end()
            );
        }

        Ok(output.stdout)
    }

    async fn run_text(&self, args: &[&str]) -> anyhow::Result<String> {
        let stdout = self.run(args).await?;
        String::from_utf8(stdout).with_context(|| format!("git {} printed invalid UTF-8", args[0]))
    }

    /// True when there is nothing to commit and nothing untracked
    pub async fn is_clean(&self) -> anyhow::Result<bool> {
        Ok(self.run(&["status", "--porcelain"]).await?.is_empty())
    }

    /// Commits reachable from `rev`, oldest first
    pub async fn log(&self, rev: &str) -> anyhow::Result<Vec<CommitInfo>> {
        let format = format!("--pretty=format:{LOG_FORMAT}");
        let stdout = self
            .run_text(&["log", "--reverse", &format, rev, "--"])
            .await?;

        stdout
            .lines()
            .filter(|line| !line.is_empty())
            .map(CommitInfo::parse)
            .collect()
    }

    pub async fn message(&self, oid: &ObjectId) -> anyhow::Result<String> {
        let stdout = self
            .run(&["show", "-s", "--pretty=format:%B", oid.as_ref()])
            .await?;

        Ok(String::from_utf8_lossy(&stdout).trim().to_string())
    }

    pub async fn snapshot(&self, oid: &ObjectId) -> anyhow::Result<Snapshot> {
        let stdout = self.run(&["ls-tree", "-r", "-z", oid.as_ref()]).await?;
        Snapshot::parse(&String::from_utf8_lossy(&stdout))
    }

    pub async fn blob(&self, oid: &ObjectId) -> anyhow::Result<Content> {
        let stdout = self.run(&["cat-file", "blob", oid.as_ref()]).await?;
        Ok(Content::from(stdout))
    }

    /// Resolve a revision to the commit it names
    pub async fn resolve(&self, rev: &str) -> anyhow::Result<ObjectId> {
        let spec = format!("{rev}^{{commit}}");
        let stdout = self
            .run_text(&["rev-parse", "--verify", "--quiet", &spec])
            .await
            .with_context(|| format!("Unknown revision: {rev}"))?;

        ObjectId::try_parse(stdout)
    }

    /// First parent of `rev`, or `None` for a root commit
    pub async fn parent(&self, rev: &ObjectId) -> anyhow::Result<Option<ObjectId>> {
        let spec = format!("{rev}^1");
        let output = self
            .output(&["rev-parse", "--verify", "--quiet", &spec])
            .await?;

        if !output.status.success() {
            return Ok(None);
        }

        ObjectId::try_parse(String::from_utf8_lossy(&output.stdout)).map(Some)
    }

    /// Where HEAD points: the branch name when on a branch, else the commit
    pub async fn head(&self) -> anyhow::Result<String> {
        let output = self
            .output(&["symbolic-ref", "--quiet", "--short", "HEAD"])
            .await?;

        if output.status.success() {
            return Ok(String::from_utf8_lossy(&output.stdout).trim().to_string());
        }

        Ok(self.resolve("HEAD").await?.to_string())
    }

    pub async fn checkout(&self, rev: &str) -> anyhow::Result<()> {
        debug!(rev, "checking out");
        self.run(&["checkout", "--quiet", rev]).await?;
        Ok(())
    }
}
