use crate::areas::repository::Repository;
use crate::artifacts::diff::content::{Content, is_binary};
use crate::artifacts::diff::highlight::{HighlightOptions, Highlighter};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::snapshot::Snapshot;
use std::path::{Component, Path, PathBuf};

impl Repository {
    pub async fn show(
        &self,
        rev: &str,
        file: &Path,
        opts: &HighlightOptions,
    ) -> anyhow::Result<()> {
        let git = self.git();
        let file = normalize(file);

        let commit = git.resolve(rev).await?;
        let parent = git.parent(&commit).await?;

        let (snapshot, previous) = tokio::try_join!(git.snapshot(&commit), async {
            match &parent {
                Some(parent) => git.snapshot(parent).await,
                None => Ok(Snapshot::default()),
            }
        })?;

        let after = snapshot
            .get(&file)
            .ok_or_else(|| anyhow::anyhow!("{} is not a file at {}", file.display(), rev))?;

        let rendered = self
            .render_change(
                previous.get(&file),
                after,
                &file,
                &Highlighter::new(opts.clone()),
            )
            .await?;

        self.page(
            &rendered,
            &format!("{} @ {}", file.display(), commit.to_short_oid()),
        )
    }

    /// Render the after side of one file change, fetching both blobs at once
    ///
    /// A file absent on the before side is diffed against empty content.
    pub(crate) async fn render_change(
        &self,
        before: Option<&ObjectId>,
        after: &ObjectId,
        file: &Path,
        highlighter: &Highlighter,
    ) -> anyhow::Result<Vec<u8>> {
        let git = self.git();

        let (before, after) = tokio::try_join!(
            async {
                match before {
                    Some(oid) => git.blob(oid).await,
                    None => Ok(Content::new()),
                }
            },
            git.blob(after)
        )?;

        if is_binary(&before) || is_binary(&after) {
            return Ok(format!("Binary file {} differs\n", file.display()).into_bytes());
        }

        Ok(highlighter.render(&before, &after))
    }
}

/// Tree paths never start with `./`
fn normalize(file: &Path) -> PathBuf {
    file.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}
