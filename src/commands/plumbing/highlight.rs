use crate::areas::repository::Repository;
use crate::artifacts::diff::content::{Content, is_binary};
use crate::artifacts::diff::highlight::{HighlightOptions, Highlighter};
use anyhow::Context;
use std::io::Write;
use std::path::Path;

impl Repository {
    pub async fn highlight_files(
        &self,
        before: &Path,
        after: &Path,
        opts: &HighlightOptions,
    ) -> anyhow::Result<()> {
        let (before_content, after_content) =
            tokio::try_join!(self.read_file(before), self.read_file(after))?;

        if is_binary(&before_content) || is_binary(&after_content) {
            writeln!(self.writer(), "Binary file {} differs", after.display())?;
            return Ok(());
        }

        let rendered = Highlighter::new(opts.clone()).render(&before_content, &after_content);
        self.page(&rendered, &after.display().to_string())
    }

    async fn read_file(&self, file: &Path) -> anyhow::Result<Content> {
        let path = self.path().join(file);
        let content = tokio::fs::read(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Ok(Content::from(content))
    }
}
