use crate::areas::repository::Repository;
use crate::artifacts::diff::highlight::{HighlightOptions, Highlighter};
use crate::artifacts::objects::commit::CommitInfo;
use crate::artifacts::objects::snapshot::Snapshot;
use crate::artifacts::walk::cursor::Cursor;
use crate::artifacts::walk::menu::{Choice, Menu};
use colored::Colorize;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[;H";

#[derive(Debug, Clone)]
pub struct WalkOptions {
    /// Revision whose history is walked, oldest commit first
    pub head: String,
    /// Program and arguments started by the `r` choice
    pub run: Vec<String>,
    pub highlight: HighlightOptions,
}

/// Everything shown at one stop of the walk
struct Stop {
    message: String,
    snapshot: Snapshot,
    previous: Snapshot,
    changed: Vec<PathBuf>,
}

impl Repository {
    pub async fn walk(&self, opts: &WalkOptions) -> anyhow::Result<()> {
        let commits = self.git().log(&opts.head).await?;

        if !self.git().is_clean().await? {
            anyhow::bail!("git tree isn't clean; run git status and resolve");
        }

        let original_head = self.git().head().await?;
        let mut checked_out = false;

        let result = self.walk_commits(&commits, opts, &mut checked_out).await;

        if checked_out {
            info!(head = %original_head, "restoring original checkout");
            self.git().checkout(&original_head).await?;
        }

        result
    }

    async fn walk_commits(
        &self,
        commits: &[CommitInfo],
        opts: &WalkOptions,
        checked_out: &mut bool,
    ) -> anyhow::Result<()> {
        let highlighter = Highlighter::new(opts.highlight.clone());
        let mut cursor = Cursor::new(commits.len())?;
        let mut pending = VecDeque::new();

        loop {
            let commit = &commits[cursor.position()];
            let previous = (!cursor.is_first()).then(|| &commits[cursor.position() - 1]);
            let stop = self.load_stop(commit, previous).await?;
            let menu = Menu::new(&cursor, stop.changed.len());

            self.print_stop(commit, &cursor, &stop, &menu)?;

            let Some(choice) = self.read_choice(&menu, &mut pending)? else {
                return Ok(());
            };
            debug!(?choice, position = cursor.position(), "walk choice");

            match choice {
                Choice::Quit => return Ok(()),
                Choice::Next => cursor.next(),
                Choice::Previous => cursor.previous(),
                Choice::Run => {
                    self.git().checkout(commit.oid().as_ref()).await?;
                    *checked_out = true;
                    self.run_program(&opts.run, &mut pending).await?;
                }
                Choice::File(index) => {
                    let file = &stop.changed[index];
                    let after = stop
                        .snapshot
                        .get(file)
                        .ok_or_else(|| anyhow::anyhow!("{} vanished", file.display()))?;
                    let rendered = self
                        .render_change(stop.previous.get(file), after, file, &highlighter)
                        .await?;

                    self.page(
                        &rendered,
                        &format!("{} @ {}", file.display(), commit.oid().to_short_oid()),
                    )?;
                }
            }
        }
    }

    async fn load_stop(
        &self,
        commit: &CommitInfo,
        previous: Option<&CommitInfo>,
    ) -> anyhow::Result<Stop> {
        let git = self.git();

        let (message, snapshot, previous) = tokio::try_join!(
            git.message(commit.oid()),
            git.snapshot(commit.oid()),
            async {
                match previous {
                    Some(previous) => git.snapshot(previous.oid()).await,
                    None => Ok(Snapshot::default()),
                }
            }
        )?;
        let changed = snapshot.changed_since(&previous);

        Ok(Stop {
            message,
            snapshot,
            previous,
            changed,
        })
    }

    fn print_stop(
        &self,
        commit: &CommitInfo,
        cursor: &Cursor,
        stop: &Stop,
        menu: &Menu,
    ) -> anyhow::Result<()> {
        let mut writer = self.writer();

        write!(writer, "{CLEAR_SCREEN}")?;
        writeln!(
            writer,
            "{} {}",
            format!("commit {}", commit.oid()).yellow(),
            format!("({}/{})", cursor.position() + 1, cursor.len()).dimmed()
        )?;
        writeln!(writer, "Author: {}", commit.author())?;
        writeln!(writer, "Date:   {}", commit.readable_timestamp())?;
        writeln!(writer)?;
        for message_line in stop.message.lines() {
            writeln!(writer, "    {}", message_line)?;
        }
        writeln!(writer)?;

        if !stop.changed.is_empty() {
            writeln!(writer, "{}", "Changed files:".bold())?;
            for (index, file) in stop.changed.iter().enumerate() {
                writeln!(writer, "  [{}] {}", index + 1, file.display())?;
            }
            writeln!(writer)?;
        }

        write!(writer, "Choice [{}]: ", menu.options())?;
        writer.flush()?;

        Ok(())
    }

    /// Next valid choice, or `None` once input is exhausted
    fn read_choice(
        &self,
        menu: &Menu,
        pending: &mut VecDeque<String>,
    ) -> anyhow::Result<Option<Choice>> {
        loop {
            let Some(token) = pending.pop_front() else {
                let mut line = String::new();
                if self.reader().read_line(&mut line)? == 0 {
                    return Ok(None);
                }
                pending.extend(line.split_whitespace().map(str::to_string));
                continue;
            };

            if let Some(choice) = menu.parse(&token) {
                return Ok(Some(choice));
            }

            debug!(%token, "ignoring invalid choice");
            let mut writer = self.writer();
            write!(writer, "Choice [{}]: ", menu.options())?;
            writer.flush()?;
        }
    }

    async fn run_program(
        &self,
        command: &[String],
        pending: &mut VecDeque<String>,
    ) -> anyhow::Result<()> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| anyhow::anyhow!("No run command configured"))?;

        writeln!(self.writer())?;
        self.writer().flush()?;
        info!(%program, ?args, "running program");

        let status = tokio::process::Command::new(program)
            .args(args)
            .current_dir(self.path())
            .status()
            .await;

        let failure = match status {
            Ok(status) if status.success() => None,
            Ok(status) => Some(format!("{program} exited with {status}")),
            Err(err) => Some(format!("failed to start {program}: {err}")),
        };

        let mut writer = self.writer();
        if let Some(failure) = failure {
            warn!("{failure}");
            writeln!(writer, "{}", failure.red())?;
        }

        if pending.is_empty() {
            write!(writer, "{}", "Press Enter to continue".dimmed())?;
            writer.flush()?;
            drop(writer);

            let mut line = String::new();
            self.reader().read_line(&mut line)?;
        }

        Ok(())
    }
}
