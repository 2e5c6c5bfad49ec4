use crate::common::command::{repository_dir, repository_with_history, run_dt_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn show_file_missing_at_revision_fails(
    repository_with_history: (TempDir, Vec<String>),
) -> Result<(), Box<dyn std::error::Error>> {
    let (repository_dir, _) = repository_with_history;

    // new.txt only appears in the second commit
    run_dt_command(repository_dir.path(), &["show", "HEAD~1", "new.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("new.txt is not a file at HEAD~1"));

    Ok(())
}

#[rstest]
fn show_unknown_revision_fails(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_dt_command(repository_dir.path(), &["show", "no-such-branch", "notes.txt"])
        .assert()
        .failure();

    Ok(())
}
