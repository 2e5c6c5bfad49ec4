use crate::common::command::{commit_all, repository_dir, repository_with_history, run_dt_command};
use crate::common::file::write_bytes;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::edited_line("HEAD", "notes.txt", "alpha\nbeta{+!+}\ngamma\n")]
#[case::added_file("HEAD", "new.txt", "{+fresh+}\n")]
#[case::root_commit("HEAD~1", "notes.txt", "{+alpha+}\n{+beta+}\n{+gamma+}\n")]
#[case::dot_relative_path("HEAD", "./notes.txt", "alpha\nbeta{+!+}\ngamma\n")]
fn show_file_changed_in_commit(
    repository_with_history: (TempDir, Vec<String>),
    #[case] rev: &str,
    #[case] path: &str,
    #[case] expected: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let (repository_dir, _) = repository_with_history;

    let output = run_dt_command(repository_dir.path(), &["show", rev, path]).output()?;

    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8(output.stdout)?, expected);

    Ok(())
}

#[rstest]
fn show_accepts_full_commit_ids(
    repository_with_history: (TempDir, Vec<String>),
) -> Result<(), Box<dyn std::error::Error>> {
    let (repository_dir, commits) = repository_with_history;

    run_dt_command(repository_dir.path(), &["show", &commits[1], "new.txt"])
        .assert()
        .success()
        .stdout("{+fresh+}\n");

    Ok(())
}

#[rstest]
fn show_binary_file_reports_difference(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_bytes(&repository_dir.path().join("image.png"), b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR");
    commit_all(repository_dir.path(), "Add image");

    run_dt_command(repository_dir.path(), &["show", "HEAD", "image.png"])
        .assert()
        .success()
        .stdout("Binary file image.png differs\n");

    Ok(())
}
