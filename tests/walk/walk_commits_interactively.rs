use crate::common::command::{commit_all, repository_dir, repository_with_history, run_dt_command};
use crate::common::file::write_generated_files;
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn walk_shows_first_commit_and_quits(
    repository_with_history: (TempDir, Vec<String>),
) -> Result<(), Box<dyn std::error::Error>> {
    let (repository_dir, commits) = repository_with_history;

    run_dt_command(repository_dir.path(), &["walk", "main"])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("commit {}", commits[0])))
        .stdout(predicate::str::contains("(1/2)"))
        .stdout(predicate::str::contains("Author: Fake User <fake@example.com>"))
        .stdout(predicate::str::contains("    First commit"))
        .stdout(predicate::str::contains("Changed files:"))
        .stdout(predicate::str::contains("  [1] notes.txt"))
        .stdout(predicate::str::contains("Choice [qrn1]: "))
        .stdout(predicate::str::contains("Second commit").not());

    Ok(())
}

#[rstest]
fn walk_moves_forward_and_views_a_file(
    repository_with_history: (TempDir, Vec<String>),
) -> Result<(), Box<dyn std::error::Error>> {
    let (repository_dir, commits) = repository_with_history;

    run_dt_command(repository_dir.path(), &["walk", "main"])
        .write_stdin("n\n2\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("commit {}", commits[1])))
        .stdout(predicate::str::contains("(2/2)"))
        .stdout(predicate::str::contains("    Second commit"))
        .stdout(predicate::str::contains("    With a body line"))
        .stdout(predicate::str::contains("  [1] new.txt"))
        .stdout(predicate::str::contains("  [2] notes.txt"))
        .stdout(predicate::str::contains("Choice [qrp1-2]: "))
        .stdout(predicate::str::contains("alpha\nbeta{+!+}\ngamma\n"));

    Ok(())
}

#[rstest]
fn walk_accepts_several_choices_on_one_line(
    repository_with_history: (TempDir, Vec<String>),
) -> Result<(), Box<dyn std::error::Error>> {
    let (repository_dir, _) = repository_with_history;

    let output = run_dt_command(repository_dir.path(), &["walk", "main"])
        .write_stdin("n p q\n")
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout.matches("(1/2)").count(), 2);
    assert_eq!(stdout.matches("(2/2)").count(), 1);

    Ok(())
}

#[rstest]
fn walk_ignores_invalid_choices(
    repository_with_history: (TempDir, Vec<String>),
) -> Result<(), Box<dyn std::error::Error>> {
    let (repository_dir, _) = repository_with_history;

    // "p" is not offered at the first commit and there is no file 9
    let output = run_dt_command(repository_dir.path(), &["walk", "main"])
        .write_stdin("p\n9\nzz\nq\n")
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout.matches("Choice [qrn1]: ").count(), 4);
    assert_eq!(stdout.matches("(1/2)").count(), 1);

    Ok(())
}

#[rstest]
fn walk_ends_when_input_is_exhausted(
    repository_with_history: (TempDir, Vec<String>),
) -> Result<(), Box<dyn std::error::Error>> {
    let (repository_dir, _) = repository_with_history;

    run_dt_command(repository_dir.path(), &["walk", "main"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("    First commit"));

    Ok(())
}

#[rstest]
fn walk_selects_files_past_nine(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let files = write_generated_files(repository_dir.path(), 11);
    commit_all(repository_dir.path(), "Eleven files");

    let eleventh = files[10].content.trim_end();

    run_dt_command(repository_dir.path(), &["walk", "HEAD"])
        .write_stdin("11\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Choice [qr1-11]: "))
        .stdout(predicate::str::contains("  [11] file11.txt"))
        .stdout(predicate::str::contains(format!("{{+{eleventh}+}}\n")));

    Ok(())
}

#[rstest]
fn walk_of_unknown_revision_fails(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_dt_command(repository_dir.path(), &["walk", "main"])
        .write_stdin("q\n")
        .assert()
        .failure();

    Ok(())
}
