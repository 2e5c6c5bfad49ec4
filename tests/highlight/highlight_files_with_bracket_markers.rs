use crate::common::command::run_dt_command;
use crate::common::file::{FileSpec, write_file};
use crate::common::strip_markers;
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::single_edited_line(
    "line1\nline2\nline3\n",
    "line1\nLINE2\nline3\n",
    "line1\n{+LINE+}2\nline3\n"
)]
#[case::single_line_byte_edit("foobar", "foobaz", "fooba{+z+}\n")]
#[case::inserted_lines(
    "a\nb\nc\n",
    "a\nb\nx\ny\nc\n",
    "a\nb\n{+x+}\n{+y+}\nc\n"
)]
#[case::realigned_code_is_quiet(
    "let x = 1;\nlet y = 2;\n",
    "let  x  = 1;\nlet y = 2;\n",
    "let  x  = 1;\nlet y = 2;\n"
)]
#[case::deleted_lines_leave_no_trace("a\nb\nc\n", "a\nc\n", "a\nc\n")]
#[case::identical_files("same\n", "same\n", "same\n")]
fn highlight_files_with_bracket_markers(
    #[case] before: &str,
    #[case] after: &str,
    #[case] expected: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    write_file(FileSpec::new(dir.path().join("before.txt"), before.to_string()));
    write_file(FileSpec::new(dir.path().join("after.txt"), after.to_string()));

    let output = run_dt_command(dir.path(), &["highlight", "before.txt", "after.txt"])
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout, expected);

    Ok(())
}

#[rstest]
fn highlight_expands_tabs_outside_markers() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    write_file(FileSpec::new(dir.path().join("before.txt"), "a\n".to_string()));
    write_file(FileSpec::new(
        dir.path().join("after.txt"),
        "a\n\tb\n".to_string(),
    ));

    let output = run_dt_command(
        dir.path(),
        &["--tab-width", "2", "highlight", "before.txt", "after.txt"],
    )
    .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout, "a\n{+  b+}\n");
    assert!(!stdout.contains('\t'));

    Ok(())
}

#[rstest]
fn highlight_with_ansi_markers_renders_the_after_content() -> Result<(), Box<dyn std::error::Error>>
{
    let dir = TempDir::new()?;
    write_file(FileSpec::new(
        dir.path().join("before.txt"),
        "fn main() {}\n".to_string(),
    ));
    write_file(FileSpec::new(
        dir.path().join("after.txt"),
        "fn main() {}\nfn helper() {}\n".to_string(),
    ));

    let output = assert_cmd::Command::cargo_bin("dt")?
        .current_dir(dir.path())
        .args(["--no-pager", "highlight", "before.txt", "after.txt"])
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(
        stdout,
        "fn main() {}\n\x1b[1;92mfn helper() {}\x1b[0m\n"
    );

    Ok(())
}

#[rstest]
fn highlight_output_without_markers_is_the_after_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let before = "struct Point {\n    x: i32,\n}\n";
    let after = "struct Point {\n    x: i64,\n    y: i64,\n}\n";
    write_file(FileSpec::new(dir.path().join("before.rs"), before.to_string()));
    write_file(FileSpec::new(dir.path().join("after.rs"), after.to_string()));

    let output = run_dt_command(dir.path(), &["highlight", "before.rs", "after.rs"]).output()?;

    assert!(output.status.success());
    assert_eq!(strip_markers(&String::from_utf8(output.stdout)?), after);

    Ok(())
}

#[rstest]
fn highlight_rejects_zero_tab_width() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    write_file(FileSpec::new(dir.path().join("before.txt"), "a\tb\n".to_string()));
    write_file(FileSpec::new(dir.path().join("after.txt"), "a\tb\n".to_string()));

    run_dt_command(
        dir.path(),
        &["--tab-width", "0", "highlight", "before.txt", "after.txt"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("--tab-width"))
    .stdout(predicate::str::is_empty());

    Ok(())
}
