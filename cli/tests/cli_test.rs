//! End-to-end tests for the stampdoc binary.

use std::path::Path;
use std::process::{Command, Output};

fn stampdoc(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_stampdoc"))
        .current_dir(cwd)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run stampdoc")
}

#[test]
fn test_default_run_generates_and_converts() {
    let dir = tempfile::tempdir().unwrap();
    let out = stampdoc(dir.path(), &[]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Test files generated in test_files",
            "Done, output file: test_files/output.docx",
        ]
    );

    let files = dir.path().join("test_files");
    assert!(files.join("test_data.xlsx").is_file());
    assert!(files.join("stamp.png").is_file());
    let docx = std::fs::read(files.join("output.docx")).unwrap();
    assert!(docx.starts_with(b"PK"));
}

#[test]
fn test_second_run_skips_generation() {
    let dir = tempfile::tempdir().unwrap();
    assert!(stampdoc(dir.path(), &[]).status.success());

    let out = stampdoc(dir.path(), &[]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec!["Done, output file: test_files/output.docx"]
    );
}

#[test]
fn test_convert_missing_dataset_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = stampdoc(dir.path(), &["convert"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error"));
    assert!(stderr.contains("test_data.xlsx"));
}

#[test]
fn test_preview_csv() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("rows.csv"), "a,b\n1,2\n3,4\n5,6\n").unwrap();

    let out = stampdoc(dir.path(), &["preview", "--input", "rows.csv", "--capacity", "2"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("a\tb\n1\t2\n3\t4\n\u{c}\na\tb\n5\t6"));
}
