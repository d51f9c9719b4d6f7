/*!
 * Integration tests for the dirpage binary
 */

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_zero_argument_run() {
    let temp_dir = tempdir().unwrap();
    fs::create_dir_all(temp_dir.path().join("src").join("sub")).unwrap();
    fs::write(temp_dir.path().join("src").join("a.txt"), vec![b'a'; 10]).unwrap();
    fs::write(
        temp_dir.path().join("src").join("sub").join("b.txt"),
        vec![b'b'; 2000],
    )
    .unwrap();

    Command::cargo_bin("dirpage")
        .unwrap()
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Scanning src directory..."))
        .stdout(predicate::str::contains("Generating HTML..."))
        .stdout(predicate::str::contains("HTML directory listing generated at:"))
        .stdout(predicate::str::contains("Files: 2"))
        .stdout(predicate::str::contains("Directories: 1"))
        .stdout(predicate::str::contains("Total Size: 1.96 KB"));

    let page = fs::read_to_string(temp_dir.path().join("directory").join("index.html")).unwrap();
    assert!(page.contains("<strong>sub</strong>"));
    assert!(page.contains("View on GitHub"));
}

#[test]
fn test_missing_source_exits_with_error() {
    let temp_dir = tempdir().unwrap();

    Command::cargo_bin("dirpage")
        .unwrap()
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Source directory not found"))
        .stdout(predicate::str::contains("Generating HTML...").not());

    assert!(!temp_dir.path().join("directory").join("index.html").exists());
}

#[test]
fn test_custom_paths_and_table_report() {
    let temp_dir = tempdir().unwrap();
    let docs = temp_dir.path().join("docs");
    let public = temp_dir.path().join("public").join("tree");
    fs::create_dir_all(&docs).unwrap();
    fs::write(docs.join("<odd>.md"), "hi").unwrap();

    Command::cargo_bin("dirpage")
        .unwrap()
        .arg("--source")
        .arg(&docs)
        .arg("--output")
        .arg(&public)
        .args(["--title", "Handbook", "--report", "table"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Metric"))
        .stdout(predicate::str::contains("2 B"));

    let page = fs::read_to_string(public.join("index.html")).unwrap();
    assert!(page.contains("<h1>📚 Handbook</h1>"));
    assert!(page.contains("<h2>📂 docs/</h2>"));
    assert!(page.contains("📄 &lt;odd&gt;.md "));
}
