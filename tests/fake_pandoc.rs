#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use predicates::prelude::*;
use tempfile::tempdir;

/// Answers `--version`, appends every other invocation to `calls.log`, and
/// either touches the output file or fails with pandoc-style stderr when
/// `FAKE_PANDOC_FAIL` is set.
const FAKE_PANDOC: &str = r#"#!/bin/sh
if [ "$1" = "--version" ]; then
    echo "pandoc 3.1.9"
    exit 0
fi
echo "$@" >> "$FAKE_PANDOC_LOG"
if [ -n "$FAKE_PANDOC_FAIL" ]; then
    echo "pandoc: unrecognized option" >&2
    exit 2
fi
echo "docx from $1" > "$3"
"#;

fn cargo_bin() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("md2docx").unwrap()
}

fn install_fake_pandoc(dir: &Path) -> PathBuf {
    let path = dir.join("fake-pandoc");
    fs::write(&path, FAKE_PANDOC).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn logged_calls(log: &Path) -> Vec<String> {
    fs::read_to_string(log)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

const FIXED_ARGS: &str = "Game_Architecture_Documentation.md -o Game_Architecture_Documentation.docx \
--from markdown --to docx --standalone --toc --number-sections";

// One test on purpose: exec'ing a freshly written script while sibling test
// threads fork can fail with ETXTBSY.
#[test]
fn conversion_scenarios_against_fake_pandoc() {
    let tool_dir = tempdir().unwrap();
    let pandoc = install_fake_pandoc(tool_dir.path());

    // Input present, tool succeeds, run twice.
    let work = tempdir().unwrap();
    let log = work.path().join("calls.log");
    let input = work.path().join("Game_Architecture_Documentation.md");
    let output = work.path().join("Game_Architecture_Documentation.docx");
    let absolute_output = fs::canonicalize(work.path())
        .unwrap()
        .join("Game_Architecture_Documentation.docx");
    fs::write(&input, "# Architecture\n").unwrap();

    for _ in 0..2 {
        cargo_bin()
            .current_dir(work.path())
            .env("FAKE_PANDOC_LOG", &log)
            .arg("--pandoc")
            .arg(&pandoc)
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Successfully converted to Game_Architecture_Documentation.docx",
            ))
            .stdout(predicate::str::contains(format!(
                "File location: {}",
                absolute_output.display()
            )))
            .stdout(predicate::str::contains("MANUAL CONVERSION INSTRUCTIONS").not());
    }
    assert_eq!(logged_calls(&log), vec![FIXED_ARGS, FIXED_ARGS]);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "docx from Game_Architecture_Documentation.md\n"
    );

    // Tool exits non-zero.
    let work = tempdir().unwrap();
    let log = work.path().join("calls.log");
    fs::write(
        work.path().join("Game_Architecture_Documentation.md"),
        "# Architecture\n",
    )
    .unwrap();

    cargo_bin()
        .current_dir(work.path())
        .env("FAKE_PANDOC_LOG", &log)
        .env("FAKE_PANDOC_FAIL", "1")
        .arg("--pandoc")
        .arg(&pandoc)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "Conversion failed: pandoc: unrecognized option",
        ))
        .stdout(predicate::str::contains("MANUAL CONVERSION INSTRUCTIONS"));
    assert_eq!(logged_calls(&log), vec![FIXED_ARGS]);

    // Input missing: reported, conversion never spawned.
    let work = tempdir().unwrap();
    let log = work.path().join("calls.log");

    cargo_bin()
        .current_dir(work.path())
        .env("FAKE_PANDOC_LOG", &log)
        .arg("--pandoc")
        .arg(&pandoc)
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Error: Game_Architecture_Documentation.md not found!",
        ))
        .stdout(predicate::str::contains("MANUAL CONVERSION INSTRUCTIONS"));
    assert!(logged_calls(&log).is_empty());
    assert!(!work
        .path()
        .join("Game_Architecture_Documentation.docx")
        .exists());

    // Optional flags dropped.
    let work = tempdir().unwrap();
    let log = work.path().join("calls.log");
    fs::write(work.path().join("guide.md"), "# Guide\n").unwrap();

    cargo_bin()
        .current_dir(work.path())
        .env("FAKE_PANDOC_LOG", &log)
        .args(["guide.md", "-o", "guide-out.docx", "--no-toc", "--no-number-sections"])
        .arg("--pandoc")
        .arg(&pandoc)
        .assert()
        .success();
    assert_eq!(
        logged_calls(&log),
        vec!["guide.md -o guide-out.docx --from markdown --to docx --standalone"]
    );
    assert!(work.path().join("guide-out.docx").exists());
}
