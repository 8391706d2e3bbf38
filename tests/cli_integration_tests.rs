#![allow(deprecated)] // cargo_bin deprecation - still works fine

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const BANNER_NOTE: &str = "Note: checks are relaxed for scripts (with #!) compared to modules";

const NO_PERIOD: &str = "def foo():\n    \"\"\"No period\"\"\"\n    pass\n";

const CLEAN: &str = r#""""Module docstring."""


def foo():
    """Return nothing."""
    pass


class Foo(object):

    """A well documented class."""

    def bar(self):
        """Do bar."""
        pass
"#;

fn cmd() -> Command {
    Command::cargo_bin("docstring-guard").expect("binary should exist")
}

fn project(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, content) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
    dir
}

// ============================================================================
// Exit codes and banner
// ============================================================================

#[test]
fn clean_file_exits_success() {
    let dir = project(&[("mod.py", CLEAN)]);

    cmd()
        .current_dir(dir.path())
        .args(["--no-config", "--color", "never", "mod.py"])
        .assert()
        .success()
        .stdout(predicate::str::contains(BANNER_NOTE))
        .stdout(predicate::str::contains("=".repeat(80)));
}

#[test]
fn violations_exit_one() {
    let dir = project(&[("mod.py", NO_PERIOD)]);

    cmd()
        .current_dir(dir.path())
        .args(["--no-config", "--color", "never", "mod.py"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "mod.py:2:4: Docstring should end with a period.",
        ));
}

#[test]
fn missing_file_reports_open_error() {
    let dir = TempDir::new().unwrap();

    let expected = format!(
        "{}\n{BANNER_NOTE}\nError opening file non-existent-file.py\n",
        "=".repeat(80)
    );
    cmd()
        .current_dir(dir.path())
        .args(["--no-config", "--color", "never", "non-existent-file.py"])
        .assert()
        .code(2)
        .stdout(expected);
}

#[test]
fn missing_file_does_not_stop_other_files() {
    let dir = project(&[("mod.py", NO_PERIOD)]);

    cmd()
        .current_dir(dir.path())
        .args(["--no-config", "--color", "never", "missing.py", "mod.py"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error opening file missing.py"))
        .stdout(predicate::str::contains("mod.py:2:4"));
}

#[test]
fn invalid_utf8_reports_read_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("binary.py"), [0xff, 0xfe, 0x00]).unwrap();

    cmd()
        .current_dir(dir.path())
        .args(["--no-config", "--color", "never", "binary.py"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Error reading file binary.py"));
}

// ============================================================================
// Output modes
// ============================================================================

#[test]
fn range_mode_shows_end() {
    let dir = project(&[("mod.py", NO_PERIOD)]);

    cmd()
        .current_dir(dir.path())
        .args(["--no-config", "--color", "never", "--range", "mod.py"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("mod.py:2:4..2:19: "));
}

#[test]
fn explain_mode_prints_rationale() {
    let dir = project(&[("mod.py", NO_PERIOD)]);

    cmd()
        .current_dir(dir.path())
        .args(["--no-config", "--color", "never", "-e", "mod.py"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "    The docstring is a phrase ending in a period.",
        ));
}

#[test]
fn quote_mode_prints_docstring() {
    let dir = project(&[("mod.py", NO_PERIOD)]);

    cmd()
        .current_dir(dir.path())
        .args(["--no-config", "--color", "never", "-q", "mod.py"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("    \"\"\"No period\"\"\""));
}

#[test]
fn module_docstring_violation() {
    let dir = project(&[("mod.py", "'''Module docstring.'''\n")]);

    cmd()
        .current_dir(dir.path())
        .args(["--no-config", "--color", "never", "mod.py"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "mod.py: module docstring: Use \"\"\"triple double quotes\"\"\".",
        ));
}

#[test]
fn json_format() {
    let dir = project(&[("mod.py", NO_PERIOD)]);

    let output = cmd()
        .current_dir(dir.path())
        .args(["--no-config", "--format", "json", "mod.py", "missing.py"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["summary"]["files"], 2);
    assert_eq!(json["summary"]["violations"], 1);
    assert_eq!(json["summary"]["errors"], 1);
    assert_eq!(json["violations"][0]["rule"], "ends-with-period");
    assert_eq!(json["violations"][0]["position"]["line"], 2);
    assert_eq!(json["errors"][0]["message"], "Error opening file missing.py");
}

// ============================================================================
// Directory scanning and configuration
// ============================================================================

#[test]
fn directory_scan_filters_extensions_and_excludes() {
    let dir = project(&[
        ("pkg/a.py", NO_PERIOD),
        ("pkg/notes.txt", NO_PERIOD),
        ("build/gen.py", NO_PERIOD),
    ]);

    cmd()
        .current_dir(dir.path())
        .args(["--no-config", "--color", "never", "-x", "**/build/**", "."])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("a.py:2:4"))
        .stdout(predicate::str::contains("notes.txt").not())
        .stdout(predicate::str::contains("gen.py").not());
}

#[test]
fn local_config_enables_quote_mode() {
    let dir = project(&[
        ("mod.py", NO_PERIOD),
        (".docstring-guard.toml", "[output]\nquote = true\n"),
    ]);

    cmd()
        .current_dir(dir.path())
        .args(["--color", "never", "mod.py"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("    \"\"\"No period\"\"\""));
}

#[test]
fn explicit_config_path() {
    let dir = project(&[
        ("mod.py", NO_PERIOD),
        ("custom.toml", "[output]\nformat = \"json\"\n"),
    ]);

    cmd()
        .current_dir(dir.path())
        .args(["--config", "custom.toml", "mod.py"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"summary\""));
}

#[test]
fn invalid_config_exits_two() {
    let dir = project(&[("mod.py", CLEAN), ("bad.toml", "[output\nexplain = ")]);

    cmd()
        .current_dir(dir.path())
        .args(["--config", "bad.toml", "mod.py"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn help_lists_flags() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--explain"))
        .stdout(predicate::str::contains("--range"))
        .stdout(predicate::str::contains("--quote"));
}
