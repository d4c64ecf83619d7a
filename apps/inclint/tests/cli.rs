use assert_cmd::cargo;
use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn inclint_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("inclint"));
    cmd.current_dir(dir).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// Temp repo with a `.git` marker so config discovery stops there.
fn repo() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    fs::create_dir(dir.path().join(".git")).expect("git marker");
    dir
}

fn write(dir: &Path, rel: &str, contents: &str) {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("mkdir");
    }
    fs::write(path, contents).expect("write fixture");
}

const MISORDERED: &str = "#include \"z.h\"\n#include \"a.h\"\n\nint x;\n";

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

#[test]
fn no_arguments_prints_usage_and_exits_one() {
    let dir = repo();
    let out = inclint_cmd(dir.path()).output().expect("run");
    assert_eq!(out.status.code(), Some(1));
    let stdout = stdout_of(&out);
    assert_eq!(stdout.lines().count(), 2);
    assert!(stdout.starts_with("Manual usage"));
}

#[test]
fn violation_is_printed_and_exit_is_zero() {
    let dir = repo();
    write(dir.path(), "src/a.c", MISORDERED);
    let out = inclint_cmd(dir.path()).arg("src/a.c").output().expect("run");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        stdout_of(&out),
        "Non-alphabetical include block\n\tsrc/a.c\n\tstarts line 3\n\t['z.h', 'a.h']\n"
    );
}

#[test]
fn ordered_files_print_nothing() {
    let dir = repo();
    write(
        dir.path(),
        "lib/ok.c",
        "#include <sys/types.h>\n#include <errno.h>\n#include <stdio.h>\n\n#include \"warnp.h\"\n\nint x;\n",
    );
    let out = inclint_cmd(dir.path()).arg("lib/ok.c").output().expect("run");
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());
}

#[test]
fn check_flag_fails_on_violations() {
    let dir = repo();
    write(dir.path(), "a.c", MISORDERED);
    let out = inclint_cmd(dir.path())
        .args(["--check", "a.c"])
        .output()
        .expect("run");
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn vendored_files_are_skipped_by_default() {
    let dir = repo();
    write(dir.path(), "libarchive/archive.c", MISORDERED);
    let out = inclint_cmd(dir.path())
        .args(["--check", "./libarchive/archive.c"])
        .output()
        .expect("run");
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());

    let out = inclint_cmd(dir.path())
        .args(["--no-exclude", "./libarchive/archive.c"])
        .output()
        .expect("run");
    assert!(stdout_of(&out).contains("starts line 3"));
}

#[test]
fn vendored_files_are_skipped_from_a_subdirectory() {
    let dir = repo();
    write(dir.path(), "libarchive/archive.c", MISORDERED);
    let sub = dir.path().join("libarchive");
    for arg in ["./archive.c", "archive.c", "../libarchive/archive.c"] {
        let out = inclint_cmd(&sub)
            .args(["--check", arg])
            .output()
            .expect("run");
        assert_eq!(out.status.code(), Some(0), "{arg}");
        assert!(out.stdout.is_empty(), "{arg}");
    }
}

#[test]
fn strict_flag_checks_trailing_block() {
    let dir = repo();
    write(dir.path(), "t.h", "int x;\n#include \"b.h\"\n#include \"a.h\"\n");
    let out = inclint_cmd(dir.path()).arg("t.h").output().expect("run");
    assert!(out.stdout.is_empty());

    let out = inclint_cmd(dir.path())
        .args(["--strict", "t.h"])
        .output()
        .expect("run");
    assert!(stdout_of(&out).contains("starts line 4"));
}

#[test]
fn missing_file_aborts_after_earlier_reports() {
    let dir = repo();
    write(dir.path(), "first.c", MISORDERED);
    write(dir.path(), "last.c", MISORDERED);
    let out = inclint_cmd(dir.path())
        .args(["first.c", "missing.c", "last.c"])
        .output()
        .expect("run");
    assert_eq!(out.status.code(), Some(2));
    let stdout = stdout_of(&out);
    assert!(stdout.contains("\tfirst.c\n"));
    assert!(!stdout.contains("last.c"));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("missing.c"));
}

#[test]
fn config_file_sets_output_and_excludes() {
    let dir = repo();
    write(
        dir.path(),
        "inclint.toml",
        "exclude = [\"third_party/**\"]\noutput = \"json\"\n",
    );
    write(dir.path(), "third_party/z.c", MISORDERED);
    write(dir.path(), "mine.c", MISORDERED);
    let out = inclint_cmd(dir.path())
        .args(["third_party/z.c", "mine.c"])
        .output()
        .expect("run");
    assert_eq!(out.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json output");
    assert_eq!(json["summary"]["violations"], 1);
    assert_eq!(json["summary"]["excluded"], 1);
    assert_eq!(json["violations"][0]["file"], "mine.c");
    assert_eq!(json["violations"][0]["includes"][0], "z.h");
}
