use pretty_assertions::assert_eq;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn levlog(dir: &tempfile::TempDir, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_levlog"))
        .current_dir(dir.path())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_message_argument() {
    let tmp = tempfile::tempdir().unwrap();
    let out = levlog(&tmp, &["--at", "error", "disk", "full"], "");
    assert!(out.status.success());
    assert_eq!(stdout(&out), "[Error] - disk full\n");
}

#[test]
fn test_debug_level_prints_only_records() {
    let tmp = tempfile::tempdir().unwrap();
    let out = levlog(&tmp, &["--level", "debug", "--at", "info", "hello"], "");
    assert!(out.status.success());
    assert_eq!(stdout(&out), "[Info] - hello\n");

    let out = levlog(&tmp, &["--level", "debug", "--at", "debug"], "one\ntwo\n");
    assert_eq!(stdout(&out), "[Debug] - one\n[Debug] - two\n");
}

#[test]
fn test_stdin_lines_are_gated() {
    let tmp = tempfile::tempdir().unwrap();
    let out = levlog(&tmp, &["--level", "WARNING", "--at", "notice"], "a\nb\n");
    assert!(out.status.success());
    assert_eq!(stdout(&out), "");

    let out = levlog(&tmp, &["--level", "notice", "--at", "notice", "-d", ": "], "a\nb\n");
    assert_eq!(stdout(&out), "[Notice]: a\n[Notice]: b\n");
}

#[test]
fn test_config_file() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(
        tmp.path().join(".levlog.toml"),
        "level = \"debug\"\ndelimiter = \" | \"\n",
    )
    .unwrap();
    let out = levlog(&tmp, &["--at", "debug", "hello"], "");
    assert_eq!(stdout(&out), "[Debug] | hello\n");

    // Flags win over the file.
    let out = levlog(&tmp, &["--level", "info", "--at", "debug", "hello"], "");
    assert_eq!(stdout(&out), "");
}

#[test]
fn test_invalid_level_flag() {
    let tmp = tempfile::tempdir().unwrap();
    let out = levlog(&tmp, &["--level", "loud", "x"], "");
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("\"loud\""), "{stderr}");
}

#[test]
fn test_die_exits_with_failure() {
    let tmp = tempfile::tempdir().unwrap();
    let out = levlog(&tmp, &["--level", "panic", "--die", "out", "of", "memory"], "");
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "[Panic] - out of memory\n");
}

#[test]
fn test_list_levels() {
    let tmp = tempfile::tempdir().unwrap();
    let out = levlog(&tmp, &["--list-levels"], "");
    assert_eq!(
        stdout(&out),
        "panic\nalert\ncritical\nerror\nwarning\nnotice\ninfo\ndebug\n"
    );
}
