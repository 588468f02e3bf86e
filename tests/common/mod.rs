//! Shared test helpers for manifest integration tests.
//!
//! All tests use temp directories and run the compiled `manifest` binary
//! with the temp directory as its working directory.

#![allow(dead_code)]

use std::io::Write as _;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use std::time::{Duration, SystemTime};

use filetime::FileTime;
use tempfile::TempDir;

/// Create a temp directory holding empty files with the given names.
pub fn setup_files(names: &[&str]) -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    for name in names {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        std::fs::write(&path, b"").expect("failed to create file");
    }
    dir
}

/// Run manifest in `dir` with `stdin` piped in.
pub fn manifest_in(dir: &Path, args: &[&str], stdin: &[u8]) -> Output {
    manifest_in_env(dir, args, stdin, &[])
}

/// Like [`manifest_in`], with extra environment variables set.
pub fn manifest_in_env(dir: &Path, args: &[&str], stdin: &[u8], env: &[(&str, &str)]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_manifest"))
        .args(args)
        .current_dir(dir)
        .env_remove("MANIFEST_SEPARATOR")
        .env_remove("MANIFEST_LOG")
        .envs(env.iter().copied())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to execute manifest");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin)
        .expect("failed to write stdin");
    child.wait_with_output().expect("failed to wait for manifest")
}

/// Run manifest and assert it succeeds. Returns stderr as string.
pub fn manifest_ok(dir: &Path, args: &[&str], stdin: &[u8]) -> String {
    let out = manifest_in(dir, args, stdin);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        out.status.success(),
        "manifest {} failed:\nstderr: {stderr}",
        args.join(" "),
    );
    stderr.to_string()
}

/// Run manifest and assert it fails. Returns stderr as string.
pub fn manifest_fails(dir: &Path, args: &[&str], stdin: &[u8]) -> String {
    let out = manifest_in(dir, args, stdin);
    assert!(
        !out.status.success(),
        "Expected manifest {} to fail, but it succeeded.",
        args.join(" "),
    );
    String::from_utf8_lossy(&out.stderr).to_string()
}

/// Set the mtime of `path` to `secs` seconds before now.
pub fn age(path: &Path, secs: u64) {
    let when = SystemTime::now() - Duration::from_secs(secs);
    filetime::set_file_mtime(path, FileTime::from_system_time(when)).expect("failed to set mtime");
}

pub fn mtime(path: &Path) -> FileTime {
    let meta = std::fs::metadata(path).expect("failed to stat");
    FileTime::from_last_modification_time(&meta)
}
