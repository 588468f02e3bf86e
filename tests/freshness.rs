mod common;
use common::*;

/// Unsorted input with no existing manifest writes the sorted list.
#[test]
fn first_run_writes_sorted_manifest() {
    let dir = setup_files(&["a.txt", "b.txt"]);

    manifest_ok(dir.path(), &["out.list"], b"b.txt\na.txt\n");

    let out = std::fs::read(dir.path().join("out.list")).unwrap();
    assert_eq!(out, b"a.txt\nb.txt\n");
}

/// Reordered input with canonical-equal content does not rewrite.
#[test]
fn reordered_input_leaves_manifest_alone() {
    let dir = setup_files(&["a.txt", "b.txt"]);
    let out = dir.path().join("out.list");
    age(&dir.path().join("a.txt"), 300);
    age(&dir.path().join("b.txt"), 300);
    std::fs::write(&out, b"a.txt\nb.txt\n").unwrap();
    age(&out, 100);
    let before = mtime(&out);

    let stderr = manifest_ok(dir.path(), &["-v", "out.list"], b"b.txt\na.txt\n");

    assert!(stderr.contains("up-to-date"), "stderr: {stderr}");
    assert_eq!(std::fs::read(&out).unwrap(), b"a.txt\nb.txt\n");
    assert_eq!(mtime(&out), before);
}

/// Running twice with unchanged inputs changes nothing the second time.
#[test]
fn second_run_is_idempotent() {
    let dir = setup_files(&["x.c", "y.c", "sub/z.c"]);
    for name in ["x.c", "y.c", "sub/z.c"] {
        age(&dir.path().join(name), 600);
    }
    let input = b"y.c\nsub/z.c\nx.c\n";
    let out = dir.path().join("srcs.list");

    manifest_ok(dir.path(), &["srcs.list"], input);
    let bytes = std::fs::read(&out).unwrap();
    let first = mtime(&out);

    let stderr = manifest_ok(dir.path(), &["--verbose", "srcs.list"], input);

    assert!(stderr.contains("up-to-date"), "stderr: {stderr}");
    assert_eq!(std::fs::read(&out).unwrap(), bytes);
    assert_eq!(mtime(&out), first);
}

/// A listed file newer than the manifest advances the manifest's mtime.
#[test]
fn newer_listed_file_touches_manifest() {
    let dir = setup_files(&["a.txt", "b.txt"]);
    let out = dir.path().join("out.list");
    std::fs::write(&out, b"a.txt\nb.txt\n").unwrap();
    age(&dir.path().join("a.txt"), 300);
    age(&out, 200);
    age(&dir.path().join("b.txt"), 100);
    let before = mtime(&out);
    let newer = mtime(&dir.path().join("b.txt"));

    let stderr = manifest_ok(dir.path(), &["-v", "out.list"], b"a.txt\nb.txt\n");

    assert!(stderr.contains("touched"), "stderr: {stderr}");
    let after = mtime(&out);
    assert!(after > before, "mtime did not advance");
    assert!(after >= newer, "mtime older than the newer input");
    assert_eq!(std::fs::read(&out).unwrap(), b"a.txt\nb.txt\n");
}

/// Changed content is rewritten even if every input is older.
#[test]
fn changed_content_is_rewritten() {
    let dir = setup_files(&["a.txt", "b.txt", "c.txt"]);
    let out = dir.path().join("out.list");
    std::fs::write(&out, b"a.txt\nb.txt\n").unwrap();

    let stderr = manifest_ok(dir.path(), &["-v", "out.list"], b"c.txt\nb.txt\na.txt\n");

    assert!(stderr.contains("rewritten"), "stderr: {stderr}");
    assert_eq!(std::fs::read(&out).unwrap(), b"a.txt\nb.txt\nc.txt\n");
}

/// Removing a file from the list rewrites without stat'ing anything.
#[test]
fn rewrite_path_does_not_require_listed_files() {
    let dir = setup_files(&[]);
    let out = dir.path().join("out.list");
    std::fs::write(&out, b"gone.c\n").unwrap();

    manifest_ok(dir.path(), &["out.list"], b"missing.c\n");

    assert_eq!(std::fs::read(&out).unwrap(), b"missing.c\n");
}

/// A missing listed file is fatal once content matches.
#[test]
fn missing_listed_file_fails_on_mtime_check() {
    let dir = setup_files(&[]);
    let out = dir.path().join("out.list");
    std::fs::write(&out, b"missing.c\n").unwrap();

    let stderr = manifest_fails(dir.path(), &["out.list"], b"missing.c\n");

    assert!(stderr.contains("missing.c"), "stderr: {stderr}");
}

/// Fatal errors print one `manifest:`-prefixed line with the cause chain
/// and exit with status 1, distinct from clap's usage status 2.
#[test]
fn fatal_error_reports_chain_and_exits_one() {
    let dir = setup_files(&[]);
    std::fs::write(dir.path().join("out.list"), b"missing.c\n").unwrap();

    let out = manifest_in(dir.path(), &["out.list"], b"missing.c\n");

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.starts_with("manifest: updating manifest out.list: stat(missing.c): "),
        "stderr: {stderr}"
    );
    assert_eq!(stderr.lines().count(), 1, "stderr: {stderr}");
}

/// Empty input produces a manifest holding only the separator.
#[test]
fn empty_input_writes_bare_separator() {
    let dir = setup_files(&[]);

    manifest_ok(dir.path(), &["out.list"], b"\n");
    assert_eq!(std::fs::read(dir.path().join("out.list")).unwrap(), b"\n");

    manifest_ok(dir.path(), &["empty.list"], b"");
    assert_eq!(std::fs::read(dir.path().join("empty.list")).unwrap(), b"\0");
}

/// An unwritable output location is reported as an error.
#[test]
fn unwritable_output_fails() {
    let dir = setup_files(&["a.txt"]);

    let stderr = manifest_fails(dir.path(), &["no/such/dir/out.list"], b"a.txt\n");

    assert!(stderr.contains("out.list"), "stderr: {stderr}");
}
