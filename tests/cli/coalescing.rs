//! End-to-end coalescing tests against the built binary

use crate::common::{run_uniqueq, run_uniqueq_in, stdout_lines, write_input};
use std::collections::HashSet;

#[test]
fn test_stdin_duplicates_removed_in_first_seen_order() {
    let output = run_uniqueq(&[], "a\nb\na\nc\nb\n");

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["a", "b", "c"]);
}

#[test]
fn test_dash_reads_stdin() {
    let output = run_uniqueq(&["-"], "x\nx\n");

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["x"]);
}

#[test]
fn test_repeated_dash_reads_stdin_once() {
    let lines: Vec<String> = (0..50_000).map(|i| format!("line-{:06}", i)).collect();
    let input: String = lines.iter().map(|line| format!("{}\n", line)).collect();

    let output = run_uniqueq(&["--workers", "4", "-", "-", "-"], &input);

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), lines);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("repeated '-'"), "got: {}", stderr);
}

#[test]
fn test_relative_paths_resolved_in_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_input(dir.path(), "in.txt", "k
l
k
");

    let output = run_uniqueq_in(dir.path(), &["--output", "out.txt", "in.txt"], "");

    assert!(output.status.success());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("out.txt")).unwrap(),
        "k\nl\n"
    );
}

#[test]
fn test_multiple_files_coalesced() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_input(dir.path(), "first.txt", "one\ntwo\nthree\n");
    let second = write_input(dir.path(), "second.txt", "three\nfour\none\n");

    let output = run_uniqueq(&["--workers", "1", &first, &second], "");

    assert!(output.status.success());
    // A single producer reads the sources in command-line order
    assert_eq!(
        stdout_lines(&output),
        vec!["one", "two", "three", "four"]
    );
}

#[test]
fn test_parallel_producers_keep_every_unique_line() {
    let dir = tempfile::tempdir().unwrap();
    let mut paths = Vec::new();
    let mut expected = HashSet::new();
    for n in 0..6 {
        let lines: Vec<String> = (0..50)
            .map(|i| format!("line-{}", (i * (n + 1)) % 75))
            .collect();
        expected.extend(lines.iter().cloned());
        let contents: String = lines.iter().map(|line| format!("{}\n", line)).collect();
        paths.push(write_input(dir.path(), &format!("in{}.txt", n), &contents));
    }
    let mut args = vec!["--workers", "3"];
    args.extend(paths.iter().map(String::as_str));

    let output = run_uniqueq(&args, "");

    assert!(output.status.success());
    let mut lines = stdout_lines(&output);
    let total = lines.len();
    lines.sort();
    lines.dedup();
    assert_eq!(lines.len(), total, "output must not contain duplicates");
    assert_eq!(lines.into_iter().collect::<HashSet<_>>(), expected);
}

#[test]
fn test_trim_and_ignore_blank() {
    let output = run_uniqueq(&["--trim", "--ignore-blank"], "  a\n\na  \n   \nb\n");

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["a", "b"]);
}

#[test]
fn test_stats_written_to_stderr() {
    let output = run_uniqueq(&["--stats", "--no-color"], "a\nb\na\nc\n");

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["a", "b", "c"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("admitted 3  duplicates 1  coalesced 25.0%"),
        "got: {}",
        stderr
    );
}

#[test]
fn test_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("out.txt");
    let out = out_path.to_string_lossy().to_string();

    let output = run_uniqueq(&["--output", &out], "q\nq\nr\n");

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(std::fs::read_to_string(&out_path).unwrap(), "q\nr\n");
}

#[test]
fn test_missing_input_fails() {
    let output = run_uniqueq(&["/definitely/not/here.txt"], "");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("/definitely/not/here.txt"), "got: {}", stderr);
}

#[test]
fn test_invalid_worker_count_rejected() {
    let output = run_uniqueq(&["--workers", "0"], "");

    assert!(!output.status.success());
}
