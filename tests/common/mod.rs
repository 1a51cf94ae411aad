//! Common test utilities and helpers
//!
//! Helpers for running the `uniqueq` binary and preparing input files.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Run the binary with `args`, feeding `stdin` and returning its output
pub fn run_uniqueq(args: &[&str], stdin: &str) -> Output {
    run(Command::new(env!("CARGO_BIN_EXE_uniqueq")), args, stdin)
}

/// Like [`run_uniqueq`], with `dir` as the working directory
pub fn run_uniqueq_in(dir: &Path, args: &[&str], stdin: &str) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_uniqueq"));
    command.current_dir(dir);
    run(command, args, stdin)
}

fn run(mut command: Command, args: &[&str], stdin: &str) -> Output {
    command
        .args(args)
        // Keep a developer's own config file out of the tests
        .env("XDG_CONFIG_HOME", std::env::temp_dir().join("uniqueq-test-config"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = command.spawn().expect("spawn uniqueq");
    // The binary may exit (e.g. on a config error) before reading stdin
    match child
        .stdin
        .take()
        .expect("piped stdin")
        .write_all(stdin.as_bytes())
    {
        Err(e) if e.kind() != std::io::ErrorKind::BrokenPipe => panic!("write stdin: {e:?}"),
        _ => {}
    }
    child.wait_with_output().expect("wait for uniqueq")
}

/// Write `contents` to `name` inside `dir`, returning the path as a string
pub fn write_input(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write input file");
    path.to_string_lossy().to_string()
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}
