//! Helpers to run the `tinct-solver` binary in integration tests.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Stdio;
use std::time::Duration;

use regex::Regex;
use wait_timeout::ChildExt;

const TEST_TIMEOUT: Duration = Duration::from_secs(60);

/// What the solver printed, and how it exited.
#[derive(Debug)]
pub(crate) struct SolverOutput {
    pub(crate) stdout: String,
    pub(crate) stderr: String,
    pub(crate) exit_code: Option<i32>,
}

impl SolverOutput {
    /// The result line, i.e. the first line of standard output.
    pub(crate) fn result_line(&self) -> &str {
        self.stdout.lines().next().unwrap_or_default()
    }

    /// Parses `SOLUTION: {v: c, ...}` into `(vertex, colour)` pairs, in the printed order.
    pub(crate) fn solution(&self) -> Option<Vec<(i64, u32)>> {
        let line = self.result_line();
        let shape = Regex::new(r"^SOLUTION: \{(.*)\}$").unwrap();
        let entry = Regex::new(r"(-?\d+): (\d+)").unwrap();

        let captures = shape.captures(line)?;
        Some(
            entry
                .captures_iter(&captures[1])
                .map(|entry| (entry[1].parse().unwrap(), entry[2].parse().unwrap()))
                .collect(),
        )
    }
}

pub(crate) fn instance(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("instances")
        .join(name)
}

pub(crate) fn run_solver(instance_path: impl AsRef<Path>) -> SolverOutput {
    run_solver_with_options(instance_path, std::iter::empty())
}

pub(crate) fn run_solver_with_options(
    instance_path: impl AsRef<Path>,
    args: impl IntoIterator<Item = String>,
) -> SolverOutput {
    let solver = PathBuf::from(env!("CARGO_BIN_EXE_tinct-solver"));

    let mut command = Command::new(solver);
    for arg in args {
        let _ = command.arg(arg);
    }
    let _ = command
        .arg(instance_path.as_ref())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = command.spawn().expect("failed to run solver");

    match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => {
            let _ = child.kill();
            panic!("solver took more than {} seconds", TEST_TIMEOUT.as_secs());
        }
        Ok(Some(_)) => {}
        Err(e) => panic!("error waiting for the solver: {e}"),
    }

    let output = child
        .wait_with_output()
        .expect("failed to collect the solver output");

    SolverOutput {
        stdout: String::from_utf8(output.stdout).expect("stdout is valid UTF-8"),
        stderr: String::from_utf8(output.stderr).expect("stderr is valid UTF-8"),
        exit_code: output.status.code(),
    }
}
