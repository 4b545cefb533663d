//! Child-process invocation of toolchain binaries, one file at a time.

use log::warn;
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::process::Command;

/// A single tool invocation: program plus arguments, built once per file.
#[derive(Debug, Clone)]
pub struct Invocation {
    program: PathBuf,
    args: Vec<OsString>,
}

impl Invocation {
    /// Start building an invocation of the given program.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Spawn the process and block until it exits.
    pub fn run(&self) -> InvocationOutcome {
        match Command::new(&self.program).args(&self.args).status() {
            Ok(status) if status.success() => InvocationOutcome::Success,
            Ok(status) => InvocationOutcome::Failed {
                exit_code: status.code(),
            },
            Err(source) => InvocationOutcome::SpawnFailed { source },
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// What became of one child-process invocation.
#[derive(Debug)]
pub enum InvocationOutcome {
    /// The tool ran and exited zero.
    Success,
    /// The tool ran but exited non-zero (`None` when killed by a signal).
    Failed {
        /// Exit code reported by the OS.
        exit_code: Option<i32>,
    },
    /// The process could not be spawned at all, e.g. the tool is missing.
    SpawnFailed {
        /// The underlying OS error.
        source: std::io::Error,
    },
}

impl InvocationOutcome {
    /// Whether the invocation completed successfully.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Aggregate record of a full run.
#[derive(Debug, Default)]
pub struct RunSummary {
    records: Vec<(Invocation, InvocationOutcome)>,
}

impl RunSummary {
    /// Number of invocations attempted.
    pub fn total(&self) -> usize {
        self.records.len()
    }

    /// Number of invocations that exited non-zero or failed to spawn.
    pub fn failed(&self) -> usize {
        self.records
            .iter()
            .filter(|(_, outcome)| !outcome.is_success())
            .count()
    }

    /// Per-invocation records, in execution order.
    pub fn records(&self) -> &[(Invocation, InvocationOutcome)] {
        &self.records
    }
}

/// Run every invocation in order, printing each command line to stdout
/// before executing it.
///
/// A failing invocation does not stop the run: failures are logged, recorded
/// in the summary, and otherwise ignored, so the caller decides whether they
/// affect the overall exit status.
pub fn run_all(invocations: Vec<Invocation>) -> RunSummary {
    let mut summary = RunSummary::default();
    for invocation in invocations {
        println!("{}", invocation);
        let outcome = invocation.run();
        match &outcome {
            InvocationOutcome::Success => {}
            InvocationOutcome::Failed { exit_code } => {
                warn!(
                    "{} exited with code {}",
                    invocation,
                    exit_code.unwrap_or(-1)
                );
            }
            InvocationOutcome::SpawnFailed { source } => {
                warn!("failed to spawn {}: {}", invocation, source);
            }
        }
        summary.records.push((invocation, outcome));
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_renders_the_full_command_line() {
        let invocation = Invocation::new("/ndk/shader-tools/linux-x86_64/glslc")
            .arg("shader.vert")
            .arg("-o")
            .arg("shader.vert.spv");
        assert_eq!(
            invocation.to_string(),
            "/ndk/shader-tools/linux-x86_64/glslc shader.vert -o shader.vert.spv"
        );
    }

    #[test]
    fn test_spawn_failure_is_captured_not_propagated() {
        let outcome = Invocation::new("/definitely/not/a/tool").run();
        assert!(matches!(outcome, InvocationOutcome::SpawnFailed { .. }));
    }

    #[test]
    fn test_empty_run_is_a_successful_noop() {
        let summary = run_all(Vec::new());
        assert_eq!(summary.total(), 0);
        assert_eq!(summary.failed(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_run_all_continues_past_failures() {
        let summary = run_all(vec![
            Invocation::new("false"),
            Invocation::new("true"),
        ]);
        assert_eq!(summary.total(), 2);
        assert_eq!(summary.failed(), 1);
        // The failure came first; the run still reached the second tool.
        assert!(!summary.records()[0].1.is_success());
        assert!(summary.records()[1].1.is_success());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_code_is_recorded() {
        let summary = run_all(vec![Invocation::new("false")]);
        match &summary.records()[0].1 {
            InvocationOutcome::Failed { exit_code } => assert_eq!(*exit_code, Some(1)),
            other => panic!("expected a failed invocation, got {:?}", other),
        }
    }
}
