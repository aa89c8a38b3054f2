//! Orchestration adapter for the external container pipeline.
//!
//! The [`Orchestrator`] trait decouples the launch procedure from the actual
//! container tool (stock command: `docker-compose up --build`). Tests use
//! scripted orchestrators that return predetermined statuses without
//! touching a container runtime.

use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info, instrument};

/// Parameters for an orchestration invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeRequest {
    /// Working directory for the orchestration process: the workspace root,
    /// where the collaborator finds its own configuration.
    pub workdir: PathBuf,
    /// Command to execute, program first.
    pub command: Vec<String>,
}

/// Abstraction over the external build-and-run backend.
pub trait Orchestrator {
    /// Run the orchestration command to completion and report its status.
    fn run(&self, request: &ComposeRequest) -> Result<ExitStatus>;
}

/// Orchestrator that spawns the configured command as a child process.
///
/// stdio is inherited so the container tool's build and run output reaches
/// the user's terminal directly. The wait is unbounded: the pipeline owns
/// its own runtime and the launcher imposes no timeout.
pub struct ComposeOrchestrator;

impl Orchestrator for ComposeOrchestrator {
    #[instrument(skip_all, fields(workdir = %request.workdir.display()))]
    fn run(&self, request: &ComposeRequest) -> Result<ExitStatus> {
        let (program, args) = request
            .command
            .split_first()
            .ok_or_else(|| anyhow!("empty orchestration command"))?;

        info!(command = ?request.command, "starting orchestration");
        let status = Command::new(program)
            .args(args)
            .current_dir(&request.workdir)
            .status()
            .with_context(|| format!("spawn {program}"))?;

        debug!(exit_code = ?status.code(), "orchestration finished");
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(command: &[&str]) -> ComposeRequest {
        ComposeRequest {
            workdir: std::env::temp_dir(),
            command: command.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn run_reports_success_status() {
        let status = ComposeOrchestrator
            .run(&request(&["sh", "-c", "exit 0"]))
            .expect("run");
        assert!(status.success());
    }

    #[test]
    fn run_reports_failure_status() {
        let status = ComposeOrchestrator
            .run(&request(&["sh", "-c", "exit 7"]))
            .expect("run");
        assert_eq!(status.code(), Some(7));
    }

    #[test]
    fn run_rejects_empty_command() {
        let err = ComposeOrchestrator.run(&request(&[])).unwrap_err();
        assert!(err.to_string().contains("empty orchestration command"));
    }
}
