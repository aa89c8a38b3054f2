//! Orchestration of a single pipeline launch.
//!
//! A launch prepares the workspace layout, refuses to start without the
//! required input file, and otherwise hands control to the orchestration
//! backend, blocking until it returns.

use std::process::ExitStatus;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::io::compose::{ComposeRequest, Orchestrator};
use crate::io::config::LauncherConfig;
use crate::io::layout::{PipelinePaths, ensure_layout};

/// Outcome of a launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// Required input file is absent; the orchestration was not invoked.
    MissingInput,
    /// Orchestration ran to completion. Its exit status is recorded but not
    /// turned into a launcher failure: pipeline problems surface in the
    /// container tool's own output.
    Completed { status: ExitStatus },
}

/// Run one launch against `paths` using `orchestrator`.
///
/// Creates the input and output directories if missing (idempotent), checks
/// for the required input file, then invokes the orchestration command and
/// blocks until it completes. An absent input file short-circuits to
/// [`LaunchOutcome::MissingInput`] before any orchestration; it is the only
/// condition the launcher itself detects.
pub fn launch<O: Orchestrator>(
    paths: &PipelinePaths,
    config: &LauncherConfig,
    orchestrator: &O,
) -> Result<LaunchOutcome> {
    debug!(root = %paths.root.display(), "preparing workspace layout");
    ensure_layout(paths)?;

    if !paths.logs_path.exists() {
        info!(logs = %paths.logs_path.display(), "required input file missing");
        return Ok(LaunchOutcome::MissingInput);
    }

    let request = ComposeRequest {
        workdir: paths.root.clone(),
        command: config.compose.command.clone(),
    };
    let status = orchestrator.run(&request)?;
    if !status.success() {
        warn!(exit_code = ?status.code(), "orchestration exited with non-success status");
    }

    info!("launch complete");
    Ok(LaunchOutcome::Completed { status })
}
