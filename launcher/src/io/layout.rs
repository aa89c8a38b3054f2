//! Workspace layout: the input/output directories and the required input
//! file the containerized pipeline consumes.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::io::config::LauncherConfig;

/// Name of the required input file inside the input directory.
pub const LOGS_FILE: &str = "logs.json";

/// Canonical paths within a pipeline workspace root.
#[derive(Debug, Clone)]
pub struct PipelinePaths {
    pub root: PathBuf,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// The JSONL log export the pipeline reads. Must pre-exist; the launcher
    /// never creates or mutates it.
    pub logs_path: PathBuf,
}

impl PipelinePaths {
    pub fn new(root: impl Into<PathBuf>, config: &LauncherConfig) -> Self {
        let root = root.into();
        let input_dir = root.join(&config.input_dir);
        let output_dir = root.join(&config.output_dir);
        let logs_path = input_dir.join(LOGS_FILE);
        Self {
            root,
            input_dir,
            output_dir,
            logs_path,
        }
    }
}

/// Create the input and output directories if missing.
///
/// Idempotent: re-running against an existing layout is not an error.
pub fn ensure_layout(paths: &PipelinePaths) -> Result<()> {
    create_dir(&paths.input_dir)?;
    create_dir(&paths.output_dir)?;
    Ok(())
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).with_context(|| format!("create directory {}", path.display()))
}
