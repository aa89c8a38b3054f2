//! Test-only helpers for building throwaway pipeline workspaces.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::io::layout::LOGS_FILE;

/// Temporary pipeline workspace rooted in a tempdir.
///
/// The workspace starts empty; helpers add the required input file and a
/// `launcher.toml` whose orchestration command is a plain shell command, so
/// tests never touch a container runtime.
pub struct TestWorkspace {
    temp: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("create tempdir")?;
        Ok(Self { temp })
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// Write `input/logs.json` with a minimal JSONL line.
    pub fn write_logs(&self) -> Result<PathBuf> {
        let input_dir = self.root().join("input");
        fs::create_dir_all(&input_dir).context("create input dir")?;
        let path = input_dir.join(LOGS_FILE);
        fs::write(
            &path,
            "{\"@timestamp\":\"2024-01-01T00:00:00Z\",\"@level\":\"info\",\"@message\":\"plan start\"}\n",
        )
        .context("write logs.json")?;
        Ok(path)
    }

    /// Write a `launcher.toml` that replaces the orchestration command.
    pub fn write_config_with_command(&self, command: &[&str]) -> Result<PathBuf> {
        let path = self.root().join("launcher.toml");
        let rendered = command
            .iter()
            .map(|part| format!("{part:?}"))
            .collect::<Vec<_>>()
            .join(", ");
        fs::write(&path, format!("[compose]\ncommand = [{rendered}]\n"))
            .context("write launcher.toml")?;
        Ok(path)
    }
}
