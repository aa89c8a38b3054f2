//! Launcher configuration stored in `launcher.toml` at the workspace root.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Name of the optional config file at the workspace root.
pub const CONFIG_FILE: &str = "launcher.toml";

/// Launcher configuration (TOML).
///
/// The file is optional: a missing file yields defaults that reproduce the
/// stock pipeline layout and orchestration command. Missing fields default
/// individually.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LauncherConfig {
    /// Directory the user drops the log export into.
    pub input_dir: String,

    /// Directory the containerized pipeline writes its artifacts into.
    pub output_dir: String,

    pub compose: ComposeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ComposeConfig {
    /// Orchestration command to execute (e.g. `["docker-compose","up","--build"]`).
    pub command: Vec<String>,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            command: vec![
                "docker-compose".to_string(),
                "up".to_string(),
                "--build".to_string(),
            ],
        }
    }
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            input_dir: "input".to_string(),
            output_dir: "output".to_string(),
            compose: ComposeConfig::default(),
        }
    }
}

impl LauncherConfig {
    pub fn validate(&self) -> Result<()> {
        if self.input_dir.trim().is_empty() {
            return Err(anyhow!("input_dir must be non-empty"));
        }
        if self.output_dir.trim().is_empty() {
            return Err(anyhow!("output_dir must be non-empty"));
        }
        if self.compose.command.is_empty() || self.compose.command[0].trim().is_empty() {
            return Err(anyhow!("compose.command must be a non-empty array"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `LauncherConfig::default()`.
pub fn load_config(path: &Path) -> Result<LauncherConfig> {
    if !path.exists() {
        let cfg = LauncherConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: LauncherConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, LauncherConfig::default());
    }

    #[test]
    fn load_applies_partial_overrides() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("launcher.toml");
        fs::write(&path, "[compose]\ncommand = [\"true\"]\n").expect("write");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.compose.command, vec!["true".to_string()]);
        assert_eq!(cfg.input_dir, "input");
        assert_eq!(cfg.output_dir, "output");
    }

    #[test]
    fn load_rejects_empty_command() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("launcher.toml");
        fs::write(&path, "[compose]\ncommand = []\n").expect("write");

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("compose.command"));
    }

    #[test]
    fn load_rejects_blank_input_dir() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("launcher.toml");
        fs::write(&path, "input_dir = \" \"\n").expect("write");

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("input_dir"));
    }
}
