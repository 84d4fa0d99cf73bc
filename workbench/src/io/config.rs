//! Engine configuration stored under `.workbench/state/config.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::io::scanner::default_includes;

/// Engine configuration (TOML).
///
/// This file is intended to be edited by humans and must remain stable and
/// automatable. Missing fields default to sensible values. The include globs
/// may be overridden here; the excluded directory set is a built-in safety
/// floor and deliberately not configurable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WorkbenchConfig {
    /// Include glob patterns for the repo scanner, in match-priority order.
    pub include: Vec<String>,

    /// Maximum number of files examined when rendering diff previews.
    pub preview_limit: usize,
}

impl Default for WorkbenchConfig {
    fn default() -> Self {
        Self {
            include: default_includes(),
            preview_limit: 5,
        }
    }
}

impl WorkbenchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.include.is_empty() {
            return Err(anyhow!("include must list at least one glob pattern"));
        }
        if self.include.iter().any(|p| p.trim().is_empty()) {
            return Err(anyhow!("include patterns must be non-empty"));
        }
        if self.preview_limit == 0 {
            return Err(anyhow!("preview_limit must be > 0"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `WorkbenchConfig::default()`.
pub fn load_config(path: &Path) -> Result<WorkbenchConfig> {
    if !path.exists() {
        let cfg = WorkbenchConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: WorkbenchConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &WorkbenchConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
