// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::chart::{MAX_RADIUS, MIN_RADIUS};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.pennyplot", "Pennyplot", "pennyplot"));

pub const CONFIG_ENV: &str = "PENNYPLOT_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub chart_radius: u16,
    pub color: bool,
    pub max_budget_attempts: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chart_radius: 8,
            color: true,
            max_budget_attempts: 3,
        }
    }
}

impl Config {
    /// Reads the file at [`config_path`]; a missing file yields defaults.
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        let mut cfg = Self::load_from(&path)?;
        cfg.apply_env(|k| std::env::var(k).ok());
        Ok(cfg)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Read config at {}", path.display()))?;
        let cfg: Config = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid config at {}", path.display()))?;
        debug!(path = %path.display(), ?cfg, "config loaded");
        Ok(cfg.normalized())
    }

    /// `NO_COLOR` (any value) or `PENNYPLOT_NO_COLOR` turn colour off.
    pub fn apply_env<F: Fn(&str) -> Option<String>>(&mut self, get: F) {
        if get("NO_COLOR").is_some() || get("PENNYPLOT_NO_COLOR").is_some() {
            self.color = false;
        }
    }

    fn normalized(mut self) -> Self {
        self.chart_radius = self.chart_radius.clamp(MIN_RADIUS, MAX_RADIUS);
        self.max_budget_attempts = self.max_budget_attempts.max(1);
        self
    }
}

pub fn config_path() -> Result<PathBuf> {
    if let Ok(p) = std::env::var(CONFIG_ENV) {
        if !p.trim().is_empty() {
            return Ok(PathBuf::from(p));
        }
    }
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    Ok(proj.config_dir().join("config.json"))
}
