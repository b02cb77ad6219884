//! Configuration handling for the TUI

use crate::state::StepGating;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default bound on page content resolution
const DEFAULT_PAGE_LOAD_TIMEOUT_MS: u64 = 5000;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Path opened at startup
    pub start_path: Option<String>,
    /// Authentication status reported to the access guard
    pub authenticated: Option<bool>,
    /// Whether "Next" requires the visible step to be valid
    pub step_gating: Option<StepGating>,
    /// Page load timeout in milliseconds
    pub page_load_timeout_ms: Option<u64>,
    /// Directory holding `<page>.json` content overrides
    pub pages_dir: Option<PathBuf>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "listing", "listing-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                tracing::info!(path = %path.display(), "loaded configuration");
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    pub fn start_path(&self) -> &str {
        self.start_path.as_deref().unwrap_or("/")
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated.unwrap_or(false)
    }

    pub fn step_gating(&self) -> StepGating {
        self.step_gating.unwrap_or_default()
    }

    pub fn page_load_timeout(&self) -> Duration {
        Duration::from_millis(
            self.page_load_timeout_ms
                .unwrap_or(DEFAULT_PAGE_LOAD_TIMEOUT_MS),
        )
    }
}
