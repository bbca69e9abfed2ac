//! Configuration management
//!
//! Settings live at `~/.momo-status/config.toml`. Every key is optional;
//! a missing file means all defaults.
//!
//! ```toml
//! website_dir = "/Users/me/momo-website"
//! remote = "origin"
//! branch = "main"
//! dashboard_url = "https://momo-dashboard.vercel.app"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::services::PublishSettings;
use crate::paths;

/// momo-status configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Git checkout of the dashboard website
    pub website_dir: PathBuf,
    /// Timeline file, relative to `website_dir` unless absolute
    pub timeline_file: PathBuf,
    /// Remote to push to; plain `git push` when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,
    /// Branch to push; only used together with `remote`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// Public dashboard address, shown after a push
    pub dashboard_url: String,
    /// Rough deployment delay after a push, in seconds
    pub deploy_wait_secs: u64,
    /// Commit message text placed before the `HH:MM` stamp
    pub commit_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            website_dir: PathBuf::from("."),
            timeline_file: PathBuf::from(paths::DEFAULT_TIMELINE_FILE),
            remote: None,
            branch: None,
            dashboard_url: "https://momo-dashboard.vercel.app".to_string(),
            deploy_wait_secs: 30,
            commit_prefix: "Update progress".to_string(),
        }
    }
}

impl Config {
    /// Get the default config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load the default config file, or defaults if it is missing or unreadable
    #[must_use]
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        Self::load_from(&path).unwrap_or_else(|e| {
            warn!("Ignoring config {}: {e:#}", path.display());
            Self::default()
        })
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Replace the website directory
    #[must_use]
    pub fn with_website_dir(mut self, dir: PathBuf) -> Self {
        self.website_dir = dir;
        self
    }

    /// Full path to the timeline file
    #[must_use]
    pub fn timeline_path(&self) -> PathBuf {
        paths::timeline_file(&self.website_dir, &self.timeline_file)
    }

    /// Push target and commit message settings
    #[must_use]
    pub fn publish_settings(&self) -> PublishSettings {
        PublishSettings {
            remote: self.remote.clone(),
            branch: self.branch.clone(),
            commit_prefix: self.commit_prefix.clone(),
        }
    }
}
