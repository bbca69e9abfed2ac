//! Centralized path definitions for momo-status
//!
//! ## Layout
//!
//! ```text
//! ~/.momo-status/
//! └── config.toml               # Website dir, push target, dashboard URL
//!
//! <website_dir>/                # Git checkout of the dashboard site
//! └── src/data/timeline.json    # The timeline document
//! ```

use std::path::{Path, PathBuf};

/// Global config directory name
const GLOBAL_DIR: &str = ".momo-status";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Timeline file location inside the website checkout
pub const DEFAULT_TIMELINE_FILE: &str = "src/data/timeline.json";

/// Get the global config directory.
///
/// Returns `~/.momo-status/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.momo-status/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Resolve the timeline file against the website directory.
///
/// Absolute `file` paths are used as given.
#[must_use]
pub fn timeline_file(website_dir: &Path, file: &Path) -> PathBuf {
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        website_dir.join(file)
    }
}
