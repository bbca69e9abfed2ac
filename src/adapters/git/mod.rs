//! Git integration adapter
//!
//! Implements `VersionControl` by running the `git` binary in the website
//! directory. Children inherit stdout/stderr so git's own progress and
//! errors stay visible.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::core::models::PublishStep;
use crate::core::ports::VersionControl;
use crate::error::PublishError;

/// Git-based version control implementation
#[derive(Debug, Clone)]
pub struct GitVersionControl {
    /// Working directory
    workdir: PathBuf,
    /// Send git's stdout to our stderr (keeps `--json` output clean)
    stdout_to_stderr: bool,
}

impl GitVersionControl {
    /// Create a new git version control adapter
    #[must_use]
    pub const fn new(workdir: PathBuf) -> Self {
        Self {
            workdir,
            stdout_to_stderr: false,
        }
    }

    /// Route git's stdout to stderr
    #[must_use]
    pub fn stdout_to_stderr(mut self, enabled: bool) -> Self {
        self.stdout_to_stderr = enabled;
        self
    }

    /// Directory git runs in
    #[must_use]
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }
}

impl VersionControl for GitVersionControl {
    fn run_step(&self, step: &PublishStep) -> Result<(), PublishError> {
        let mut cmd = Command::new("git");
        cmd.args(step.git_args()).current_dir(&self.workdir);
        if self.stdout_to_stderr {
            cmd.stdout(Stdio::from(io::stderr()));
        }

        let status = cmd
            .status()
            .map_err(|source| PublishError::Spawn {
                step: step.kind(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(PublishError::Failed {
                step: step.kind(),
                code: status.code(),
            })
        }
    }
}
