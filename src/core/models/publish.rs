//! Publish pipeline steps

use chrono::{DateTime, TimeZone};
use serde::Serialize;

/// Which stage of the publish pipeline a step belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// Stage every change in the working tree
    Stage,
    /// Record a commit
    Commit,
    /// Push to the remote
    Push,
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stage => write!(f, "stage"),
            Self::Commit => write!(f, "commit"),
            Self::Push => write!(f, "push"),
        }
    }
}

/// A single step of the publish pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishStep {
    /// `git add -A`
    Stage,
    /// `git commit -m <message>`
    Commit {
        /// Commit message
        message: String,
    },
    /// `git push [remote [branch]]`
    Push {
        /// Remote name, or the upstream default when unset
        remote: Option<String>,
        /// Branch to push; ignored without a remote
        branch: Option<String>,
    },
}

impl PublishStep {
    /// The stage this step belongs to
    #[must_use]
    pub const fn kind(&self) -> StepKind {
        match self {
            Self::Stage => StepKind::Stage,
            Self::Commit { .. } => StepKind::Commit,
            Self::Push { .. } => StepKind::Push,
        }
    }

    /// Arguments passed to `git` for this step
    #[must_use]
    pub fn git_args(&self) -> Vec<String> {
        match self {
            Self::Stage => vec!["add".to_string(), "-A".to_string()],
            Self::Commit { message } => {
                vec!["commit".to_string(), "-m".to_string(), message.clone()]
            },
            Self::Push { remote, branch } => {
                let mut args = vec!["push".to_string()];
                if let Some(remote) = remote {
                    args.push(remote.clone());
                    if let Some(branch) = branch {
                        args.push(branch.clone());
                    }
                }
                args
            },
        }
    }
}

/// Commit message stamped with the local hour and minute
///
/// `commit_message("Update progress", t)` at 09:05 gives `"Update progress 09:05"`.
#[must_use]
pub fn commit_message<Tz: TimeZone>(prefix: &str, at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{prefix} {}", at.format("%H:%M"))
}

/// The stage, commit, push sequence
#[must_use]
pub fn publish_plan(
    message: String,
    remote: Option<String>,
    branch: Option<String>,
) -> Vec<PublishStep> {
    vec![PublishStep::Stage, PublishStep::Commit { message }, PublishStep::Push { remote, branch }]
}
