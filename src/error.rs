//! Error types for loading, saving and publishing the timeline

use std::path::PathBuf;

use thiserror::Error;

use crate::core::models::StepKind;

/// Errors raised by the status store and the publisher
#[derive(Debug, Error)]
pub enum StatusError {
    /// Timeline file does not exist
    #[error("timeline file not found: {}", .path.display())]
    NotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// Timeline file is not a well-formed timeline document
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        /// Path of the malformed file
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing the timeline file failed
    #[error("io error on {}: {source}", .path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The in-memory document could not be serialized
    #[error("failed to serialize timeline: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A publish step failed
    #[error(transparent)]
    Publish(#[from] PublishError),
}

/// Errors raised while running the publish pipeline
#[derive(Debug, Error)]
pub enum PublishError {
    /// The step ran but exited unsuccessfully
    #[error("{step} step failed ({})", describe_code(.code.as_ref()))]
    Failed {
        /// Which step failed
        step: StepKind,
        /// Exit code, if the process exited normally
        code: Option<i32>,
    },

    /// The step's process could not be started
    #[error("could not run {step} step: {source}")]
    Spawn {
        /// Which step failed
        step: StepKind,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

impl PublishError {
    /// The step that failed
    #[must_use]
    pub const fn step(&self) -> StepKind {
        match self {
            Self::Failed { step, .. } | Self::Spawn { step, .. } => *step,
        }
    }
}

fn describe_code(code: Option<&i32>) -> String {
    match code {
        Some(c) => format!("exit code {c}"),
        None => "terminated by signal".to_string(),
    }
}
