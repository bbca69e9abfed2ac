//! Publisher - stage, commit and push the website repository
//!
//! Steps run strictly in order. The first failing step aborts the run and
//! its error names the step; nothing is retried.

use log::{debug, info};

use crate::core::models::{PublishStep, StepKind, commit_message, publish_plan};
use crate::core::ports::{Clock, VersionControl};
use crate::error::PublishError;

/// Where and how to push
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishSettings {
    /// Remote to push to (`git push` default when unset)
    pub remote: Option<String>,
    /// Branch to push (only used together with `remote`)
    pub branch: Option<String>,
    /// Commit message text placed before the `HH:MM` stamp
    pub commit_prefix: String,
}

/// What a successful publish did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    /// Steps that ran, in order
    pub steps: Vec<StepKind>,
    /// Message of the new commit
    pub commit_message: String,
}

/// Runs the publish pipeline against a version control backend
#[derive(Debug)]
pub struct Publisher<V, C> {
    vcs: V,
    clock: C,
    settings: PublishSettings,
}

impl<V: VersionControl, C: Clock> Publisher<V, C> {
    /// Create a publisher
    #[must_use]
    pub const fn new(vcs: V, clock: C, settings: PublishSettings) -> Self {
        Self {
            vcs,
            clock,
            settings,
        }
    }

    /// The steps `publish` will run right now
    #[must_use]
    pub fn plan(&self) -> Vec<PublishStep> {
        let message = commit_message(&self.settings.commit_prefix, &self.clock.now());
        publish_plan(message, self.settings.remote.clone(), self.settings.branch.clone())
    }

    /// Stage everything, commit and push
    pub fn publish(&self) -> Result<PublishReport, PublishError> {
        let plan = self.plan();
        let mut report = PublishReport {
            steps: Vec::with_capacity(plan.len()),
            commit_message: String::new(),
        };

        for step in &plan {
            debug!("Running {} step: git {}", step.kind(), step.git_args().join(" "));
            self.vcs.run_step(step)?;
            if let PublishStep::Commit { message } = step {
                report.commit_message.clone_from(message);
            }
            report.steps.push(step.kind());
        }

        info!("Published: {}", report.commit_message);
        Ok(report)
    }
}
