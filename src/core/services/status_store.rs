//! Status store - load, mutate and save the timeline document
//!
//! Every mutating operation is a full read-modify-write cycle. There is no
//! locking: two concurrent runs race and the last writer wins.

use chrono::{DateTime, FixedOffset, SecondsFormat};
use log::{debug, warn};

use crate::core::models::{ProjectUpdate, StatusUpdate, TimelineDocument};
use crate::core::ports::{Clock, TimelineRepository};
use crate::error::StatusError;
use crate::output::{Overview, ProjectResult, StatusResult};

/// Render a timestamp the way `lastUpdated` stores it
///
/// e.g. `2026-10-18T14:05:33.123456+08:00`
#[must_use]
pub fn format_timestamp(at: &DateTime<FixedOffset>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Read-modify-write access to the timeline document
#[derive(Debug)]
pub struct StatusStore<R, C> {
    repo: R,
    clock: C,
}

impl<R: TimelineRepository, C: Clock> StatusStore<R, C> {
    /// Create a store over a repository and a clock
    #[must_use]
    pub const fn new(repo: R, clock: C) -> Self {
        Self { repo, clock }
    }

    /// The underlying repository
    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repo
    }

    /// Load the full document
    pub fn load(&self) -> Result<TimelineDocument, StatusError> {
        debug!("Loading timeline from {}", self.repo.location().display());
        let doc = self.repo.read()?;
        for id in doc.duplicate_ids() {
            warn!("Duplicate event id '{id}'; only the first entry will be updated");
        }
        Ok(doc)
    }

    /// Stamp `lastUpdated` and write the document back
    pub fn save(&self, doc: &mut TimelineDocument) -> Result<(), StatusError> {
        doc.status.last_updated = format_timestamp(&self.clock.now());
        debug!(
            "Saving timeline to {} (lastUpdated {})",
            self.repo.location().display(),
            doc.status.last_updated
        );
        self.repo.write(doc)
    }

    /// Overwrite the provided status fields and save
    ///
    /// An update with every field unset still saves, refreshing only
    /// `lastUpdated`.
    pub fn update_status(&self, update: StatusUpdate) -> Result<StatusResult, StatusError> {
        let mut doc = self.load()?;
        if update.is_empty() {
            debug!("No status fields given; refreshing lastUpdated only");
        }

        let mut changed = Vec::new();
        if update.activity.is_some() {
            changed.push("currentActivity".to_string());
        }
        if update.mood.is_some() {
            changed.push("mood".to_string());
        }
        if update.projects.is_some() {
            changed.push("activeProjects".to_string());
        }
        if update.tasks.is_some() {
            changed.push("todayTasks".to_string());
        }

        doc.status.apply(update);
        self.save(&mut doc)?;

        Ok(StatusResult::new(&doc.status, changed))
    }

    /// Update the first event whose id matches
    ///
    /// When no event matches nothing is written and the result reports
    /// `found: false`; this is not an error.
    pub fn update_project(
        &self,
        id: &str,
        update: &ProjectUpdate,
    ) -> Result<ProjectResult, StatusError> {
        let mut doc = self.load()?;

        let Some(event) = doc.find_event_mut(id) else {
            debug!("No event with id '{id}'; leaving timeline untouched");
            return Ok(ProjectResult::not_found(id));
        };
        event.apply(update);
        let result = ProjectResult::updated(event);

        self.save(&mut doc)?;
        Ok(result)
    }

    /// Summary of the current status and every event
    pub fn show(&self) -> Result<Overview, StatusError> {
        let doc = self.load()?;
        Ok(Overview::from(&doc))
    }
}
