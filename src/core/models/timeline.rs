//! Timeline document model
//!
//! The document is the whole of the dashboard's durable state. Keys the
//! dashboard uses but this tool does not touch (descriptions, start times,
//! links, ...) are kept in `extra` maps so a load/save cycle never drops them.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

use super::{ProjectUpdate, StatusUpdate};

/// Root of the timeline JSON file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineDocument {
    /// Current status block
    pub status: Status,

    /// Tracked projects and tasks, in display order
    #[serde(default)]
    pub events: Vec<Event>,

    /// Unknown top-level keys, written back as read
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `status` block of the timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    /// What is being worked on right now
    pub current_activity: String,

    /// Free-form mood label
    pub mood: String,

    /// Names of the projects currently in flight
    #[serde(default)]
    pub active_projects: Vec<String>,

    /// Today's task list
    #[serde(default)]
    pub today_tasks: Vec<String>,

    /// RFC 3339 timestamp of the last save
    #[serde(default)]
    pub last_updated: String,

    /// Unknown status keys
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A project or task entry on the timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique key within `events`
    pub id: String,

    /// Display title
    pub title: String,

    /// Free-form status label (e.g. "active", "completed")
    pub status: String,

    /// Completion percentage as stored
    ///
    /// `None` when the key is absent; an explicit `null` or an out-of-range
    /// number is kept as read.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub progress: Option<Value>,

    /// Unknown event keys
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TimelineDocument {
    /// First event with the given id
    #[must_use]
    pub fn find_event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// First event with the given id, mutably
    pub fn find_event_mut(&mut self, id: &str) -> Option<&mut Event> {
        self.events.iter_mut().find(|e| e.id == id)
    }

    /// Ids that appear more than once, each reported once in first-seen order
    #[must_use]
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut dupes: Vec<&str> = Vec::new();
        for (i, event) in self.events.iter().enumerate() {
            let seen_before = self.events[..i].iter().any(|e| e.id == event.id);
            if seen_before && !dupes.contains(&event.id.as_str()) {
                dupes.push(&event.id);
            }
        }
        dupes
    }
}

impl Status {
    /// Overwrite the fields that are set in `update`
    pub fn apply(&mut self, update: StatusUpdate) {
        if let Some(activity) = update.activity {
            self.current_activity = activity;
        }
        if let Some(mood) = update.mood {
            self.mood = mood;
        }
        if let Some(projects) = update.projects {
            self.active_projects = projects;
        }
        if let Some(tasks) = update.tasks {
            self.today_tasks = tasks;
        }
    }
}

impl Event {
    /// Progress, if it is stored as a number
    #[must_use]
    pub fn progress_number(&self) -> Option<&Number> {
        match &self.progress {
            Some(Value::Number(n)) => Some(n),
            _ => None,
        }
    }

    /// Overwrite the fields that are set in `update`
    pub fn apply(&mut self, update: &ProjectUpdate) {
        if let Some(progress) = update.progress {
            self.progress = Some(Value::from(progress));
        }
        if let Some(status) = &update.status {
            self.status.clone_from(status);
        }
    }
}

/// Wraps whatever is present, `null` included, so only a missing key is `None`
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}
