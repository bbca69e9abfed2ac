//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;
use serde_json::Number;

use crate::core::models::{Event, Status, StepKind, TimelineDocument};

/// Characters of an event's status shown in the human listing
pub const STATUS_LABEL_WIDTH: usize = 4;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// An event as shown to the user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventInfo {
    /// Event ID
    pub id: String,
    /// Event title
    pub title: String,
    /// Full status label
    pub status: String,
    /// Progress percentage, if stored as a number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<Number>,
}

impl From<&Event> for EventInfo {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            status: event.status.clone(),
            progress: event.progress_number().cloned(),
        }
    }
}

impl EventInfo {
    /// One-line listing: `[stat] id: title (NN%)`
    #[must_use]
    pub fn line(&self) -> String {
        let label: String = self.status.chars().take(STATUS_LABEL_WIDTH).collect();
        let progress = self.progress.as_ref().map(|p| format!(" ({p}%)")).unwrap_or_default();
        format!("[{label}] {}: {}{progress}", self.id, self.title)
    }
}

/// Result of `show`
#[derive(Debug, Clone, Serialize)]
pub struct Overview {
    /// Current activity
    pub current_activity: String,
    /// Current mood
    pub mood: String,
    /// Active projects
    pub active_projects: Vec<String>,
    /// Today's tasks
    pub today_tasks: Vec<String>,
    /// Last save time
    pub last_updated: String,
    /// Every event, in document order
    pub events: Vec<EventInfo>,
}

impl From<&TimelineDocument> for Overview {
    fn from(doc: &TimelineDocument) -> Self {
        Self {
            current_activity: doc.status.current_activity.clone(),
            mood: doc.status.mood.clone(),
            active_projects: doc.status.active_projects.clone(),
            today_tasks: doc.status.today_tasks.clone(),
            last_updated: doc.status.last_updated.clone(),
            events: doc.events.iter().map(EventInfo::from).collect(),
        }
    }
}

impl Overview {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!("\n📊 {}", "Current status".bold());
        println!("  Activity: {}", self.current_activity);
        println!("  Mood:     {}", self.mood);
        if !self.active_projects.is_empty() {
            println!("  Projects: {}", self.active_projects.join(", "));
        }
        if !self.today_tasks.is_empty() {
            println!("  Today:    {}", self.today_tasks.join(", "));
        }
        if !self.last_updated.is_empty() {
            println!("  Updated:  {}", self.last_updated.dimmed());
        }

        println!("\n📋 {}", "Projects".bold());
        if self.events.is_empty() {
            println!("  (none)");
        }
        for event in &self.events {
            println!("  {}", event.line());
        }
    }
}

/// Result of `status`
#[derive(Debug, Clone, Serialize)]
pub struct StatusResult {
    /// Whether the update was saved
    pub success: bool,
    /// Fields that were overwritten
    pub updated: Vec<String>,
    /// Current activity after the update
    pub current_activity: String,
    /// Mood after the update
    pub mood: String,
    /// Active projects after the update
    pub active_projects: Vec<String>,
    /// Today's tasks after the update
    pub today_tasks: Vec<String>,
    /// New save time
    pub last_updated: String,
}

impl StatusResult {
    /// Build from the saved status block
    #[must_use]
    pub fn new(status: &Status, updated: Vec<String>) -> Self {
        Self {
            success: true,
            updated,
            current_activity: status.current_activity.clone(),
            mood: status.mood.clone(),
            active_projects: status.active_projects.clone(),
            today_tasks: status.today_tasks.clone(),
            last_updated: status.last_updated.clone(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("{} Status updated", "✅".green());
                if !self.updated.is_empty() {
                    println!("  Changed: {}", self.updated.join(", "));
                }
            },
            OutputMode::Json => render_json(self),
        }
    }
}

/// Result of `project`
#[derive(Debug, Clone, Serialize)]
pub struct ProjectResult {
    /// Whether an event with the ID exists
    pub found: bool,
    /// The ID that was looked up
    pub id: String,
    /// The event after the update, when found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<EventInfo>,
}

impl ProjectResult {
    /// An event was updated
    #[must_use]
    pub fn updated(event: &Event) -> Self {
        Self {
            found: true,
            id: event.id.clone(),
            event: Some(EventInfo::from(event)),
        }
    }

    /// No event has this ID; nothing was written
    #[must_use]
    pub fn not_found(id: &str) -> Self {
        Self {
            found: false,
            id: id.to_string(),
            event: None,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => match &self.event {
                Some(event) => println!("{} {} updated", "✅".green(), event.title),
                None => println!("{} Project not found: {}", "❌".red(), self.id),
            },
            OutputMode::Json => render_json(self),
        }
    }
}

/// Result of `push`
#[derive(Debug, Clone, Serialize)]
pub struct PublishResult {
    /// Whether every step succeeded
    pub success: bool,
    /// Steps that ran, in order
    pub steps: Vec<StepKind>,
    /// Message of the new commit
    pub commit_message: String,
    /// Dashboard the deployment updates
    pub dashboard_url: String,
    /// Rough deployment delay after the push
    pub deploy_wait_secs: u64,
}

impl PublishResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("{} Pushed to remote", "✅".green());
                println!(
                    "🚀 Deploying... ready in about {} seconds",
                    self.deploy_wait_secs
                );
                println!("📍 {}", self.dashboard_url.underline());
            },
            OutputMode::Json => render_json(self),
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
