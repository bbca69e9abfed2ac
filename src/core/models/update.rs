//! Partial updates
//!
//! `None` always means "leave unchanged". For the list fields,
//! `Some(Vec::new())` is a real overwrite that clears the list.

/// Fields to overwrite in the status block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusUpdate {
    /// New current activity
    pub activity: Option<String>,
    /// New mood
    pub mood: Option<String>,
    /// New active project list
    pub projects: Option<Vec<String>>,
    /// New task list for today
    pub tasks: Option<Vec<String>>,
}

impl StatusUpdate {
    /// Set the current activity
    #[must_use]
    pub fn activity(mut self, activity: impl Into<String>) -> Self {
        self.activity = Some(activity.into());
        self
    }

    /// Set the mood
    #[must_use]
    pub fn mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = Some(mood.into());
        self
    }

    /// Replace the active project list
    #[must_use]
    pub fn projects(mut self, projects: Vec<String>) -> Self {
        self.projects = Some(projects);
        self
    }

    /// Replace today's task list
    #[must_use]
    pub fn tasks(mut self, tasks: Vec<String>) -> Self {
        self.tasks = Some(tasks);
        self
    }

    /// True when no field would change
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.activity.is_none() && self.mood.is_none() && self.projects.is_none() && self.tasks.is_none()
    }
}

/// Fields to overwrite on a single event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectUpdate {
    /// New progress percentage
    pub progress: Option<u8>,
    /// New status label
    pub status: Option<String>,
}

impl ProjectUpdate {
    /// Set the progress percentage
    #[must_use]
    pub fn progress(mut self, progress: u8) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Set the status label
    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}
