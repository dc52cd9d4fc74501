//! Task records

use serde::{Deserialize, Serialize};

/// A stored task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique opaque identifier
    pub id: String,
    /// Short title, never empty
    pub title: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Due date as supplied by the client
    #[serde(default)]
    pub due_date: String,
    /// Free-form status, e.g. "Pending" or "Completed"
    #[serde(default)]
    pub status: String,
}

/// Input for creating a task
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    /// Short title, required
    #[serde(default)]
    pub title: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Due date as supplied by the client
    #[serde(default)]
    pub due_date: String,
    /// Free-form status
    #[serde(default)]
    pub status: String,
}

impl NewTask {
    /// Materialize the task with a generated identifier
    pub fn into_task(self) -> Task {
        Task {
            id: uuid::Uuid::new_v4().to_string(),
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            status: self.status,
        }
    }
}

/// Partial update: empty fields leave the stored value untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskUpdate {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub status: String,
}

impl TaskUpdate {
    /// Apply the non-empty fields of this update to `task`
    pub fn apply_to(self, task: &mut Task) {
        if !self.title.is_empty() {
            task.title = self.title;
        }
        if !self.description.is_empty() {
            task.description = self.description;
        }
        if !self.due_date.is_empty() {
            task.due_date = self.due_date;
        }
        if !self.status.is_empty() {
            task.status = self.status;
        }
    }
}
