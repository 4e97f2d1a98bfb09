use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A task document as stored and returned by the API.
///
/// Priority and status are free-form strings rather than closed enums: tasks
/// are inserted as supplied, and the listing sort ranks any unrecognized
/// priority after High/Medium/Low. The due date is likewise kept as the
/// client-supplied string; ISO dates order chronologically under the plain
/// string sort the listing query uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier for the task (UUID v4), assigned at creation.
    pub id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    /// Timestamp of when the task was created, assigned server-side.
    pub created_at: DateTime<Utc>,
}

/// Input payload for creating or partially updating a task. Every field is
/// optional; creation stores whatever was supplied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
}

/// Picks the update value when it is present and non-empty, otherwise keeps
/// the stored value. Empty strings never overwrite.
fn first_truthy(updated: Option<String>, existing: Option<String>) -> Option<String> {
    match updated {
        Some(value) if !value.is_empty() => Some(value),
        _ => existing,
    }
}

impl Task {
    /// Creates a new `Task` from input, assigning a fresh UUID and the current
    /// time as the creation timestamp.
    pub fn new(input: TaskInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            due_date: input.due_date,
            priority: input.priority,
            status: input.status,
            created_at: Utc::now(),
        }
    }

    /// Merges a partial update over this task. For each field, the first
    /// non-empty supplied value wins; unsupplied or empty fields keep their
    /// stored value. Identifier and creation timestamp are never touched.
    pub fn merge(self, input: TaskInput) -> Self {
        Self {
            id: self.id,
            title: first_truthy(input.title, self.title),
            description: first_truthy(input.description, self.description),
            due_date: first_truthy(input.due_date, self.due_date),
            priority: first_truthy(input.priority, self.priority),
            status: first_truthy(input.status, self.status),
            created_at: self.created_at,
        }
    }
}
