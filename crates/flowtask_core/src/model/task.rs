//! Task domain model.
//!
//! # Responsibility
//! - Define the task record and its priority scale.
//! - Apply create drafts and partial patches with service-owned timestamps.
//!
//! # Invariants
//! - `id`, `created_at` and `updated_at` are never taken from caller input.
//! - `list_id` is a plain reference; it is not checked against stored lists.

use crate::model::list::ListId;
use crate::model::EntityKind;
use crate::store::Entity;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Opaque task identifier.
pub type TaskId = String;

/// Task urgency shown as a badge by task views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Stored task record.
///
/// Serialized with camelCase keys (`listId`, `dueDate`, `updatedAt`) to match
/// the seed dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub list_id: ListId,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Builds a stored record from a draft, assigning identity and timestamps.
    ///
    /// `updated_at` starts equal to `created_at`.
    pub fn from_draft(id: TaskId, draft: TaskDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            list_id: draft.list_id,
            priority: draft.priority,
            due_date: draft.due_date,
            completed: draft.completed,
            archived: draft.archived,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies present patch fields and refreshes `updated_at`.
    pub fn apply_patch(&mut self, patch: TaskPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(list_id) = patch.list_id {
            self.list_id = list_id;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(archived) = patch.archived {
            self.archived = archived;
        }
        self.updated_at = now;
    }

    /// Case-insensitive substring match against title or description.
    pub fn matches_search(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&needle)
            || self
                .description
                .as_deref()
                .is_some_and(|description| description.to_lowercase().contains(&needle))
    }
}

impl Entity for Task {
    const KIND: EntityKind = EntityKind::Task;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Caller-supplied fields for task creation.
///
/// The service performs no validation; an empty title is accepted here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub list_id: ListId,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
    pub archived: bool,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>, list_id: impl Into<ListId>) -> Self {
        Self {
            title: title.into(),
            list_id: list_id.into(),
            ..Self::default()
        }
    }
}

/// Partial task update. `None` leaves the stored field unchanged.
///
/// `description` and `due_date` are clearable: `Some(None)` removes the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub list_id: Option<ListId>,
    pub priority: Option<Priority>,
    pub due_date: Option<Option<NaiveDate>>,
    pub completed: Option<bool>,
    pub archived: Option<bool>,
}

impl TaskPatch {
    pub fn completed(value: bool) -> Self {
        Self {
            completed: Some(value),
            ..Self::default()
        }
    }

    pub fn archived(value: bool) -> Self {
        Self {
            archived: Some(value),
            ..Self::default()
        }
    }
}
