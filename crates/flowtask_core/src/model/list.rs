//! List domain model.
//!
//! # Invariants
//! - `task_count` is set to 0 on creation and is display-only; the services
//!   never recompute it. Live counts come from `view::SidebarCounts`.

use crate::model::EntityKind;
use crate::store::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque list identifier.
pub type ListId = String;

/// Stored list record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: ListId,
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub task_count: u32,
    pub created_at: DateTime<Utc>,
}

impl List {
    pub fn from_draft(id: ListId, draft: ListDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            color: draft.color,
            task_count: 0,
            created_at: now,
        }
    }

    pub fn apply_patch(&mut self, patch: ListPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
    }
}

impl Entity for List {
    const KIND: EntityKind = EntityKind::List;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Caller-supplied fields for list creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDraft {
    pub name: String,
    pub color: String,
}

impl ListDraft {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Partial list update. `None` leaves the stored field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPatch {
    pub name: Option<String>,
    pub color: Option<String>,
}

impl ListPatch {
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}
