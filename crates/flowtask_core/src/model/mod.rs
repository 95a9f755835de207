//! Domain model for tasks and the lists that group them.
//!
//! # Responsibility
//! - Define the canonical records returned by the services.
//! - Define the explicit create/update inputs accepted by the services.
//!
//! # Invariants
//! - Every record carries a service-assigned string `id`.
//! - Updates go through `TaskPatch` / `ListPatch`; no other field is mutable.

use std::fmt::{Display, Formatter};

pub mod list;
pub mod task;

/// Entity family, used in error messages and log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Task,
    List,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::List => "list",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
