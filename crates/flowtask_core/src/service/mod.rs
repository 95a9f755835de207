//! Core CRUD services.
//!
//! # Responsibility
//! - Expose the shared async CRUD contract consumed by views and the CLI.
//! - Own the in-memory stores; callers only ever see copies.
//!
//! # Invariants
//! - `update` and `delete` are the only fallible operations, and they fail
//!   only with `ServiceError::NotFound`.
//! - Every operation awaits the configured latency before touching the store.

use crate::ids::{IdGenerator, UuidIds};
use crate::latency::Latency;
use crate::model::EntityKind;
use async_trait::async_trait;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

pub mod list_service;
pub mod task_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Domain error raised by service mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    NotFound { kind: EntityKind, id: String },
}

impl ServiceError {
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
        }
    }
}

impl Error for ServiceError {}

/// CRUD contract shared by the task and list services.
#[async_trait]
pub trait EntityService: Send + Sync {
    type Entity: Clone + Send + Sync;
    type Draft: Send + 'static;
    type Patch: Send + 'static;

    /// Returns copies of every record in insertion order. Never fails.
    async fn get_all(&self) -> Vec<Self::Entity>;

    /// Returns a copy of the record, or `None` when the id is unknown.
    async fn get_by_id(&self, id: &str) -> Option<Self::Entity>;

    /// Stores a new record under a fresh id. Performs no validation.
    async fn create(&self, draft: Self::Draft) -> Self::Entity;

    /// Applies the fields present in `patch` to an existing record.
    async fn update(&self, id: &str, patch: Self::Patch) -> ServiceResult<Self::Entity>;

    /// Removes a record. Returns `true` on success.
    async fn delete(&self, id: &str) -> ServiceResult<bool>;
}

/// Construction options shared by both services.
#[derive(Clone)]
pub struct ServiceOptions {
    pub latency: Latency,
    pub ids: Arc<dyn IdGenerator>,
}

impl ServiceOptions {
    /// Zero-latency options with UUID ids.
    pub fn immediate() -> Self {
        Self::default().with_latency(Latency::None)
    }

    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_ids(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            latency: Latency::default(),
            ids: Arc::new(UuidIds),
        }
    }
}

impl Debug for ServiceOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceOptions")
            .field("latency", &self.latency)
            .finish_non_exhaustive()
    }
}
