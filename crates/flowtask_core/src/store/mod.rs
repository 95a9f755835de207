//! In-memory entity storage shared by the task and list services.
//!
//! # Responsibility
//! - Hold one ordered sequence of records per entity type.
//! - Hand out clones only; callers never borrow stored records.
//!
//! # Invariants
//! - Insertion order is the iteration order.
//! - Record ids are unique for the lifetime of the store.
//! - Every primitive takes the lock exactly once, so each call is atomic.
//! - The lock is never held across an `.await`.

use crate::ids::IdGenerator;
use crate::model::EntityKind;
use parking_lot::RwLock;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const MAX_GENERATED_ID_ATTEMPTS: usize = 16;

/// Record that can live in an `EntityStore`.
pub trait Entity: Clone + Send + Sync {
    const KIND: EntityKind;

    fn id(&self) -> &str;
}

/// Two initial records share one id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateIdError {
    pub kind: EntityKind,
    pub id: String,
}

impl Display for DuplicateIdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "duplicate {} id: {}", self.kind, self.id)
    }
}

impl Error for DuplicateIdError {}

/// Fails on the first id that appears more than once.
pub fn ensure_unique_ids<E: Entity>(records: &[E]) -> Result<(), DuplicateIdError> {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.id()) {
            return Err(DuplicateIdError {
                kind: E::KIND,
                id: record.id().to_string(),
            });
        }
    }
    Ok(())
}

/// Ordered in-memory record store.
#[derive(Debug)]
pub struct EntityStore<E: Entity> {
    records: RwLock<Vec<E>>,
}

impl<E: Entity> EntityStore<E> {
    /// Creates a store seeded with `records`, kept in the given order.
    ///
    /// Rejects seeds with repeated ids.
    pub fn new(records: Vec<E>) -> Result<Self, DuplicateIdError> {
        ensure_unique_ids(&records)?;
        Ok(Self {
            records: RwLock::new(records),
        })
    }

    /// Clones every record in insertion order.
    pub fn snapshot(&self) -> Vec<E> {
        self.records.read().clone()
    }

    pub fn find(&self, id: &str) -> Option<E> {
        self.records
            .read()
            .iter()
            .find(|record| record.id() == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Appends a record built around a freshly generated, unused id.
    ///
    /// Generated ids that already exist are skipped. A generator that keeps
    /// repeating itself falls back to random UUIDs.
    pub fn insert_with_fresh_id(
        &self,
        ids: &dyn IdGenerator,
        build: impl FnOnce(String) -> E,
    ) -> E {
        let mut records = self.records.write();
        let is_taken = |candidate: &str| records.iter().any(|record| record.id() == candidate);

        let mut id = ids.next_id();
        let mut attempts = 1;
        while is_taken(&id) {
            // Why: create has no error path, so a generator stuck on a taken
            // id must not loop forever; random UUIDs always terminate.
            id = if attempts < MAX_GENERATED_ID_ATTEMPTS {
                ids.next_id()
            } else {
                Uuid::new_v4().to_string()
            };
            attempts += 1;
        }

        let record = build(id);
        records.push(record.clone());
        record
    }

    /// Mutates the record with `id` in place and returns a clone of the result.
    ///
    /// Returns `None` without calling `apply` when no record matches.
    pub fn modify(&self, id: &str, apply: impl FnOnce(&mut E)) -> Option<E> {
        let mut records = self.records.write();
        let record = records.iter_mut().find(|record| record.id() == id)?;
        apply(record);
        Some(record.clone())
    }

    /// Removes the record with `id`, keeping the order of the rest.
    pub fn remove(&self, id: &str) -> bool {
        let mut records = self.records.write();
        match records.iter().position(|record| record.id() == id) {
            Some(index) => {
                records.remove(index);
                true
            }
            None => false,
        }
    }
}
