//! List CRUD service.
//!
//! # Invariants
//! - Created lists start with `task_count = 0`; the count is never updated.
//! - Deleting a list leaves tasks that reference it untouched.

use crate::model::list::{List, ListDraft, ListPatch};
use crate::model::EntityKind;
use crate::service::{EntityService, ServiceError, ServiceOptions, ServiceResult};
use crate::store::{DuplicateIdError, EntityStore};
use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info, warn};

/// In-memory list service.
#[derive(Debug)]
pub struct ListService {
    store: EntityStore<List>,
    options: ServiceOptions,
}

impl ListService {
    /// Creates a service seeded with `lists`.
    ///
    /// # Errors
    /// - `DuplicateIdError` when two seed records share an id.
    pub fn with_options(
        lists: Vec<List>,
        options: ServiceOptions,
    ) -> Result<Self, DuplicateIdError> {
        let store = EntityStore::new(lists)?;
        info!(
            "event=service_init module=service entity=list status=ok seeded={} latency_ms={}",
            store.len(),
            options.latency.as_duration().as_millis()
        );
        Ok(Self { store, options })
    }
}

#[async_trait]
impl EntityService for ListService {
    type Entity = List;
    type Draft = ListDraft;
    type Patch = ListPatch;

    async fn get_all(&self) -> Vec<List> {
        self.options.latency.simulate().await;
        let lists = self.store.snapshot();
        debug!(
            "event=list_list module=service status=ok count={}",
            lists.len()
        );
        lists
    }

    async fn get_by_id(&self, id: &str) -> Option<List> {
        self.options.latency.simulate().await;
        let list = self.store.find(id);
        debug!(
            "event=list_get module=service status=ok id={id} found={}",
            list.is_some()
        );
        list
    }

    async fn create(&self, draft: ListDraft) -> List {
        self.options.latency.simulate().await;
        let now = Utc::now();
        let list = self
            .store
            .insert_with_fresh_id(self.options.ids.as_ref(), |id| {
                List::from_draft(id, draft, now)
            });
        info!("event=list_create module=service status=ok id={}", list.id);
        list
    }

    async fn update(&self, id: &str, patch: ListPatch) -> ServiceResult<List> {
        self.options.latency.simulate().await;
        match self.store.modify(id, |list| list.apply_patch(patch)) {
            Some(list) => {
                info!("event=list_update module=service status=ok id={id}");
                Ok(list)
            }
            None => {
                warn!("event=list_update module=service status=error error_code=not_found id={id}");
                Err(ServiceError::not_found(EntityKind::List, id))
            }
        }
    }

    async fn delete(&self, id: &str) -> ServiceResult<bool> {
        self.options.latency.simulate().await;
        if self.store.remove(id) {
            info!("event=list_delete module=service status=ok id={id}");
            Ok(true)
        } else {
            warn!("event=list_delete module=service status=error error_code=not_found id={id}");
            Err(ServiceError::not_found(EntityKind::List, id))
        }
    }
}
