//! Task CRUD service.
//!
//! # Responsibility
//! - Assign ids and timestamps for created tasks.
//! - Apply partial updates and refresh `updated_at`.
//!
//! # Invariants
//! - No field validation happens here; the form layer owns it.
//! - Log events carry ids and counts only, never titles or descriptions.

use crate::model::task::{Task, TaskDraft, TaskPatch};
use crate::model::EntityKind;
use crate::service::{EntityService, ServiceError, ServiceOptions, ServiceResult};
use crate::store::{DuplicateIdError, EntityStore};
use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info, warn};

/// In-memory task service.
#[derive(Debug)]
pub struct TaskService {
    store: EntityStore<Task>,
    options: ServiceOptions,
}

impl TaskService {
    /// Creates a service seeded with `tasks`.
    ///
    /// # Errors
    /// - `DuplicateIdError` when two seed records share an id.
    pub fn with_options(
        tasks: Vec<Task>,
        options: ServiceOptions,
    ) -> Result<Self, DuplicateIdError> {
        let store = EntityStore::new(tasks)?;
        info!(
            "event=service_init module=service entity=task status=ok seeded={} latency_ms={}",
            store.len(),
            options.latency.as_duration().as_millis()
        );
        Ok(Self { store, options })
    }
}

#[async_trait]
impl EntityService for TaskService {
    type Entity = Task;
    type Draft = TaskDraft;
    type Patch = TaskPatch;

    async fn get_all(&self) -> Vec<Task> {
        self.options.latency.simulate().await;
        let tasks = self.store.snapshot();
        debug!(
            "event=task_list module=service status=ok count={}",
            tasks.len()
        );
        tasks
    }

    async fn get_by_id(&self, id: &str) -> Option<Task> {
        self.options.latency.simulate().await;
        let task = self.store.find(id);
        debug!(
            "event=task_get module=service status=ok id={id} found={}",
            task.is_some()
        );
        task
    }

    async fn create(&self, draft: TaskDraft) -> Task {
        self.options.latency.simulate().await;
        let now = Utc::now();
        let task = self
            .store
            .insert_with_fresh_id(self.options.ids.as_ref(), |id| {
                Task::from_draft(id, draft, now)
            });
        info!(
            "event=task_create module=service status=ok id={} list_id={}",
            task.id, task.list_id
        );
        task
    }

    async fn update(&self, id: &str, patch: TaskPatch) -> ServiceResult<Task> {
        self.options.latency.simulate().await;
        let now = Utc::now();
        match self.store.modify(id, |task| task.apply_patch(patch, now)) {
            Some(task) => {
                info!("event=task_update module=service status=ok id={id}");
                Ok(task)
            }
            None => {
                warn!("event=task_update module=service status=error error_code=not_found id={id}");
                Err(ServiceError::not_found(EntityKind::Task, id))
            }
        }
    }

    async fn delete(&self, id: &str) -> ServiceResult<bool> {
        self.options.latency.simulate().await;
        if self.store.remove(id) {
            info!("event=task_delete module=service status=ok id={id}");
            Ok(true)
        } else {
            warn!("event=task_delete module=service status=error error_code=not_found id={id}");
            Err(ServiceError::not_found(EntityKind::Task, id))
        }
    }
}
