//! Composition root owning both services.
//!
//! # Responsibility
//! - Build the task and list services from configuration and seed data.
//! - Load the full board with both reads in flight at once.
//!
//! # Invariants
//! - Each `FlowTask` owns its own stores; nothing is process-global.

use crate::config::AppConfig;
use crate::model::list::List;
use crate::model::task::Task;
use crate::seed::{SeedData, SeedError};
use crate::service::list_service::ListService;
use crate::service::task_service::TaskService;
use crate::service::{EntityService, ServiceOptions};
use crate::store::DuplicateIdError;
use crate::view::{filter_tasks, CompletionStats, SidebarCounts, TaskFilter};
use log::info;
use std::time::Instant;

/// Snapshot of every task and list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    pub tasks: Vec<Task>,
    pub lists: Vec<List>,
}

impl Board {
    pub fn visible_tasks(&self, filter: &TaskFilter) -> Vec<Task> {
        filter_tasks(&self.tasks, filter)
    }

    pub fn completion(&self, filter: &TaskFilter) -> CompletionStats {
        CompletionStats::from_tasks(&self.visible_tasks(filter))
    }

    pub fn sidebar(&self) -> SidebarCounts {
        SidebarCounts::compute(&self.tasks, &self.lists)
    }
}

/// Application state: one task service and one list service.
#[derive(Debug)]
pub struct FlowTask {
    tasks: TaskService,
    lists: ListService,
}

impl FlowTask {
    pub fn new(seed: SeedData, options: ServiceOptions) -> Result<Self, DuplicateIdError> {
        Ok(Self {
            tasks: TaskService::with_options(seed.tasks, options.clone())?,
            lists: ListService::with_options(seed.lists, options)?,
        })
    }

    /// Builds services with the configured latency and seed dataset.
    pub fn from_config(config: &AppConfig) -> Result<Self, SeedError> {
        let seed = match config.seed_path.as_deref() {
            Some(path) => SeedData::from_path(path)?,
            None => SeedData::embedded()?,
        };
        info!(
            "event=app_init module=app status=ok seed={} tasks={} lists={}",
            if config.seed_path.is_some() { "file" } else { "embedded" },
            seed.tasks.len(),
            seed.lists.len()
        );
        let options = ServiceOptions::default().with_latency(config.latency);
        Ok(Self::new(seed, options)?)
    }

    pub fn tasks(&self) -> &TaskService {
        &self.tasks
    }

    pub fn lists(&self) -> &ListService {
        &self.lists
    }

    /// Fetches tasks and lists concurrently.
    pub async fn load_board(&self) -> Board {
        let started_at = Instant::now();
        let (tasks, lists) = tokio::join!(self.tasks.get_all(), self.lists.get_all());
        info!(
            "event=board_load module=app status=ok tasks={} lists={} duration_ms={}",
            tasks.len(),
            lists.len(),
            started_at.elapsed().as_millis()
        );
        Board { tasks, lists }
    }
}
