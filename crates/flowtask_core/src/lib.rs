//! Core data and service layer for FlowTask.
//! Views, the CLI and tests all go through the services defined here.

pub mod app;
pub mod config;
pub mod ids;
pub mod latency;
pub mod logging;
pub mod model;
pub mod seed;
pub mod service;
pub mod store;
pub mod view;

pub use app::{Board, FlowTask};
pub use config::{AppConfig, ConfigError};
pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use latency::{Latency, DEFAULT_LATENCY};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::list::{List, ListDraft, ListId, ListPatch};
pub use model::task::{Priority, Task, TaskDraft, TaskId, TaskPatch};
pub use model::EntityKind;
pub use seed::{SeedData, SeedError};
pub use service::list_service::ListService;
pub use service::task_service::TaskService;
pub use service::{EntityService, ServiceError, ServiceOptions, ServiceResult};
pub use store::DuplicateIdError;
pub use view::actions::{toggle_archive, toggle_complete};
pub use view::form::{FormError, TaskForm};
pub use view::{
    filter_tasks, list_color, list_name, CompletionStats, ListSelection, SidebarCounts, TaskFilter,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
