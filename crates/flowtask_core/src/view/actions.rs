//! Single-click task actions issued from the board.

use crate::model::task::{Task, TaskPatch};
use crate::service::{EntityService, ServiceResult};

/// Flips `completed` on the stored task and returns the updated record.
pub async fn toggle_complete<S>(service: &S, task: &Task) -> ServiceResult<Task>
where
    S: EntityService<Entity = Task, Patch = TaskPatch> + ?Sized,
{
    service
        .update(&task.id, TaskPatch::completed(!task.completed))
        .await
}

/// Flips `archived` on the stored task and returns the updated record.
pub async fn toggle_archive<S>(service: &S, task: &Task) -> ServiceResult<Task>
where
    S: EntityService<Entity = Task, Patch = TaskPatch> + ?Sized,
{
    service
        .update(&task.id, TaskPatch::archived(!task.archived))
        .await
}
