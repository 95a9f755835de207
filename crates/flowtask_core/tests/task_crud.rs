use flowtask_core::{
    DuplicateIdError, EntityKind, EntityService, FormError, ListSelection, Priority, SeedData, SequentialIds,
    ServiceError, ServiceOptions, Task, TaskDraft, TaskForm, TaskPatch, TaskService,
};
use std::collections::HashSet;
use std::sync::Arc;

const BUY_MILK_SEED: &str = r#"{
    "tasks": [{
        "id": "1",
        "title": "Buy milk",
        "completed": false,
        "archived": false,
        "listId": "l1",
        "priority": "low",
        "createdAt": "2024-01-01T08:00:00Z",
        "updatedAt": "2024-01-01T08:00:00Z"
    }]
}"#;

fn seeded_service() -> TaskService {
    let seed = SeedData::from_json(BUY_MILK_SEED).unwrap();
    TaskService::with_options(seed.tasks, ServiceOptions::immediate()).unwrap()
}

fn embedded_service() -> TaskService {
    let seed = SeedData::embedded().unwrap();
    TaskService::with_options(seed.tasks, ServiceOptions::immediate()).unwrap()
}

#[tokio::test]
async fn update_then_delete_buy_milk() {
    let service = seeded_service();
    let original = service.get_by_id("1").await.unwrap();

    let updated = service.update("1", TaskPatch::completed(true)).await.unwrap();
    assert_eq!(updated.id, "1");
    assert_eq!(updated.title, "Buy milk");
    assert!(updated.completed);
    assert!(!updated.archived);
    assert_eq!(updated.list_id, "l1");
    assert_eq!(updated.priority, Priority::Low);
    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.updated_at > original.updated_at);

    assert!(service.delete("1").await.unwrap());
    assert_eq!(service.get_by_id("1").await, None);
}

#[tokio::test]
async fn get_all_is_stable_without_mutation() {
    let service = embedded_service();

    let first = service.get_all().await;
    let second = service.get_all().await;

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[tokio::test]
async fn returned_copies_do_not_alias_the_store() {
    let service = seeded_service();

    let mut all = service.get_all().await;
    all[0].title = "mutated".to_string();
    all.clear();
    let mut one = service.get_by_id("1").await.unwrap();
    one.completed = true;
    let mut created = service.create(TaskDraft::new("new", "l1")).await;
    created.title = "mutated too".to_string();

    let stored = service.get_by_id("1").await.unwrap();
    assert_eq!(stored.title, "Buy milk");
    assert!(!stored.completed);
    let stored_created = service.get_by_id(&created.id).await.unwrap();
    assert_eq!(stored_created.title, "new");
}

#[tokio::test]
async fn create_assigns_fresh_id_and_reads_back_equal() {
    let service = embedded_service();
    let existing: HashSet<String> = service.get_all().await.into_iter().map(|t| t.id).collect();

    let mut draft = TaskDraft::new("Water plants", "1");
    draft.priority = Priority::High;
    draft.description = Some("balcony".to_string());
    let created = service.create(draft).await;

    assert!(!existing.contains(&created.id));
    assert_eq!(created.created_at, created.updated_at);
    assert_eq!(service.get_by_id(&created.id).await, Some(created.clone()));
    assert_eq!(service.get_all().await.last(), Some(&created));
}

#[tokio::test]
async fn rapid_creates_never_share_an_id() {
    let service = embedded_service();

    let mut ids = HashSet::new();
    for n in 0..50 {
        let task = service.create(TaskDraft::new(format!("task {n}"), "1")).await;
        assert!(ids.insert(task.id));
    }
}

#[tokio::test]
async fn sequential_ids_skip_seeded_ids() {
    let seed = SeedData::from_json(BUY_MILK_SEED).unwrap();
    let options = ServiceOptions::immediate().with_ids(Arc::new(SequentialIds::new("")));
    let service = TaskService::with_options(seed.tasks, options).unwrap();

    let created = service.create(TaskDraft::new("second", "l1")).await;
    assert_eq!(created.id, "2");
}

#[tokio::test]
async fn update_missing_id_fails_and_leaves_store_unchanged() {
    let service = embedded_service();
    let before = service.get_all().await;

    let err = service
        .update("does-not-exist", TaskPatch::completed(true))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ServiceError::NotFound {
            kind: EntityKind::Task,
            id: "does-not-exist".to_string()
        }
    );
    assert_eq!(service.get_all().await, before);
}

#[tokio::test]
async fn single_field_update_preserves_other_fields() {
    let service = embedded_service();
    let before = service.get_by_id("2").await.unwrap();

    let patch = TaskPatch {
        priority: Some(Priority::Low),
        ..TaskPatch::default()
    };
    let after = service.update("2", patch).await.unwrap();

    let expected = Task {
        priority: Priority::Low,
        updated_at: after.updated_at,
        ..before.clone()
    };
    assert_eq!(after, expected);
    assert!(after.updated_at >= before.updated_at);
}

#[tokio::test]
async fn delete_missing_id_fails_with_not_found() {
    let service = embedded_service();
    let before = service.get_all().await;

    let err = service.delete("nope").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "task not found: nope");
    assert_eq!(service.get_all().await, before);
}

#[tokio::test]
async fn delete_preserves_order_of_remaining_tasks() {
    let service = embedded_service();
    let mut expected: Vec<String> = service.get_all().await.into_iter().map(|t| t.id).collect();
    expected.retain(|id| id != "3");

    assert!(service.delete("3").await.unwrap());
    let remaining: Vec<String> = service.get_all().await.into_iter().map(|t| t.id).collect();
    assert_eq!(remaining, expected);
}

#[tokio::test]
async fn service_accepts_empty_title_but_form_rejects_it() {
    let service = seeded_service();

    let created = service.create(TaskDraft::new("", "l1")).await;
    assert_eq!(created.title, "");
    assert!(service.get_by_id(&created.id).await.is_some());

    let form = TaskForm::new(&ListSelection::All, &[]);
    assert_eq!(form.into_draft(), Err(FormError::TitleRequired));
}

#[tokio::test]
async fn task_list_id_is_not_validated() {
    let service = seeded_service();
    let created = service.create(TaskDraft::new("orphan", "no-such-list")).await;
    assert_eq!(created.list_id, "no-such-list");
}

#[tokio::test]
async fn constructor_rejects_seed_with_repeated_id() {
    let mut tasks = SeedData::embedded().unwrap().tasks;
    let mut copy = tasks[0].clone();
    copy.title = "dup".to_string();
    tasks.push(copy);

    let err = TaskService::with_options(tasks, ServiceOptions::immediate()).unwrap_err();
    assert_eq!(
        err,
        DuplicateIdError {
            kind: EntityKind::Task,
            id: "1".to_string()
        }
    );
}

#[tokio::test]
async fn delete_removes_the_only_record_with_that_id() {
    let service = embedded_service();

    assert!(service.delete("1").await.unwrap());
    assert_eq!(service.get_by_id("1").await, None);
    assert!(service.get_all().await.iter().all(|task| task.id != "1"));
}
