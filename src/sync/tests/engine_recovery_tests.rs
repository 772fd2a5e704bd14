//! Reconciliation behaviour on missing endpoints: recreation, deletion
//! propagation, orphan cleanup, and completed-task admission.

use super::fixtures::{completed_task, engine_with, open_task};
use crate::sync::adapters::InMemoryTaskService;
use crate::sync::domain::{SyncStatus, Task, TaskId, TaskMap};
use crate::sync::services::SyncOptions;
use rstest::rstest;

#[rstest]
fn lost_destination_is_recreated_for_open_source() {
    let source = InMemoryTaskService::with_tasks([open_task("s1", "survivor")]);
    let destination = InMemoryTaskService::new();
    let mut map = TaskMap::new();
    map.map(TaskId::from("s1"), TaskId::from("d-lost"))
        .expect("stale mapping");
    let mut engine = engine_with(&source, &destination, map, None);

    let stats = engine.synchronise(SyncOptions::new()).expect("sync");

    assert_eq!(stats.created, 1);
    assert_eq!(stats.skipped, 0);
    assert_eq!(engine.map().len(), 1, "still exactly one mapping");
    assert_eq!(engine.map().try_source_for(&TaskId::from("d-lost")), None);
    let fresh = engine
        .map()
        .destination_for(&TaskId::from("s1"))
        .expect("fresh mapping");
    assert_ne!(fresh, &TaskId::from("d-lost"));

    let persisted = destination.last_persisted().expect("persisted list");
    assert_eq!(persisted.first().map(Task::status), Some(SyncStatus::New));
    let stored = destination.tasks().expect("snapshot");
    assert_eq!(
        stored.first().map(|t| t.name().to_owned()),
        Some("survivor".to_owned())
    );
}

#[rstest]
fn lost_destination_is_ignored_for_completed_source() {
    let source = InMemoryTaskService::with_tasks([completed_task("s1", "already done")]);
    let destination = InMemoryTaskService::new();
    let mut map = TaskMap::new();
    map.map(TaskId::from("s1"), TaskId::from("d-lost"))
        .expect("stale mapping");
    let mut engine = engine_with(&source, &destination, map, None);

    let stats = engine.synchronise(SyncOptions::new()).expect("sync");

    assert_eq!(stats.skipped, 1);
    assert_eq!(stats.created, 0);
    assert!(destination.tasks().expect("snapshot").is_empty());
    assert_eq!(
        engine.map().destination_for(&TaskId::from("s1")),
        Ok(&TaskId::from("d-lost")),
        "stale mapping deliberately left in place"
    );
}

#[rstest]
fn vanished_source_flags_destination_as_deleted() {
    let source = InMemoryTaskService::new();
    let destination = InMemoryTaskService::with_tasks([open_task("d1", "left behind")]);
    let mut map = TaskMap::new();
    map.map(TaskId::from("s-gone"), TaskId::from("d1"))
        .expect("mapping to vanished source");
    let mut engine = engine_with(&source, &destination, map, None);

    let stats = engine.synchronise(SyncOptions::new()).expect("sync");

    assert_eq!(stats.deleted, 1);
    let persisted = destination.last_persisted().expect("persisted list");
    assert_eq!(persisted.len(), 1, "flagged task stays in the handed-over list");
    assert_eq!(
        persisted.first().map(Task::status),
        Some(SyncStatus::Deleted)
    );
    assert!(
        destination.tasks().expect("snapshot").is_empty(),
        "persist layer carries out the removal"
    );
    assert_eq!(engine.map().len(), 1, "mapping survives without orphan cleaning");
}

#[rstest]
fn orphan_mappings_are_removed_when_requested() {
    let source = InMemoryTaskService::with_tasks([open_task("s1", "alive")]);
    let destination = InMemoryTaskService::new();
    let mut map = TaskMap::new();
    for n in ["one", "two", "three"] {
        map.map(
            TaskId::new(format!("orphan-src-{n}")),
            TaskId::new(format!("orphan-dst-{n}")),
        )
        .expect("orphan mapping");
    }
    let mut engine = engine_with(&source, &destination, map, None);

    let stats = engine
        .synchronise(SyncOptions::new().with_clean_orphans(true))
        .expect("sync");

    assert_eq!(stats.created, 1);
    assert_eq!(engine.map().len(), 1, "only the live pair remains");
    assert!(
        engine
            .map()
            .destination_for(&TaskId::from("s1"))
            .is_ok()
    );
}

#[rstest]
fn orphan_mappings_are_kept_by_default() {
    let source = InMemoryTaskService::with_tasks([open_task("s1", "alive")]);
    let destination = InMemoryTaskService::new();
    let mut map = TaskMap::new();
    map.map(TaskId::from("orphan-src"), TaskId::from("orphan-dst"))
        .expect("orphan mapping");
    let mut engine = engine_with(&source, &destination, map, None);

    engine.synchronise(SyncOptions::new()).expect("sync");

    assert_eq!(engine.map().len(), 2);
    assert_eq!(
        engine.map().destination_for(&TaskId::from("orphan-src")),
        Ok(&TaskId::from("orphan-dst"))
    );
}

#[rstest]
fn completed_new_source_is_not_materialised_by_default() {
    let source = InMemoryTaskService::with_tasks([completed_task("s1", "finished upstream")]);
    let destination = InMemoryTaskService::new();
    let mut engine = engine_with(&source, &destination, TaskMap::new(), None);

    let stats = engine.synchronise(SyncOptions::new()).expect("sync");

    assert_eq!(stats.created, 0);
    assert!(destination.tasks().expect("snapshot").is_empty());
    assert!(engine.map().is_empty());
}

#[rstest]
fn completed_new_source_is_materialised_on_request() {
    let source = InMemoryTaskService::with_tasks([completed_task("s1", "finished upstream")]);
    let destination = InMemoryTaskService::new();
    let mut engine = engine_with(&source, &destination, TaskMap::new(), None);

    let stats = engine
        .synchronise(SyncOptions::new().with_sync_completed_new_tasks(true))
        .expect("sync");

    assert_eq!(stats.created, 1);
    let stored = destination.tasks().expect("snapshot");
    assert_eq!(stored.first().map(|t| t.completed()), Some(true));
    assert!(engine.map().destination_for(&TaskId::from("s1")).is_ok());
}
