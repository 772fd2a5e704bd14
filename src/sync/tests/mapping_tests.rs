//! Tests for the bijective task identifier map.

use crate::sync::domain::{TaskId, TaskMap, TaskMapError};
use rstest::{fixture, rstest};

#[fixture]
fn mapped() -> TaskMap {
    let mut map = TaskMap::new();
    map.map(TaskId::from("src-a"), TaskId::from("dst-a"))
        .expect("first mapping");
    map
}

#[rstest]
fn map_and_lookup_round_trip(mut mapped: TaskMap) {
    mapped
        .map(TaskId::from("src-b"), TaskId::from("dst-b"))
        .expect("second mapping");

    assert_eq!(
        mapped.destination_for(&TaskId::from("src-a")),
        Ok(&TaskId::from("dst-a"))
    );
    assert_eq!(
        mapped.source_for(&TaskId::from("dst-b")),
        Ok(&TaskId::from("src-b"))
    );
    assert_eq!(
        mapped.try_destination_for(&TaskId::from("src-b")),
        Some(&TaskId::from("dst-b"))
    );
    assert_eq!(mapped.try_source_for(&TaskId::from("dst-c")), None);
    assert_eq!(mapped.len(), 2);
    assert!(!mapped.is_empty());
}

#[rstest]
fn strict_lookups_fail_when_absent(mapped: TaskMap) {
    assert_eq!(
        mapped.destination_for(&TaskId::from("src-x")),
        Err(TaskMapError::NotFound(TaskId::from("src-x")))
    );
    assert_eq!(
        mapped.source_for(&TaskId::from("dst-x")),
        Err(TaskMapError::NotFound(TaskId::from("dst-x")))
    );
}

#[rstest]
fn duplicate_source_is_rejected_and_map_unchanged(mut mapped: TaskMap) {
    let result = mapped.map(TaskId::from("src-a"), TaskId::from("dst-other"));

    assert_eq!(
        result,
        Err(TaskMapError::DuplicateSource(TaskId::from("src-a")))
    );
    assert_eq!(
        mapped.destination_for(&TaskId::from("src-a")),
        Ok(&TaskId::from("dst-a"))
    );
    assert_eq!(mapped.try_source_for(&TaskId::from("dst-other")), None);
    assert_eq!(mapped.len(), 1);
}

#[rstest]
fn duplicate_destination_is_rejected_and_map_unchanged(mut mapped: TaskMap) {
    let result = mapped.map(TaskId::from("src-other"), TaskId::from("dst-a"));

    assert_eq!(
        result,
        Err(TaskMapError::DuplicateDestination(TaskId::from("dst-a")))
    );
    assert_eq!(mapped.try_destination_for(&TaskId::from("src-other")), None);
    assert_eq!(mapped.len(), 1);
}

#[rstest]
fn duplicate_pair_is_rejected_as_both(mut mapped: TaskMap) {
    let result = mapped.map(TaskId::from("src-a"), TaskId::from("dst-a"));

    assert_eq!(
        result,
        Err(TaskMapError::DuplicateBoth(
            TaskId::from("src-a"),
            TaskId::from("dst-a")
        ))
    );
    assert_eq!(mapped.len(), 1);
}

#[rstest]
fn unmap_removes_both_directions(mut mapped: TaskMap) {
    mapped.unmap(&TaskId::from("src-a"));

    assert_eq!(mapped.try_destination_for(&TaskId::from("src-a")), None);
    assert_eq!(mapped.try_source_for(&TaskId::from("dst-a")), None);
    assert!(mapped.is_empty());
}

#[rstest]
fn unmap_of_unknown_source_is_silent(mut mapped: TaskMap) {
    mapped.unmap(&TaskId::from("src-unknown"));

    assert_eq!(mapped.len(), 1);
}

#[rstest]
fn unmapped_pair_can_be_remapped(mut mapped: TaskMap) {
    mapped.unmap(&TaskId::from("src-a"));
    mapped
        .map(TaskId::from("src-a"), TaskId::from("dst-new"))
        .expect("remapping after unmap");

    assert_eq!(
        mapped.destination_for(&TaskId::from("src-a")),
        Ok(&TaskId::from("dst-new"))
    );
}

#[rstest]
fn enumerations_expose_current_keys() {
    let mut map = TaskMap::new();
    map.map(TaskId::from("s1"), TaskId::from("d1"))
        .expect("mapping s1");
    map.map(TaskId::from("s2"), TaskId::from("d2"))
        .expect("mapping s2");

    let mut sources: Vec<&TaskId> = map.source_ids().collect();
    sources.sort();
    assert_eq!(sources, vec![&TaskId::from("s1"), &TaskId::from("s2")]);

    let mut destinations: Vec<&TaskId> = map.destination_ids().collect();
    destinations.sort();
    assert_eq!(destinations, vec![&TaskId::from("d1"), &TaskId::from("d2")]);
}

#[rstest]
fn from_entries_rejects_duplicates() {
    let result = TaskMap::from_entries([
        (TaskId::from("s1"), TaskId::from("d1")),
        (TaskId::from("s1"), TaskId::from("d2")),
    ]);

    assert_eq!(result, Err(TaskMapError::DuplicateSource(TaskId::from("s1"))));
}
