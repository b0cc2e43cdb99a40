//! Integration tests for course stores

use std::fs;
use tempfile::TempDir;
use uds_gpa::models::{CourseId, CoursePatch, Grade, NewCourse, INSTITUTIONAL, STANDARD};
use uds_gpa::store::{CourseStore, JsonFileStore, MemoryStore, OwnerKey, StoreError};

fn owner(key: &str) -> OwnerKey {
    OwnerKey::new(key).expect("valid owner key")
}

fn entry(name: &str, credits: f64, grade: Grade) -> NewCourse {
    NewCourse::new(name, credits, grade).expect("valid course")
}

/// Shared behavior every store must satisfy
fn exercise_store(store: &mut impl CourseStore) {
    let ada = owner("ada");
    let grace = owner("grace@example.edu");

    let algebra = store.add(&ada, entry("Algebra", 3.0, Grade::A)).unwrap();
    let biology = store
        .add(
            &ada,
            entry("Biology", 2.0, Grade::BPlus).with_term(Some("2024/1".to_string())),
        )
        .unwrap();
    assert_ne!(algebra.id, biology.id);

    // Owners are isolated
    assert!(store.list(&grace).unwrap().is_empty());
    store.add(&grace, entry("Chemistry", 4.0, Grade::C)).unwrap();
    assert_eq!(store.list(&ada).unwrap().len(), 2);
    assert_eq!(store.list(&grace).unwrap().len(), 1);

    // Update keeps the id and changes only the given fields
    let patch = CoursePatch {
        grade: Some(Grade::APlus),
        term: Some(None),
        ..CoursePatch::default()
    };
    let updated = store.update(&ada, &biology.id, &patch).unwrap();
    assert_eq!(updated.id, biology.id);
    assert_eq!(updated.name, "Biology");
    assert_eq!(updated.grade, Grade::APlus);
    assert!(updated.term.is_none());
    assert_eq!(store.get(&ada, &biology.id).unwrap(), updated);

    // Insertion order survives updates
    let ids: Vec<CourseId> = store.list(&ada).unwrap().into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![algebra.id.clone(), biology.id.clone()]);

    // Removing an unknown id fails, removing a known one succeeds once
    assert!(matches!(
        store.remove(&ada, &CourseId::from("missing")),
        Err(StoreError::NotFound(_))
    ));
    let removed = store.remove(&ada, &algebra.id).unwrap();
    assert_eq!(removed.name, "Algebra");
    assert!(matches!(
        store.remove(&ada, &algebra.id),
        Err(StoreError::NotFound(_))
    ));

    // Clear touches only one owner
    assert_eq!(store.clear(&ada).unwrap(), 1);
    assert_eq!(store.clear(&ada).unwrap(), 0);
    assert_eq!(store.list(&grace).unwrap().len(), 1);
}

#[test]
fn test_memory_store_behavior() {
    let mut store = MemoryStore::new(&INSTITUTIONAL);
    exercise_store(&mut store);
}

#[test]
fn test_json_store_behavior() {
    let dir = TempDir::new().unwrap();
    let mut store = JsonFileStore::new(dir.path(), &INSTITUTIONAL);
    exercise_store(&mut store);
}

#[test]
fn test_json_store_persists_across_instances() {
    let dir = TempDir::new().unwrap();
    let ada = owner("ada");

    let added = {
        let mut store = JsonFileStore::new(dir.path(), &INSTITUTIONAL);
        store
            .add(
                &ada,
                entry("Statistics", 2.5, Grade::DPlus).with_term(Some("2023/2".to_string())),
            )
            .unwrap()
    };

    let reopened = JsonFileStore::new(dir.path(), &INSTITUTIONAL);
    let courses = reopened.list(&ada).unwrap();
    assert_eq!(courses, vec![added]);
}

#[test]
fn test_foreign_grade_is_rejected_on_add() {
    let dir = TempDir::new().unwrap();
    let mut store = JsonFileStore::new(dir.path(), &INSTITUTIONAL);
    let result = store.add(&owner("ada"), entry("Physics", 3.0, Grade::AMinus));
    assert!(matches!(result, Err(StoreError::InvalidCourse(_))));
    assert!(!store.path_for(&owner("ada")).exists());
}

#[test]
fn test_foreign_grade_is_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let ada = owner("ada");

    let mut standard = JsonFileStore::new(dir.path(), &STANDARD);
    standard
        .add(&ada, entry("Physics", 3.0, Grade::AMinus))
        .unwrap();

    let institutional = JsonFileStore::new(dir.path(), &INSTITUTIONAL);
    assert!(matches!(
        institutional.list(&ada),
        Err(StoreError::InvalidCourse(_))
    ));
}

#[test]
fn test_malformed_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path(), &INSTITUTIONAL);
    let ada = owner("ada");
    fs::write(store.path_for(&ada), "{ not json").unwrap();

    assert!(matches!(store.list(&ada), Err(StoreError::Malformed { .. })));
}

#[test]
fn test_owner_mismatch_is_reported() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path(), &INSTITUTIONAL);
    let ada = owner("ada");
    fs::write(
        store.path_for(&ada),
        r#"{ "version": 1, "owner": "grace", "courses": [] }"#,
    )
    .unwrap();

    assert!(matches!(
        store.list(&ada),
        Err(StoreError::OwnerMismatch { .. })
    ));
}

#[test]
fn test_newer_file_version_is_reported() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path(), &INSTITUTIONAL);
    let ada = owner("ada");
    fs::write(
        store.path_for(&ada),
        r#"{ "version": 9, "owner": "ada", "courses": [] }"#,
    )
    .unwrap();

    assert!(matches!(
        store.list(&ada),
        Err(StoreError::UnsupportedVersion { found: 9, .. })
    ));
}

#[test]
fn test_duplicate_ids_are_reported() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path(), &INSTITUTIONAL);
    let ada = owner("ada");
    fs::write(
        store.path_for(&ada),
        r#"{ "version": 1, "owner": "ada", "courses": [
            { "id": "x1", "name": "A", "credits": 3.0, "grade": "A" },
            { "id": "x1", "name": "B", "credits": 2.0, "grade": "B" }
        ] }"#,
    )
    .unwrap();

    assert!(matches!(
        store.list(&ada),
        Err(StoreError::DuplicateId { .. })
    ));
}

#[test]
fn test_negative_credits_on_disk_are_loaded() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path(), &INSTITUTIONAL);
    let ada = owner("ada");
    fs::write(
        store.path_for(&ada),
        r#"{ "version": 1, "owner": "ada", "courses": [
            { "id": "old", "name": "Legacy", "credits": -1.0, "grade": "C" }
        ] }"#,
    )
    .unwrap();

    let courses = store.list(&ada).unwrap();
    assert_eq!(courses.len(), 1);
    assert!(!courses[0].is_weighted());
}

#[test]
fn test_invalid_update_leaves_file_unchanged() {
    let dir = TempDir::new().unwrap();
    let mut store = JsonFileStore::new(dir.path(), &INSTITUTIONAL);
    let ada = owner("ada");
    let course = store.add(&ada, entry("Algebra", 3.0, Grade::A)).unwrap();

    let patch = CoursePatch {
        name: Some("   ".to_string()),
        ..CoursePatch::default()
    };
    assert!(store.update(&ada, &course.id, &patch).is_err());
    assert_eq!(store.list(&ada).unwrap(), vec![course]);
}
