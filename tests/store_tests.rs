//! Quiz store tests for both backends

use quizcli::error::QuizError;
use quizcli::store::{MemoryStore, QuizStore, YamlStore};
use quizcli::system::{MockSystem, RealSystem, System};
use std::path::Path;
use tempfile::TempDir;

const STORE_PATH: &str = "/data/quizzes.yaml";

fn exercise_crud(store: &mut dyn QuizStore) {
    let added = store.add("2+2?", "4").unwrap();
    assert_eq!(store.get_by_id(added.id).unwrap(), added);

    let updated = store.update(added.id, "3+3?", "6").unwrap();
    assert_eq!(updated.id, added.id);
    assert_eq!(updated.question, "3+3?");
    assert_eq!(updated.answer, "6");
    assert_eq!(store.get_by_id(added.id).unwrap(), updated);

    let removed = store.delete_by_id(added.id).unwrap();
    assert_eq!(removed, updated);
    assert_eq!(
        store.get_by_id(added.id).unwrap_err(),
        QuizError::not_found(&added.id)
    );
}

#[test]
fn memory_store_crud_properties() {
    let mut store = MemoryStore::new();
    exercise_crud(&mut store);
    assert!(store.is_empty());
}

#[test]
fn yaml_store_crud_properties() {
    let system = MockSystem::new();
    let mut store = YamlStore::open(&system, STORE_PATH, false).unwrap();
    exercise_crud(&mut store);
    assert!(store.get_all().is_empty());
}

#[test]
fn unknown_ids_fail_for_every_operation() {
    let mut store = MemoryStore::seeded();
    assert!(matches!(store.get_by_id(99), Err(QuizError::NotFound { .. })));
    assert!(matches!(store.update(99, "a", "b"), Err(QuizError::NotFound { .. })));
    assert!(matches!(store.delete_by_id(99), Err(QuizError::NotFound { .. })));
    assert_eq!(store.len(), 4);
}

#[test]
fn get_all_is_ordered_by_id() {
    let mut store = MemoryStore::seeded();
    store.delete_by_id(2).unwrap();
    store.add("Capital of Greece", "Athens").unwrap();

    let ids: Vec<u32> = store.get_all().iter().map(|quiz| quiz.id).collect();
    assert_eq!(ids, vec![1, 3, 4, 5]);
}

#[test]
fn yaml_store_starts_seeded_without_writing() {
    let system = MockSystem::new();
    let store = YamlStore::open(&system, STORE_PATH, true).unwrap();

    assert_eq!(store.get_all().len(), 4);
    assert!(!system.exists(Path::new(STORE_PATH)));
}

#[test]
fn yaml_store_persists_changes_and_reloads_them() {
    let system = MockSystem::new();
    {
        let mut store = YamlStore::open(&system, STORE_PATH, false).unwrap();
        store.add("2+2?", "4").unwrap();
        store.add("Colour of the sky", "blue").unwrap();
        store.delete_by_id(1).unwrap();
    }

    let content = system.read_to_string(Path::new(STORE_PATH)).unwrap();
    assert!(content.contains("Colour of the sky"));
    assert!(!content.contains("2+2?"));

    let reopened = YamlStore::open(&system, STORE_PATH, true).unwrap();
    let all = reopened.get_all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, 2);
    assert_eq!(all[0].answer, "blue");
}

#[test]
fn failed_write_leaves_store_unchanged() {
    let system = MockSystem::new().with_dir("/data").unwrap();
    let mut store = YamlStore::open(&system, STORE_PATH, false).unwrap();
    store.add("2+2?", "4").unwrap();

    system.set_read_only(true).unwrap();
    let err = store.update(1, "3+3?", "6").unwrap_err();
    assert!(matches!(err, QuizError::Storage { .. }));
    assert_eq!(store.get_by_id(1).unwrap().question, "2+2?");

    assert!(store.add("new", "one").is_err());
    assert_eq!(store.get_all().len(), 1);
}

#[test]
fn yaml_store_rejects_duplicate_ids() {
    let system = MockSystem::new()
        .with_file(
            STORE_PATH,
            b"quizzes:\n  - id: 1\n    question: a\n    answer: b\n  - id: 1\n    question: c\n    answer: d\n",
        )
        .unwrap();

    let err = YamlStore::open(&system, STORE_PATH, true).err().unwrap();
    assert!(matches!(err, QuizError::Validation { .. }));
}

#[test]
fn yaml_store_rejects_schema_violations() {
    let system = MockSystem::new()
        .with_file(STORE_PATH, b"quizzes:\n  - id: 1\n    question: a\n    answer: \"\"\n")
        .unwrap();

    let err = YamlStore::open(&system, STORE_PATH, true).err().unwrap();
    assert!(matches!(err, QuizError::Storage { .. }));
}

#[test]
fn yaml_store_rejects_directory_path() {
    let system = MockSystem::new().with_dir(STORE_PATH).unwrap();
    let err = YamlStore::open(&system, STORE_PATH, true).err().unwrap();
    assert!(err.to_string().contains("not a file"));
}

#[test]
fn yaml_store_on_real_filesystem() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("sub").join("quizzes.yaml");
    let system = RealSystem::new();

    let mut store = YamlStore::open(&system, path.clone(), false).unwrap();
    let quiz = store.add("  Capital of Italy ", " Rome ").unwrap();
    assert_eq!(quiz.question, "Capital of Italy");
    assert!(path.is_file());

    let reopened = YamlStore::open(&system, path.as_path(), false).unwrap();
    assert_eq!(reopened.get_by_id(quiz.id).unwrap(), quiz);
    assert_eq!(reopened.path(), path.as_path());
}
