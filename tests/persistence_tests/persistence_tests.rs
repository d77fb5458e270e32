//! Tests for JSON persistence
//!
//! These tests verify:
//! - Saved document shape and two-decimal numbers
//! - Save/load restores ids, names, grades and recomputed averages
//! - Missing file is an empty store
//! - Malformed entries are skipped and counted
//! - Failed saves leave the previous file intact

use std::fs;

use gradebook::persistence::{decode, encode, load, save, LoadReport};
use gradebook::{GradebookError, StudentStore};
use serde_json::Value;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn sample_store() -> StudentStore {
    let mut store = StudentStore::new();
    store.add(2, "Bea").unwrap();
    store.add(1, "Al \"Quotes\" Smith").unwrap();
    store.add(3, "Ungraded").unwrap();
    store.add_grade(2, 80.0).unwrap();
    store.add_grade(2, 90.5).unwrap();
    store.add_grade(1, 66.0).unwrap();
    store
}

fn decode_into_new(text: &str) -> (StudentStore, LoadReport) {
    let mut store = StudentStore::new();
    let report = decode(text, &mut store).unwrap();
    (store, report)
}

// =============================================================================
// Encoding Tests
// =============================================================================

#[test]
fn test_encode_document_shape() {
    let text = String::from_utf8(encode(&sample_store()).unwrap()).unwrap();
    let root: Value = serde_json::from_str(&text).unwrap();

    let students = root["students"].as_array().unwrap();
    assert_eq!(students.len(), 3);
    assert_eq!(students[0]["id"], 2);
    assert_eq!(students[0]["name"], "Bea");
    assert_eq!(students[0]["grades"].as_array().unwrap().len(), 2);
    assert_eq!(students[2]["grades"].as_array().unwrap().len(), 0);
}

#[test]
fn test_encode_two_decimal_numbers() {
    let text = String::from_utf8(encode(&sample_store()).unwrap()).unwrap();

    assert!(text.contains("80.00"));
    assert!(text.contains("90.50"));
    assert!(text.contains("\"average\": 85.25"));
    assert!(text.contains("\"average\": 0.00"));
    assert!(text.contains("\"id\": 2,"));
}

#[test]
fn test_encode_escapes_names() {
    let text = String::from_utf8(encode(&sample_store()).unwrap()).unwrap();
    assert!(text.contains(r#""name": "Al \"Quotes\" Smith""#));
}

// =============================================================================
// Round Trip Tests
// =============================================================================

#[test]
fn test_save_then_load_restores_store() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("students.json");
    let original = sample_store();

    save(&original, &path).unwrap();

    let mut restored = StudentStore::new();
    let report = load(&mut restored, &path).unwrap();

    assert_eq!(report, LoadReport { loaded: 3, skipped: 0 });
    assert_eq!(restored.len(), original.len());
    for (a, b) in original.iter().zip(restored.iter()) {
        assert_eq!(a.id(), b.id());
        assert_eq!(a.name(), b.name());
        assert_eq!(a.grades(), b.grades());
        assert_eq!(a.average(), b.average());
    }
}

#[test]
fn test_save_creates_parent_directories() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("data").join("nested").join("students.json");

    save(&sample_store(), &path).unwrap();

    assert!(path.exists());
    assert!(!path.with_file_name("students.json.tmp").exists());
}

#[test]
fn test_save_overwrites_previous_contents() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("students.json");

    save(&sample_store(), &path).unwrap();
    save(&StudentStore::new(), &path).unwrap();

    let mut restored = StudentStore::new();
    load(&mut restored, &path).unwrap();
    assert!(restored.is_empty());
}

#[test]
fn test_failed_save_keeps_existing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("students.json");
    save(&sample_store(), &path).unwrap();
    let before = fs::read(&path).unwrap();

    // A directory where the temp file should go makes the write fail
    fs::create_dir(temp.path().join("students.json.tmp")).unwrap();
    let result = save(&StudentStore::new(), &path);

    assert!(matches!(result, Err(GradebookError::Io(_))));
    assert_eq!(fs::read(&path).unwrap(), before);
    // Cleanup cannot remove a directory; the failure is logged, not returned
    assert!(temp.path().join("students.json.tmp").is_dir());
}

// =============================================================================
// Load Tolerance Tests
// =============================================================================

#[test]
fn test_load_missing_file_is_empty() {
    let temp = TempDir::new().unwrap();
    let mut store = StudentStore::new();

    let report = load(&mut store, &temp.path().join("absent.json")).unwrap();

    assert_eq!(report, LoadReport::default());
    assert!(store.is_empty());
}

#[test]
fn test_load_non_json_is_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("students.json");
    fs::write(&path, "this is not json").unwrap();

    let mut store = StudentStore::new();
    assert!(matches!(
        load(&mut store, &path),
        Err(GradebookError::Serialization(_))
    ));
}

#[test]
fn test_load_directory_is_io_error() {
    let temp = TempDir::new().unwrap();
    let mut store = StudentStore::new();
    assert!(matches!(load(&mut store, temp.path()), Err(GradebookError::Io(_))));
}

#[test]
fn test_decode_without_students_array() {
    let (store, report) = decode_into_new(r#"{"pupils": []}"#);
    assert!(store.is_empty());
    assert_eq!(report, LoadReport::default());

    let (store, _) = decode_into_new(r#"{"students": 5}"#);
    assert!(store.is_empty());

    let (store, _) = decode_into_new("[]");
    assert!(store.is_empty());
}

#[test]
fn test_decode_skips_malformed_entries() {
    let text = r#"{"students": [
        {"id": 1, "name": "Good", "grades": [70]},
        {"name": "No id", "grades": [50]},
        {"id": "7", "name": "String id"},
        {"id": 2.5, "name": "Float id"},
        {"id": 3, "grades": [10]},
        {"id": 4, "name": ""},
        {"id": 99999999999, "name": "Too big"},
        "not an object",
        {"id": 5, "name": "Also good"}
    ]}"#;

    let (store, report) = decode_into_new(text);

    assert_eq!(report, LoadReport { loaded: 2, skipped: 7 });
    let ids: Vec<i32> = store.iter().map(|s| s.id()).collect();
    assert_eq!(ids, vec![1, 5]);
}

#[test]
fn test_decode_skips_later_duplicates() {
    let text = r#"{"students": [
        {"id": 1, "name": "First", "grades": [90]},
        {"id": 1, "name": "Second", "grades": [10, 20]}
    ]}"#;

    let (store, report) = decode_into_new(text);

    assert_eq!(report, LoadReport { loaded: 1, skipped: 1 });
    let s = store.find(1).unwrap();
    assert_eq!(s.name(), "First");
    assert_eq!(s.grades(), &[90.0]);
}

#[test]
fn test_decode_tolerates_bad_grades() {
    let text = r#"{"students": [
        {"id": 1, "name": "Mixed", "grades": [80, "x", null, 90.0, {}]},
        {"id": 2, "name": "No grades field"},
        {"id": 3, "name": "Grades not array", "grades": "80,90"}
    ]}"#;

    let (store, report) = decode_into_new(text);

    assert_eq!(report.loaded, 3);
    assert_eq!(store.find(1).unwrap().grades(), &[80.0, 90.0]);
    assert_eq!(store.find(1).unwrap().average(), 85.0);
    assert_eq!(store.find(2).unwrap().grade_count(), 0);
    assert_eq!(store.find(3).unwrap().grade_count(), 0);
}

#[test]
fn test_decode_drops_grades_outside_f32_range() {
    let text = r#"{"students": [{"id": 1, "name": "Huge", "grades": [70, 1e300, -1e300, 90]}]}"#;

    let (store, report) = decode_into_new(text);

    assert_eq!(report.loaded, 1);
    assert_eq!(store.find(1).unwrap().grades(), &[70.0, 90.0]);
    assert_eq!(store.find(1).unwrap().average(), 80.0);

    let saved: Value = serde_json::from_slice(&encode(&store).unwrap()).unwrap();
    assert!(saved["students"][0]["grades"]
        .as_array()
        .unwrap()
        .iter()
        .all(Value::is_number));
}

#[test]
fn test_decode_recomputes_stale_average() {
    let text = r#"{"students": [{"id": 1, "name": "A", "grades": [60, 70], "average": 99.99}]}"#;
    let (store, _) = decode_into_new(text);
    assert_eq!(store.find(1).unwrap().average(), 65.0);
}

#[test]
fn test_decode_truncates_long_names() {
    let long = "n".repeat(70);
    let text = format!(r#"{{"students": [{{"id": 1, "name": "{}"}}]}}"#, long);
    let (store, _) = decode_into_new(&text);
    assert_eq!(store.find(1).unwrap().name().len(), 49);
}
