//! Tests for storage backends

use super::*;
use tempfile::tempdir;

fn snapshot(page: u32) -> Snapshot {
    Snapshot {
        current_page: page,
        records_total: 100,
        records_filtered: 80,
    }
}

// ============================================================================
// Snapshot Tests
// ============================================================================

#[test]
fn test_snapshot_serialization_uses_camel_case() {
    let json = serde_json::to_value(snapshot(3)).unwrap();
    assert_eq!(json["currentPage"], 3);
    assert_eq!(json["recordsTotal"], 100);
    assert_eq!(json["recordsFiltered"], 80);

    let restored: Snapshot = serde_json::from_str(r#"{"currentPage": 2}"#).unwrap();
    assert_eq!(restored.current_page, 2);
    assert_eq!(restored.records_filtered, 0);
}

// ============================================================================
// Memory Storage Tests
// ============================================================================

#[test]
fn test_memory_get_set_remove() {
    let storage = MemoryStorage::new();
    assert!(storage.get("users").unwrap().is_none());

    storage.set("users", &snapshot(2)).unwrap();
    assert_eq!(storage.get("users").unwrap(), Some(snapshot(2)));

    // Last write wins
    storage.set("users", &snapshot(5)).unwrap();
    assert_eq!(storage.get("users").unwrap(), Some(snapshot(5)));

    storage.remove("users").unwrap();
    assert!(storage.get("users").unwrap().is_none());
    assert!(storage.is_empty());
}

#[test]
fn test_memory_clones_share_entries() {
    let storage = MemoryStorage::new();
    let clone = storage.clone();
    clone.set("orders", &snapshot(4)).unwrap();
    assert_eq!(storage.get("orders").unwrap(), Some(snapshot(4)));
    assert_eq!(storage.len(), 1);
}

#[test]
fn test_memory_remove_missing_key_is_ok() {
    let storage = MemoryStorage::new();
    assert!(storage.remove("nope").is_ok());
}

// ============================================================================
// File Storage Tests
// ============================================================================

#[test]
fn test_file_storage_persists_across_opens() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pager-state.json");

    {
        let storage = FileStorage::open(&path).unwrap();
        storage.set("users", &snapshot(7)).unwrap();
        storage.set("orders", &snapshot(1)).unwrap();
    }

    assert!(path.exists());
    assert!(!path.with_extension("tmp").exists());

    let reopened = FileStorage::open(&path).unwrap();
    assert_eq!(reopened.get("users").unwrap(), Some(snapshot(7)));
    assert_eq!(reopened.get("orders").unwrap(), Some(snapshot(1)));
    assert_eq!(reopened.path(), path.as_path());
}

#[test]
fn test_file_storage_remove() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");

    let storage = FileStorage::open(&path).unwrap();
    storage.set("users", &snapshot(3)).unwrap();
    storage.remove("users").unwrap();

    let reopened = FileStorage::open(&path).unwrap();
    assert!(reopened.get("users").unwrap().is_none());
}

#[test]
fn test_file_storage_failed_write_keeps_previous_entries() {
    let dir = tempdir().unwrap();
    let subdir = dir.path().join("state");
    std::fs::create_dir(&subdir).unwrap();

    let storage = FileStorage::open(subdir.join("state.json")).unwrap();
    storage.set("users", &snapshot(3)).unwrap();
    std::fs::remove_dir_all(&subdir).unwrap();

    assert!(storage.set("users", &snapshot(7)).is_err());
    assert_eq!(storage.get("users").unwrap(), Some(snapshot(3)));

    assert!(storage.remove("users").is_err());
    assert_eq!(storage.get("users").unwrap(), Some(snapshot(3)));
}

#[test]
fn test_file_storage_missing_file_starts_empty() {
    let dir = tempdir().unwrap();
    let storage = FileStorage::open(dir.path().join("absent.json")).unwrap();
    assert!(storage.get("anything").unwrap().is_none());
}

#[test]
fn test_file_storage_corrupt_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("corrupt.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = FileStorage::open(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse storage file"));
}
