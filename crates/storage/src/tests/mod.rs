//! Test utilities and module declarations for storage tests.

use crate::Storage;
use tempfile::TempDir;

#[allow(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path).unwrap();
    (storage, temp_dir)
}

mod item_tests;
mod settings_tests;

#[test]
#[allow(clippy::unwrap_used, reason = "test code")]
fn reopening_database_keeps_schema_and_data() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("reopen.db");

    let storage = Storage::new(&db_path).unwrap();
    storage.set_setting("total_trash", "300").unwrap();
    storage.seed_trashed(3).unwrap();
    drop(storage);

    // given: migrations already applied once
    let reopened = Storage::new(&db_path).unwrap();

    // then: nothing was recreated or lost
    assert_eq!(reopened.get_setting("total_trash").unwrap().as_deref(), Some("300"));
    assert_eq!(reopened.count_trashed().unwrap(), 3);
}

#[test]
#[allow(clippy::unwrap_used, reason = "test code")]
fn fresh_database_has_current_items_schema() {
    let (storage, _temp_dir) = create_test_storage();
    let conn = crate::storage::get_conn(&storage.pool).unwrap();

    let version: i32 = conn.pragma_query_value(None, "user_version", |row| row.get(0)).unwrap();
    assert_eq!(version, crate::migrations::SCHEMA_VERSION);

    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('items')").unwrap();
    let columns: Vec<String> =
        stmt.query_map([], |row| row.get(0)).unwrap().collect::<Result<_, _>>().unwrap();
    assert_eq!(columns, ["id", "title", "status", "created_at"]);
}
