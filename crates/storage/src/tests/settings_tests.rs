use super::create_test_storage;

#[test]
fn test_get_missing_setting_is_none() {
    let (storage, _temp_dir) = create_test_storage();
    assert_eq!(storage.get_setting("enable_auto_clean").unwrap(), None);
}

#[test]
fn test_set_setting_overwrites() {
    let (storage, _temp_dir) = create_test_storage();

    storage.set_setting("last_run", "Never").unwrap();
    storage.set_setting("last_run", "2026-10-17 09:30:00 (Deleted 250 items)").unwrap();

    assert_eq!(
        storage.get_setting("last_run").unwrap().as_deref(),
        Some("2026-10-17 09:30:00 (Deleted 250 items)")
    );
}

#[test]
fn test_add_setting_keeps_existing_value() {
    let (storage, _temp_dir) = create_test_storage();

    // given: an admin already enabled the campaign
    storage.set_setting("enable_auto_clean", "1").unwrap();

    // when: install defaults are written again
    let inserted = storage.add_setting("enable_auto_clean", "0").unwrap();

    // then: the existing value wins
    assert!(!inserted);
    assert_eq!(storage.get_setting("enable_auto_clean").unwrap().as_deref(), Some("1"));
}

#[test]
fn test_add_setting_inserts_when_absent() {
    let (storage, _temp_dir) = create_test_storage();
    assert!(storage.add_setting("total_trash", "0").unwrap());
    assert_eq!(storage.get_setting("total_trash").unwrap().as_deref(), Some("0"));
}

#[tokio::test]
async fn test_settings_store_trait_round_trip() {
    use crate::traits::SettingsStore;
    use crate::StorageBackend;

    let (storage, _temp_dir) = create_test_storage();
    let backend = StorageBackend::Sqlite(storage);

    SettingsStore::set_setting(&backend, "total_trash", "40").await.unwrap();
    let value = SettingsStore::get_setting(&backend, "total_trash").await.unwrap();
    assert_eq!(value.as_deref(), Some("40"));
    assert!(!SettingsStore::add_setting(&backend, "total_trash", "0").await.unwrap());
}
