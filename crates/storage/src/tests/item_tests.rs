use trash_cleaner_core::{ItemId, TRASH_STATUS};

use super::create_test_storage;
use crate::storage::get_conn;

fn meta_rows(storage: &crate::Storage, id: ItemId) -> i64 {
    let conn = get_conn(&storage.pool).unwrap();
    conn.query_row("SELECT COUNT(*) FROM item_meta WHERE item_id = ?1", [id.0], |row| row.get(0))
        .unwrap()
}

#[test]
fn test_count_only_includes_trashed() {
    let (storage, _temp_dir) = create_test_storage();

    storage.insert_item("published", "publish").unwrap();
    storage.insert_item("draft", "draft").unwrap();
    storage.insert_item("binned", TRASH_STATUS).unwrap();

    assert_eq!(storage.count_trashed().unwrap(), 1);
}

#[test]
fn test_find_one_trashed_returns_oldest() {
    let (storage, _temp_dir) = create_test_storage();
    assert_eq!(storage.find_one_trashed(&[]).unwrap(), None);

    storage.insert_item("kept", "publish").unwrap();
    let ids = storage.seed_trashed(3).unwrap();

    assert_eq!(storage.find_one_trashed(&[]).unwrap(), Some(ids[0]));
}

#[test]
fn test_find_one_trashed_skips_excluded_ids() {
    let (storage, _temp_dir) = create_test_storage();
    let ids = storage.seed_trashed(4).unwrap();

    assert_eq!(storage.find_one_trashed(&[ids[0]]).unwrap(), Some(ids[1]));
    assert_eq!(storage.find_one_trashed(&[ids[0], ids[1], ids[3]]).unwrap(), Some(ids[2]));
    assert_eq!(storage.find_one_trashed(&ids).unwrap(), None);
}

#[test]
fn test_delete_permanently_removes_item_and_meta() {
    let (storage, _temp_dir) = create_test_storage();

    let id = storage.insert_item("binned", TRASH_STATUS).unwrap();
    storage.add_item_meta(id, "_thumbnail_id", "12").unwrap();
    storage.add_item_meta(id, "_edit_lock", "1760000000:1").unwrap();
    assert_eq!(meta_rows(&storage, id), 2);

    assert!(storage.delete_permanently(id).unwrap());

    assert_eq!(storage.count_trashed().unwrap(), 0);
    assert_eq!(meta_rows(&storage, id), 0);
}

#[test]
fn test_delete_refuses_items_not_in_trash() {
    let (storage, _temp_dir) = create_test_storage();

    let id = storage.insert_item("binned", TRASH_STATUS).unwrap();

    // given: the item was restored after it was looked up
    assert!(storage.set_item_status(id, "publish").unwrap());

    // then: permanent deletion is refused and the item survives
    assert!(!storage.delete_permanently(id).unwrap());
    assert!(!storage.delete_permanently(ItemId(9999)).unwrap());
    assert!(storage.set_item_status(id, TRASH_STATUS).unwrap());
    assert_eq!(storage.count_trashed().unwrap(), 1);
}

#[test]
fn test_seed_trashed_ids_are_sequential() {
    let (storage, _temp_dir) = create_test_storage();
    let ids = storage.seed_trashed(5).unwrap();
    assert_eq!(ids.len(), 5);
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(storage.count_trashed().unwrap(), 5);
}

#[tokio::test]
async fn test_item_store_trait_drains_trash() {
    use crate::traits::ItemStore;
    use crate::StorageBackend;

    let (storage, _temp_dir) = create_test_storage();
    storage.seed_trashed(4).unwrap();
    let backend = StorageBackend::Sqlite(storage);

    while let Some(id) = ItemStore::find_one_trashed(&backend, &[]).await.unwrap() {
        assert!(ItemStore::delete_permanently(&backend, id).await.unwrap());
    }
    assert_eq!(ItemStore::count_trashed(&backend).await.unwrap(), 0);
}
