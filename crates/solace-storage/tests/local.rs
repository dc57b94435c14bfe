use solace_storage::error::StorageError;
use solace_storage::local::FsStore;
use solace_storage::store::{KeyValueStore, Precondition, Version};

#[tokio::test]
async fn missing_key_reads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsStore::new(dir.path());

    assert!(store.get("resources.json").await.unwrap().is_none());
}

#[tokio::test]
async fn put_then_get_returns_body_and_version() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsStore::new(dir.path());

    let version = store
        .put("resources.json", b"[]".to_vec(), Precondition::None)
        .await
        .unwrap();

    let stored = store.get("resources.json").await.unwrap().unwrap();
    assert_eq!(stored.body, b"[]");
    assert_eq!(stored.version, version);
    assert_eq!(version, Version::of(b"[]"));
}

#[tokio::test]
async fn if_match_rejects_stale_versions() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsStore::new(dir.path());

    let v1 = store
        .put("users.json", b"[1]".to_vec(), Precondition::IfAbsent)
        .await
        .unwrap();
    store
        .put("users.json", b"[2]".to_vec(), Precondition::IfMatch(v1.clone()))
        .await
        .unwrap();

    let err = store
        .put("users.json", b"[3]".to_vec(), Precondition::IfMatch(v1))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::PreconditionFailed { .. }));

    let err = store
        .put("users.json", b"[4]".to_vec(), Precondition::IfAbsent)
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::PreconditionFailed { .. }));

    assert_eq!(store.get("users.json").await.unwrap().unwrap().body, b"[2]");
}

#[tokio::test]
async fn nested_keys_create_directories() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsStore::new(dir.path());

    store
        .put("notes/inquiry-1.json", b"[]".to_vec(), Precondition::None)
        .await
        .unwrap();

    assert!(dir.path().join("notes").join("inquiry-1.json").is_file());
    assert_eq!(
        store.get("notes/inquiry-1.json").await.unwrap().unwrap().body,
        b"[]"
    );
    assert!(store.get("notes/inquiry-2.json").await.unwrap().is_none());
}

#[tokio::test]
async fn delete_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsStore::new(dir.path());

    store.put("a.json", b"[]".to_vec(), Precondition::None).await.unwrap();
    store.delete("a.json").await.unwrap();
    store.delete("a.json").await.unwrap();
    assert!(store.get("a.json").await.unwrap().is_none());
}

#[tokio::test]
async fn rejects_keys_escaping_the_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsStore::new(dir.path());

    for key in ["../outside.json", "/etc/passwd", "", "users.json.tmp"] {
        let err = store.get(key).await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey(_)), "key {key:?}");
    }
}
