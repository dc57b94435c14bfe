use std::sync::Arc;

use solace_core::id::EntityId;
use solace_core::keys;
use solace_core::models::note::Note;
use solace_core::models::resource::{Resource, ResourceStatus};
use solace_core::seed;
use solace_storage::collection::Collection;
use solace_storage::error::StorageError;
use solace_storage::local::FsStore;
use solace_storage::memory::MemoryStore;
use solace_storage::repository::Repository;
use solace_storage::store::{KeyValueStore, Precondition, StoredValue, Version};

fn draft_resource(title: &str) -> Resource {
    let mut r = seed::resources().remove(0);
    r.title = title.to_string();
    r
}

#[tokio::test]
async fn absent_collection_loads_seed_data() {
    let repo = Repository::<Resource, _>::for_entity(MemoryStore::new());
    assert_eq!(repo.list().await.unwrap(), seed::resources());
}

#[tokio::test]
async fn malformed_collection_falls_back_to_seed_data() {
    let store = Arc::new(MemoryStore::new());
    store
        .put(keys::RESOURCES, b"{not json".to_vec(), Precondition::None)
        .await
        .unwrap();

    let repo = Repository::<Resource, _>::for_entity(store.clone());
    assert_eq!(repo.list().await.unwrap(), seed::resources());

    // The corrupt value is replaced on the next write.
    repo.create(draft_resource("Recovered")).await.unwrap();
    assert_eq!(repo.list().await.unwrap().len(), 3);
}

#[tokio::test]
async fn add_then_load_round_trips_all_fields() {
    let dir = tempfile::tempdir().unwrap();
    let repo = Repository::<Resource, _>::for_entity(FsStore::new(dir.path()));

    let mut draft = draft_resource("Gratitude Journaling");
    draft.tags = vec!["journaling".to_string()];
    draft.views = 12;
    let created = repo.create(draft.clone()).await.unwrap();

    // A fresh repository over the same directory sees the record.
    let reopened = Repository::<Resource, _>::for_entity(FsStore::new(dir.path()));
    let items = reopened.list().await.unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0], created);

    draft.id = created.id;
    assert_eq!(items[0], draft);
}

#[tokio::test]
async fn edit_then_load_applies_changes_and_keeps_the_rest() {
    let repo = Repository::<Resource, _>::for_entity(MemoryStore::new());
    let original = repo.list().await.unwrap().remove(1);

    let mut draft = original.clone();
    draft.status = ResourceStatus::Live;
    repo.update(original.id, draft).await.unwrap();

    let items = repo.list().await.unwrap();
    let matching: Vec<_> = items.iter().filter(|r| r.id == original.id).collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].status, ResourceStatus::Live);
    assert_eq!(matching[0].title, original.title);
    assert_eq!(matching[0].publish_date, original.publish_date);
    assert_eq!(items.len(), 2);
}

#[tokio::test]
async fn invalid_drafts_are_not_written() {
    let store = Arc::new(MemoryStore::new());
    let repo = Repository::<Resource, _>::for_entity(store.clone());

    let err = repo.create(draft_resource("")).await.unwrap_err();
    match err {
        StorageError::Validation(fields) => assert!(fields.contains("title")),
        other => panic!("unexpected error: {other}"),
    }
    assert!(store.get(keys::RESOURCES).await.unwrap().is_none());
}

#[tokio::test]
async fn update_and_delete_of_unknown_ids_fail() {
    let repo = Repository::<Resource, _>::for_entity(MemoryStore::new());

    let err = repo.update(EntityId(9), draft_resource("x")).await.unwrap_err();
    assert!(matches!(err, StorageError::RecordNotFound { .. }));

    let err = repo.delete(EntityId(9)).await.unwrap_err();
    assert!(matches!(err, StorageError::RecordNotFound { .. }));
}

#[tokio::test]
async fn delete_removes_record() {
    let repo = Repository::<Resource, _>::for_entity(MemoryStore::new());
    let id = repo.list().await.unwrap()[0].id;

    let removed = repo.delete(id).await.unwrap();
    assert_eq!(removed.id, id);

    let items = repo.list().await.unwrap();
    assert_eq!(items.len(), 1);
    assert!(matches!(
        repo.get(id).await.unwrap_err(),
        StorageError::RecordNotFound { .. }
    ));
}

#[tokio::test]
async fn modify_changes_one_field() {
    let repo = Repository::<Resource, _>::for_entity(MemoryStore::new());
    let id = repo.list().await.unwrap()[0].id;

    let modified = repo
        .modify(id, |r| r.thumbnail = Some("data:image/png;base64,AA==".to_string()))
        .await
        .unwrap();

    assert_eq!(repo.get(id).await.unwrap(), modified);
    assert!(modified.thumbnail.is_some());
}

#[tokio::test]
async fn concurrent_creates_lose_nothing() {
    let store = Arc::new(MemoryStore::new());

    let mut handles = Vec::new();
    for i in 0..8 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            let repo = Repository::<Resource, _>::for_entity(store);
            let mut attempts = 0;
            loop {
                attempts += 1;
                match repo.create(draft_resource(&format!("Concurrent {i}"))).await {
                    Ok(created) => return created.id,
                    Err(StorageError::Conflict { .. }) if attempts < 10 => continue,
                    Err(e) => panic!("create failed: {e}"),
                }
            }
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }

    let items = Repository::<Resource, _>::for_entity(store).list().await.unwrap();
    assert_eq!(items.len(), 10);
    for id in ids {
        assert_eq!(items.iter().filter(|r| r.id == id).count(), 1);
    }
}

#[tokio::test]
async fn notes_live_under_their_inquiry_key() {
    let store = Arc::new(MemoryStore::new());
    let inquiry = EntityId(77);
    let notes = Repository::<Note, _>::new(store.clone(), keys::inquiry_notes(inquiry));

    assert!(notes.list().await.unwrap().is_empty());

    notes
        .create(Note {
            id: EntityId(0),
            inquiry_id: inquiry,
            text: "Called back, left voicemail.".to_string(),
            author: None,
            created_at: jiff::Timestamp::UNIX_EPOCH,
        })
        .await
        .unwrap();

    assert!(store.get("notes/inquiry-77.json").await.unwrap().is_some());
    assert!(store.get(keys::INQUIRIES).await.unwrap().is_none());
}

/// A store whose conditional writes always lose the race.
struct AlwaysConflicting(MemoryStore);

impl KeyValueStore for AlwaysConflicting {
    async fn get(&self, key: &str) -> Result<Option<StoredValue>, StorageError> {
        self.0.get(key).await
    }

    async fn put(
        &self,
        key: &str,
        _body: Vec<u8>,
        _precondition: Precondition,
    ) -> Result<Version, StorageError> {
        Err(StorageError::PreconditionFailed {
            key: key.to_string(),
        })
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.0.delete(key).await
    }
}

#[tokio::test]
async fn mutate_gives_up_after_repeated_conflicts() {
    let collection = Collection::<Resource, _>::new(
        AlwaysConflicting(MemoryStore::new()),
        keys::RESOURCES,
    );

    let mut calls = 0;
    let err = collection
        .mutate(|_| {
            calls += 1;
            Ok(())
        })
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::Conflict { .. }));
    assert_eq!(calls, solace_storage::collection::MAX_WRITE_ATTEMPTS);
}

#[tokio::test]
async fn save_overwrites_unconditionally() {
    let store = Arc::new(MemoryStore::new());
    let collection = Collection::<Resource, _>::new(store.clone(), keys::RESOURCES);

    let only = vec![draft_resource("Only one")];
    collection.save(&only).await.unwrap();
    assert_eq!(collection.load().await.unwrap(), only);

    // A stale writer still wins with a plain save.
    collection.save(&[]).await.unwrap();
    assert!(collection.load().await.unwrap().is_empty());
    assert!(collection.load_versioned().await.unwrap().version.is_some());
}
