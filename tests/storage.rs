use std::sync::Arc;

use kanbanist::constants::BOARDS_KEY;
use kanbanist::model::{KanbanBoard, KanbanCard};
use kanbanist::storage::{BoardStorage, FileStore, KeyValueStore, MemoryStore};

fn board(title: &str) -> KanbanBoard {
    KanbanBoard::new(title, "#3B82F6")
}

#[tokio::test]
async fn test_memory_store_get_set_remove() {
    let store = MemoryStore::new();
    assert_eq!(store.get_item("k").await.unwrap(), None);

    store.set_item("k", "v1").await.unwrap();
    store.set_item("k", "v2").await.unwrap();
    assert_eq!(store.get_item("k").await.unwrap().as_deref(), Some("v2"));

    store.remove_item("k").await.unwrap();
    assert_eq!(store.get_item("k").await.unwrap(), None);
}

#[tokio::test]
async fn test_file_store_persists_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("storage.json");

    let store = FileStore::new(&path);
    assert_eq!(store.get_item("a").await.unwrap(), None);
    store.set_item("a", "1").await.unwrap();
    store.set_item("b", "2").await.unwrap();
    assert!(path.exists());

    let reopened = FileStore::new(&path);
    assert_eq!(reopened.path(), path.as_path());
    assert_eq!(reopened.get_item("a").await.unwrap().as_deref(), Some("1"));
    assert_eq!(reopened.get_item("b").await.unwrap().as_deref(), Some("2"));

    reopened.remove_item("a").await.unwrap();
    assert_eq!(store.get_item("a").await.unwrap(), None);
    assert_eq!(store.get_item("b").await.unwrap().as_deref(), Some("2"));
}

#[tokio::test]
async fn test_file_store_rejects_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "{not json").unwrap();

    let store = FileStore::new(&path);
    assert!(store.get_item("a").await.is_err());
}

#[tokio::test]
async fn test_boards_round_trip_under_single_key() {
    let store = Arc::new(MemoryStore::new());
    let storage = BoardStorage::new(store.clone());

    let mut first = board("Work");
    let column_id = first.columns[0].id.clone();
    first.columns[0]
        .cards
        .push(KanbanCard::new(&first.id, &column_id, "Ship it"));
    storage.add_board(first.clone()).await;
    storage.add_board(board("Home")).await;

    let raw = store.get_item(BOARDS_KEY).await.unwrap().unwrap();
    assert!(raw.starts_with('['));

    let boards = storage.get_boards().await;
    assert_eq!(boards.len(), 2);
    assert_eq!(boards[0], first);
    assert_eq!(boards[1].title, "Home");
}

#[tokio::test]
async fn test_missing_key_loads_no_boards() {
    let storage = BoardStorage::new(Arc::new(MemoryStore::new()));
    assert!(storage.get_boards().await.is_empty());
}

#[tokio::test]
async fn test_corrupt_boards_load_as_empty() {
    let store = Arc::new(MemoryStore::new());
    store.set_item(BOARDS_KEY, "[{\"id\": 42").await.unwrap();

    let storage = BoardStorage::new(store);
    assert!(storage.get_boards().await.is_empty());
}

#[tokio::test]
async fn test_update_and_delete_board() {
    let storage = BoardStorage::new(Arc::new(MemoryStore::new()));
    let mut work = board("Work");
    storage.add_board(work.clone()).await;

    work.title = "Work (renamed)".to_string();
    storage.update_board(&work).await;
    assert_eq!(storage.get_boards().await[0].title, "Work (renamed)");

    // Unknown ids are ignored
    storage.update_board(&board("Ghost")).await;
    assert_eq!(storage.get_boards().await.len(), 1);

    storage.delete_board(&work.id).await;
    assert!(storage.get_boards().await.is_empty());
}

#[tokio::test]
async fn test_board_storage_on_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let storage = BoardStorage::new(Arc::new(FileStore::new(&path)));
    storage.add_board(board("Persisted")).await;

    let reloaded = BoardStorage::new(Arc::new(FileStore::new(&path)));
    let boards = reloaded.get_boards().await;
    assert_eq!(boards.len(), 1);
    assert_eq!(boards[0].title, "Persisted");
    assert_eq!(boards[0].columns.len(), 3);
}
