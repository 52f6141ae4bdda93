//! Tests for the injected local-persistence collaborators

use poker_settlement_core::{
    calculate_settlement, GameLog, GameLogStore, GameSettings, KvStore, MemoryStore,
    NameDirectory, Player, UploadQueue,
};

fn sample_log(room_id: &str, timestamp_ms: i64) -> GameLog {
    let players = vec![
        Player::new("Alice").with_buy_ins(1.0).with_chips(1500.0),
        Player::new("Bob").with_buy_ins(1.0).with_chips(500.0),
    ];
    let result = calculate_settlement(&players, &GameSettings::new(1000, 500));
    GameLog::from_result(room_id, timestamp_ms, "Alice", &result)
}

#[test]
fn test_game_log_from_result() {
    let log = sample_log("room-1", 42);

    assert_eq!(log.room_id, "room-1");
    assert_eq!(log.timestamp_ms, 42);
    assert_eq!(log.host_name, "Alice");
    assert_eq!(log.players.len(), 2);
    assert_eq!(log.players[0].name, "Alice");
    assert_eq!(log.players[0].net, 250);
    assert_eq!(log.players[1].net, -250);
}

#[test]
fn test_name_directory_trims_dedups_and_sorts() {
    let mut names = NameDirectory::new(MemoryStore::new());
    names.add_names(["Bob", "  Alice ", "", "   ", "Bob"]).unwrap();

    assert_eq!(names.known_names(), vec!["Alice", "Bob"]);

    names.add_names(["Carol"]).unwrap();
    assert_eq!(names.known_names(), vec!["Alice", "Bob", "Carol"]);
}

#[test]
fn test_name_directory_remove() {
    let mut names = NameDirectory::new(MemoryStore::new());
    names.add_names(["Alice", "Bob"]).unwrap();

    names.remove_name("Bob").unwrap();
    assert_eq!(names.known_names(), vec!["Alice"]);

    // Removing an absent name is fine
    names.remove_name("Nobody").unwrap();
    assert_eq!(names.known_names(), vec!["Alice"]);
}

#[test]
fn test_corrupt_stored_names_read_as_empty() {
    let mut store = MemoryStore::new();
    store.set("poker_known_players", "definitely not json".to_string());

    let names = NameDirectory::new(store);
    assert!(names.known_names().is_empty());
}

#[test]
fn test_game_log_store_upserts_by_room() {
    let mut history = GameLogStore::new(MemoryStore::new());
    history.save(sample_log("room-1", 100)).unwrap();
    history.save(sample_log("room-2", 200)).unwrap();

    // New rooms go to the front
    let logs = history.logs();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].room_id, "room-2");
    assert_eq!(logs[1].room_id, "room-1");

    // Saving the same room again replaces in place
    history.save(sample_log("room-1", 300)).unwrap();
    let logs = history.logs();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[1].room_id, "room-1");
    assert_eq!(logs[1].timestamp_ms, 300);
}

#[test]
fn test_game_log_store_clear() {
    let mut history = GameLogStore::new(MemoryStore::new());
    history.save(sample_log("room-1", 100)).unwrap();

    history.clear();
    assert!(history.logs().is_empty());
}

#[test]
fn test_upload_queue_fifo_and_drain() {
    let mut queue = UploadQueue::new(MemoryStore::new());
    queue.enqueue(sample_log("room-1", 100)).unwrap();
    queue.enqueue(sample_log("room-2", 200)).unwrap();

    let pending = queue.pending();
    assert_eq!(pending.len(), 2);
    assert_eq!(pending[0].room_id, "room-1");

    let drained = queue.drain();
    assert_eq!(drained.len(), 2);
    assert!(queue.pending().is_empty());
    assert!(queue.drain().is_empty());
}

#[test]
fn test_collaborators_round_trip_through_storage() {
    // Logs written by one collaborator instance are visible to a fresh one
    // over the same backing data
    let mut history = GameLogStore::new(MemoryStore::new());
    history.save(sample_log("room-1", 100)).unwrap();

    let json = serde_json::to_string(&history.logs()).unwrap();
    let reread: Vec<GameLog> = serde_json::from_str(&json).unwrap();
    assert_eq!(reread, history.logs());
}
