//! Tests for the room registry

use poker_settlement_core::{DirectoryError, RoomDirectory, RoomIntent};

#[test]
fn test_create_room_with_title() {
    let mut directory = RoomDirectory::new();
    directory
        .create_or_update("room-1", Some("Friday Game"), RoomIntent::Create, 1_000)
        .unwrap();

    let room = directory.get("room-1").unwrap();
    assert_eq!(room.metadata.title, "Friday Game");
    assert_eq!(room.created_at_ms, 1_000);
    assert_eq!(room.last_connection_at_ms, 1_000);
}

#[test]
fn test_create_room_default_title() {
    let mut directory = RoomDirectory::new();
    directory
        .create_or_update("room-1", None, RoomIntent::Create, 1_000)
        .unwrap();

    assert_eq!(directory.get("room-1").unwrap().metadata.title, "New Poker Game");
}

#[test]
fn test_create_existing_room_falls_through_to_update() {
    let mut directory = RoomDirectory::new();
    directory
        .create_or_update("room-1", Some("First"), RoomIntent::Create, 1_000)
        .unwrap();

    // Re-creating is not an error; the title updates, creation time stays
    directory
        .create_or_update("room-1", Some("Renamed"), RoomIntent::Create, 2_000)
        .unwrap();

    let room = directory.get("room-1").unwrap();
    assert_eq!(room.metadata.title, "Renamed");
    assert_eq!(room.created_at_ms, 1_000);
}

#[test]
fn test_update_requires_existing_room() {
    let mut directory = RoomDirectory::new();

    let err = directory
        .create_or_update("missing", Some("Title"), RoomIntent::Update, 1_000)
        .unwrap_err();
    assert!(matches!(err, DirectoryError::NotFound { .. }));
}

#[test]
fn test_update_without_title_is_a_no_op() {
    let mut directory = RoomDirectory::new();
    directory
        .create_or_update("room-1", Some("Keep"), RoomIntent::Create, 1_000)
        .unwrap();
    directory
        .create_or_update("room-1", None, RoomIntent::Update, 2_000)
        .unwrap();

    assert_eq!(directory.get("room-1").unwrap().metadata.title, "Keep");
}

#[test]
fn test_empty_room_id_rejected() {
    let mut directory = RoomDirectory::new();

    assert_eq!(
        directory
            .create_or_update("", Some("x"), RoomIntent::Create, 1_000)
            .unwrap_err(),
        DirectoryError::MissingRoomId
    );
    assert_eq!(directory.delete("").unwrap_err(), DirectoryError::MissingRoomId);
}

#[test]
fn test_list_sorts_by_last_connection_newest_first() {
    let mut directory = RoomDirectory::new();
    directory
        .create_or_update("old", None, RoomIntent::Create, 1_000)
        .unwrap();
    directory
        .create_or_update("mid", None, RoomIntent::Create, 2_000)
        .unwrap();
    directory
        .create_or_update("new", None, RoomIntent::Create, 3_000)
        .unwrap();

    let list = directory.list();
    let ids: Vec<&str> = list.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["new", "mid", "old"]);

    // A fresh connection moves a room to the top
    directory.touch("old", 4_000).unwrap();
    let list = directory.list();
    let ids: Vec<&str> = list.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["old", "new", "mid"]);
}

#[test]
fn test_touch_unknown_room() {
    let mut directory = RoomDirectory::new();
    assert!(matches!(
        directory.touch("missing", 1_000).unwrap_err(),
        DirectoryError::NotFound { .. }
    ));
}

#[test]
fn test_delete_room() {
    let mut directory = RoomDirectory::new();
    directory
        .create_or_update("room-1", None, RoomIntent::Create, 1_000)
        .unwrap();

    directory.delete("room-1").unwrap();
    assert!(directory.get("room-1").is_none());
    assert!(matches!(
        directory.delete("room-1").unwrap_err(),
        DirectoryError::NotFound { .. }
    ));
}
