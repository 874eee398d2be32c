use chrono::NaiveDate;
use tempfile::tempdir;
use uuid::Uuid;

use sleeplog_core::analysis::generate_stats;
use sleeplog_core::{
    ChatMessage, EntryFilter, GoalPatch, NewSleepEntry, Quality, Sender, SleepEntryPatch,
    SleepError, SleepGoal, SleepStore, SqliteStore,
};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
}

fn night(day: u32, bed: &str, wake: &str, quality: u8) -> NewSleepEntry {
    NewSleepEntry::new(
        date(day),
        bed.parse().unwrap(),
        wake.parse().unwrap(),
        Quality::try_from(quality).unwrap(),
    )
}

#[test]
fn test_entries_survive_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("sleep.db");

    let inserted = {
        let mut store = SqliteStore::open(&path).expect("open should create the file");
        store
            .insert_entry(&night(1, "22:30", "06:30", 4).with_notes("slept well"))
            .unwrap()
    };
    assert!(path.exists());

    let store = SqliteStore::open(&path).expect("reopen should succeed");
    let loaded = store.get_entry(&inserted.id).unwrap().expect("entry exists");
    assert_eq!(loaded, inserted);
    assert_eq!(loaded.duration_minutes, 480);
    assert_eq!(loaded.notes, "slept well");
}

#[test]
fn test_list_preserves_insertion_order() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    // Inserted out of date order; the tie-break depends on this order.
    store.insert_entry(&night(3, "00:00", "00:50", 1)).unwrap();
    store.insert_entry(&night(1, "00:00", "00:25", 2)).unwrap();
    store.insert_entry(&night(2, "00:00", "00:05", 1)).unwrap();

    let entries = store.list_entries(&EntryFilter::default()).unwrap();
    let days: Vec<NaiveDate> = entries.iter().map(|e| e.date).collect();
    assert_eq!(days, vec![date(3), date(1), date(2)]);

    let stats = generate_stats(&entries);
    assert_eq!(stats.best_sleep_day, Some(date(3)));
    assert_eq!(stats.worst_sleep_day, Some(date(2)));
}

#[test]
fn test_date_window_is_inclusive() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    for day in 1..=5 {
        store.insert_entry(&night(day, "23:00", "07:00", 3)).unwrap();
    }

    let filter = EntryFilter::new().since(date(2)).until(date(4));
    let entries = store.list_entries(&filter).unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].date, date(2));
    assert_eq!(entries[2].date, date(4));
}

#[test]
fn test_update_recomputes_duration() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let entry = store.insert_entry(&night(1, "22:30", "06:30", 3)).unwrap();

    let patch = SleepEntryPatch {
        bed_time: Some("23:30".parse().unwrap()),
        quality: Some(Quality::try_from(5).unwrap()),
        ..Default::default()
    };
    let updated = store.update_entry(&entry.id, &patch).unwrap();
    assert_eq!(updated.duration_minutes, 420);
    assert_eq!(updated.quality.value(), 5);

    let loaded = store.get_entry(&entry.id).unwrap().unwrap();
    assert_eq!(loaded, updated);
}

#[test]
fn test_update_and_delete_missing_entry() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let missing = Uuid::new_v4();

    let result = store.update_entry(&missing, &SleepEntryPatch::default());
    assert!(matches!(result, Err(SleepError::EntryNotFound(id)) if id == missing));

    let result = store.delete_entry(&missing);
    assert!(matches!(result, Err(SleepError::EntryNotFound(_))));
}

#[test]
fn test_delete_removes_entry() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let keep = store.insert_entry(&night(1, "23:00", "07:00", 3)).unwrap();
    let drop = store.insert_entry(&night(2, "23:00", "07:00", 3)).unwrap();

    store.delete_entry(&drop.id).unwrap();

    let entries = store.list_entries(&EntryFilter::default()).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, keep.id);
    assert!(store.get_entry(&drop.id).unwrap().is_none());
}

#[test]
fn test_goal_merge_persists() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sleep.db");

    {
        let mut store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.goal().unwrap(), SleepGoal::default());
        let goal = store
            .update_goal(&GoalPatch {
                target_duration_minutes: Some(450),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(goal.target_duration_minutes, 450);
        assert_eq!(goal.target_bed_time.to_string(), "22:30");
    }

    let store = SqliteStore::open(&path).unwrap();
    assert_eq!(store.goal().unwrap().target_duration_minutes, 450);
}

#[test]
fn test_messages_round_trip_in_order() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let first = ChatMessage::user("how am i doing");
    let second = ChatMessage::assistant("You haven't logged any sleep yet.");
    store.append_message(&first).unwrap();
    store.append_message(&second).unwrap();

    let messages = store.messages().unwrap();
    assert_eq!(messages, vec![first, second]);
    assert_eq!(messages[1].sender, Sender::Assistant);

    store.clear_messages().unwrap();
    assert!(store.messages().unwrap().is_empty());
}

#[test]
fn test_integrity_check_on_healthy_store() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.insert_entry(&night(1, "23:00", "07:00", 3)).unwrap();
    store.append_message(&ChatMessage::user("hi")).unwrap();
    store.check_integrity().expect("fresh store should be consistent");
}

#[test]
fn test_open_rejects_non_database_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sleep.db");
    std::fs::write(&path, "not a sqlite database\n".repeat(200)).unwrap();

    assert!(SqliteStore::open(&path).is_err());
}
