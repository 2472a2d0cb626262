use caldeck_core::query::{by_date, search, sort_by_time};
use caldeck_core::session::FixedClock;
use caldeck_core::storage::{FileStore, KeyValueStore, MemoryStore};
use caldeck_core::store::{EVENTS_KEY, parse_snapshot};
use caldeck_core::view::ViewModel;
use caldeck_core::{CalDeckError, Direction, EventStore, NewEvent, Session, View};
use chrono::NaiveDate;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_standup_shows_up_in_every_view_and_search() {
    let mut session = Session::new(MemoryStore::new(), FixedClock(day(2024, 3, 1)), View::Month);
    let standup = session
        .add_event(NewEvent::new("Standup", day(2024, 3, 15)).with_time("14:00"))
        .unwrap();

    session.select_date(day(2024, 3, 15));
    session.change_view(View::Day);
    session.select_date(day(2024, 3, 15));
    let ViewModel::Day(day_view) = session.view_model().grid else {
        panic!("expected day view");
    };
    assert_eq!(day_view.hour_slots[14].events.len(), 1);
    assert_eq!(day_view.hour_slots[14].events[0].id, standup.id);

    session.change_view(View::Month);
    let ViewModel::Month(month) = session.view_model().grid else {
        panic!("expected month view");
    };
    let cell = month
        .cells
        .iter()
        .find(|c| c.date == day(2024, 3, 15))
        .unwrap();
    assert!(!cell.is_inactive);
    assert!(cell.is_selected);
    assert_eq!(cell.events[0].title, "Standup");

    let found = session.search(Some("stand"));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, standup.id);
}

#[test]
fn test_added_event_is_found_on_its_date() {
    let mut store = EventStore::load(MemoryStore::new());
    let data = NewEvent::new("Dentist", day(2024, 2, 29))
        .with_time("09:30")
        .with_description("Bring insurance card")
        .with_color("#d9534f");
    let added = store.add(data.clone()).unwrap();

    let matches = by_date(store.list(), day(2024, 2, 29));
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0], &added);
    assert_eq!(matches[0].title, data.title);
    assert_eq!(matches[0].time, data.time);
    assert_eq!(matches[0].description, data.description);
    assert_eq!(matches[0].color, data.color);
}

#[test]
fn test_color_only_update_keeps_identity() {
    let mut store = EventStore::load(MemoryStore::new());
    let original = store
        .add(NewEvent::new("Retro", day(2024, 3, 15)).with_color("#4a6fa5"))
        .unwrap();

    let mut recolored = original.clone();
    recolored.color = Some("#5cb85c".into());
    store.update(recolored).unwrap();

    let on_day = by_date(store.list(), day(2024, 3, 15));
    let same_id: Vec<_> = on_day.iter().filter(|e| e.id == original.id).collect();
    assert_eq!(same_id.len(), 1);
    assert_eq!(same_id[0].color.as_deref(), Some("#5cb85c"));
    assert_eq!(same_id[0].title, "Retro");
    assert_eq!(same_id[0].date, day(2024, 3, 15));
}

#[test]
fn test_deleting_unknown_id_changes_nothing() {
    let mut store = EventStore::load(MemoryStore::new());
    store.add(NewEvent::new("Keep me", day(2024, 3, 15))).unwrap();

    let before = store.list().to_vec();
    let snapshot_before = store.storage().raw(EVENTS_KEY).map(String::from);

    store.delete("no-such-id").unwrap();

    assert_eq!(store.list(), before.as_slice());
    assert_eq!(store.storage().raw(EVENTS_KEY).map(String::from), snapshot_before);
}

#[test]
fn test_deleting_unknown_id_on_empty_store_writes_nothing() {
    let mut store = EventStore::load(MemoryStore::new());
    store.delete("ghost").unwrap();
    assert_eq!(store.storage().raw(EVENTS_KEY), None);
}

#[test]
fn test_deleted_ids_are_gone_everywhere() {
    let mut store = EventStore::load(MemoryStore::new());
    let a = store.add(NewEvent::new("A", day(2024, 3, 15))).unwrap();
    let b = store.add(NewEvent::new("B", day(2024, 3, 15))).unwrap();

    store.delete(&a.id).unwrap();

    assert_eq!(store.list(), &[b]);
    let persisted = parse_snapshot(store.storage().raw(EVENTS_KEY).unwrap()).unwrap();
    assert_eq!(persisted, store.list());
}

#[test]
fn test_update_of_unknown_event_is_reported() {
    let mut store = EventStore::load(MemoryStore::new());
    let mut event = store.add(NewEvent::new("A", day(2024, 3, 15))).unwrap();
    store.delete(&event.id).unwrap();

    event.title = "A again".into();
    assert!(matches!(store.update(event), Err(CalDeckError::NotFound(_))));
    assert!(store.is_empty());
}

#[test]
fn test_empty_search_returns_everything() {
    let mut store = EventStore::load(MemoryStore::new());
    store.add(NewEvent::new("One", day(2024, 3, 1))).unwrap();
    store.add(NewEvent::new("Two", day(2024, 3, 2))).unwrap();

    let all: Vec<_> = store.list().iter().collect();
    assert_eq!(search(store.list(), ""), all);
}

#[test]
fn test_detail_listing_sorts_like_sort_by_time() {
    let mut store = EventStore::load(MemoryStore::new());
    for (title, time) in [("c", None), ("b", Some("13:00")), ("a", Some("08:00"))] {
        let mut data = NewEvent::new(title, day(2024, 3, 15));
        data.time = time.map(String::from);
        store.add(data).unwrap();
    }

    let mut expected = by_date(store.list(), day(2024, 3, 15));
    sort_by_time(&mut expected);
    let expected: Vec<_> = expected.iter().map(|e| e.title.clone()).collect();
    assert_eq!(expected, ["a", "b", "c"]);
}

#[test]
fn test_short_times_sort_like_padded_times() {
    let mut session = Session::new(MemoryStore::new(), FixedClock(day(2024, 3, 15)), View::Day);
    for (title, time) in [("Lunch", "12:00"), ("Early", "7:5"), ("Breakfast", "9:00")] {
        session
            .add_event(NewEvent::new(title, day(2024, 3, 15)).with_time(time))
            .unwrap();
    }

    let listed: Vec<_> = session
        .view_model()
        .detail
        .sorted_events
        .into_iter()
        .map(|e| (e.title, e.time.unwrap_or_default()))
        .collect();
    assert_eq!(
        listed,
        [
            ("Early".to_string(), "07:05".to_string()),
            ("Breakfast".to_string(), "09:00".to_string()),
            ("Lunch".to_string(), "12:00".to_string()),
        ]
    );

    let ViewModel::Day(day_view) = session.view_model().grid else {
        panic!("expected day view");
    };
    assert_eq!(day_view.hour_slots[7].events[0].title, "Early");
    assert_eq!(day_view.hour_slots[9].events[0].title, "Breakfast");
}

#[test]
fn test_twelve_months_forward_and_back() {
    let mut session = Session::new(MemoryStore::new(), FixedClock(day(2024, 1, 31)), View::Month);
    for _ in 0..12 {
        session.navigate(Direction::Next);
    }
    assert_eq!(session.state().current_date, day(2025, 1, 29));
    for _ in 0..12 {
        session.navigate(Direction::Prev);
    }
    assert_eq!(session.state().current_date, day(2024, 1, 29));
}

#[test]
fn test_file_store_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = EventStore::load(FileStore::new(dir.path()));
    let added = store
        .add(NewEvent::new("Standup", day(2024, 3, 15)).with_time("14:00"))
        .unwrap();
    drop(store);

    let reopened = EventStore::load(FileStore::new(dir.path()));
    assert_eq!(reopened.list(), &[added]);
}

#[test]
fn test_corrupt_file_starts_empty_and_recovers() {
    let dir = tempfile::tempdir().unwrap();
    let mut raw = FileStore::new(dir.path());
    raw.set(EVENTS_KEY, "[{\"id\": 12").unwrap();

    let mut store = EventStore::load(FileStore::new(dir.path()));
    assert!(store.is_empty());

    store.add(NewEvent::new("Fresh", day(2024, 3, 15))).unwrap();
    let reopened = EventStore::load(FileStore::new(dir.path()));
    assert_eq!(reopened.len(), 1);
}

#[test]
fn test_legacy_snapshot_with_timestamps_loads() {
    let legacy = r##"[
        {"id":"1710500000000","title":"Standup","date":"2024-03-15T12:00:00.000Z",
         "time":"14:00","description":"","color":"#4a6fa5"},
        {"id":"1710500000001","title":"Holiday","date":"2024-03-18T12:00:00.000Z",
         "time":"","description":"Office closed","color":"#5cb85c"}
    ]"##;
    let store = EventStore::load(MemoryStore::new().with_value(EVENTS_KEY, legacy));

    assert_eq!(store.len(), 2);
    assert_eq!(store.list()[0].date, day(2024, 3, 15));
    assert_eq!(store.list()[0].description, None);
    assert_eq!(store.list()[1].time, None);
    assert_eq!(store.list()[1].description.as_deref(), Some("Office closed"));
}
