use caldeck_core::query::{by_date, search, sort_by_time};
use caldeck_core::storage::MemoryStore;
use caldeck_core::store::{EVENTS_KEY, parse_snapshot};
use caldeck_core::view::{DAYS_PER_WEEK, HOURS_PER_DAY, MONTH_GRID_CELLS, ViewModelBuilder};
use caldeck_core::{CalendarState, Direction, Event, EventStore, NewEvent, View};
use chrono::{Datelike, Months, NaiveDate, Weekday};
use proptest::prelude::*;

fn arb_day() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2200, 1u32..=12, 1u32..=31).prop_map(|(y, m, d)| {
        // Clamp into the month so every generated triple is a real day
        let mut d = d;
        loop {
            if let Some(date) = NaiveDate::from_ymd_opt(y, m, d) {
                return date;
            }
            d -= 1;
        }
    })
}

fn arb_time() -> impl Strategy<Value = Option<String>> {
    prop::option::of((0u32..24, 0u32..60).prop_map(|(h, m)| format!("{:02}:{:02}", h, m)))
}

fn arb_new_event() -> impl Strategy<Value = NewEvent> {
    (
        "[A-Za-z][A-Za-z ]{0,20}",
        arb_day(),
        arb_time(),
        prop::option::of("[a-z ]{1,30}"),
        prop::option::of("#[0-9a-f]{6}"),
    )
        .prop_map(|(title, date, time, description, color)| NewEvent {
            title,
            date: Some(date),
            time,
            description,
            color,
        })
}

fn store_with(events: Vec<NewEvent>) -> EventStore<MemoryStore> {
    let mut store = EventStore::load(MemoryStore::new());
    for data in events {
        store.add(data).unwrap();
    }
    store
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every added event is found again on its own date.
    #[test]
    fn prop_added_event_found_by_date(events in prop::collection::vec(arb_new_event(), 1..10)) {
        let mut store = EventStore::load(MemoryStore::new());
        for data in events {
            let added = store.add(data).unwrap();
            let on_day = by_date(store.list(), added.date);
            prop_assert!(on_day.iter().any(|e| **e == added));
        }
    }

    /// Loading what was persisted yields the same collection, ids included.
    #[test]
    fn prop_snapshot_round_trip(events in prop::collection::vec(arb_new_event(), 0..10)) {
        let mut store = store_with(events);
        store.persist().unwrap();

        let persisted = store.storage().raw(EVENTS_KEY).unwrap().to_string();
        prop_assert_eq!(parse_snapshot(&persisted).unwrap(), store.list().to_vec());

        let reloaded = EventStore::load(store.into_storage());
        let reparsed: Vec<Event> = parse_snapshot(&persisted).unwrap();
        prop_assert_eq!(reloaded.list(), reparsed.as_slice());
    }

    /// Grids always have their fixed shape.
    #[test]
    fn prop_grid_shapes(current in arb_day(), selected in arb_day(), today in arb_day()) {
        let mut state = CalendarState::new(current);
        state.select_date(selected);
        let builder = ViewModelBuilder::new(&[], today);

        let month = builder.month(&state);
        prop_assert_eq!(month.cells.len(), MONTH_GRID_CELLS);
        prop_assert_eq!(month.weekday_headers.len(), 7);
        prop_assert_eq!(month.cells[0].date.weekday(), Weekday::Sun);

        let active = month.cells.iter().filter(|c| !c.is_inactive).count() as u32;
        let first = caldeck_core::date::first_of_month(current);
        let days_in_month = first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .map(|last| last.day())
            .unwrap();
        prop_assert_eq!(active, days_in_month);
        prop_assert!(month.cells.windows(2).all(|w| w[1].date.pred_opt() == Some(w[0].date)));

        let week = builder.week(&state);
        prop_assert_eq!(week.cells.len(), DAYS_PER_WEEK);
        prop_assert_eq!(week.weekday_headers.len(), DAYS_PER_WEEK);
        prop_assert!(week.cells.iter().any(|c| c.date == current));

        state.change_view(View::Day);
        let day = builder.day(&state);
        prop_assert_eq!(day.hour_slots.len(), HOURS_PER_DAY);
    }

    /// Twelve months forward then twelve back returns to the same month.
    #[test]
    fn prop_month_navigation_round_trip(start in arb_day()) {
        let mut state = CalendarState::new(start);
        for _ in 0..12 {
            state.navigate(Direction::Next);
        }
        prop_assert_eq!(state.current_date.year(), start.year() + 1);
        prop_assert_eq!(state.current_date.month(), start.month());
        for _ in 0..12 {
            state.navigate(Direction::Prev);
        }
        prop_assert_eq!(state.current_date.year(), start.year());
        prop_assert_eq!(state.current_date.month(), start.month());
    }

    /// Day navigation always keeps the selection on the visible day.
    #[test]
    fn prop_day_view_keeps_dates_equal(start in arb_day(), steps in prop::collection::vec(any::<bool>(), 0..20)) {
        let mut state = CalendarState::new(start);
        state.change_view(View::Day);
        state.select_date(start);
        for forward in steps {
            state.navigate(if forward { Direction::Next } else { Direction::Prev });
            prop_assert_eq!(state.current_date, state.selected_date);
        }
    }

    /// An empty search is no filter.
    #[test]
    fn prop_empty_search_is_identity(events in prop::collection::vec(arb_new_event(), 0..10)) {
        let store = store_with(events);
        let all: Vec<&Event> = store.list().iter().collect();
        prop_assert_eq!(search(store.list(), ""), all);
    }

    /// Untimed events come last and keep their original order.
    #[test]
    fn prop_sort_by_time_orders_untimed_last(events in prop::collection::vec(arb_new_event(), 0..15)) {
        let store = store_with(events);
        let mut sorted: Vec<&Event> = store.list().iter().collect();
        sort_by_time(&mut sorted);

        let first_untimed = sorted.iter().position(|e| e.time.is_none()).unwrap_or(sorted.len());
        prop_assert!(sorted[first_untimed..].iter().all(|e| e.time.is_none()));
        prop_assert!(sorted[..first_untimed].windows(2).all(|w| w[0].time <= w[1].time));

        let untimed_sorted: Vec<&str> = sorted[first_untimed..].iter().map(|e| e.id.as_str()).collect();
        let untimed_original: Vec<&str> = store
            .list()
            .iter()
            .filter(|e| e.time.is_none())
            .map(|e| e.id.as_str())
            .collect();
        prop_assert_eq!(untimed_sorted, untimed_original);
    }
}
