//! Command coordinator.
//!
//! A `Session` owns one `EventStore` and one `CalendarState` and exposes the
//! command surface a front end drives: navigation, selection, event CRUD and
//! search. It never paints anything; callers ask for `view_model()` after a
//! command and render that.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calendar_state::{CalendarState, Direction, View};
use crate::error::CalDeckResult;
use crate::event::{Event, NewEvent};
use crate::query;
use crate::storage::KeyValueStore;
use crate::store::EventStore;
use crate::view::{CalendarViewModel, ViewModelBuilder};

/// Storage key holding the navigation state between runs.
pub const STATE_KEY: &str = "calendarState";

/// Source of the real-world current day.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// What is saved under `STATE_KEY`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct SavedState {
    state: CalendarState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    search: Option<String>,
}

pub struct Session<S: KeyValueStore, C: Clock = SystemClock> {
    store: EventStore<S>,
    state: CalendarState,
    search: Option<String>,
    clock: C,
}

impl<S: KeyValueStore, C: Clock> Session<S, C> {
    /// Load events from `storage` and start on today in `view`.
    pub fn new(storage: S, clock: C, view: View) -> Self {
        let state = CalendarState::with_view(clock.today(), view);
        Session {
            store: EventStore::load(storage),
            state,
            search: None,
            clock,
        }
    }

    /// Like `new`, but continue from the navigation state saved by
    /// `save_state`, when there is a readable one.
    pub fn resume(storage: S, clock: C, view: View) -> Self {
        let saved = match storage.get(STATE_KEY) {
            Ok(Some(text)) => serde_json::from_str::<SavedState>(&text)
                .map_err(|e| warn!(error = %e, "saved calendar state is malformed, ignoring"))
                .ok(),
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "could not read saved calendar state");
                None
            }
        };

        let mut session = Self::new(storage, clock, view);
        if let Some(saved) = saved {
            session.state = saved.state;
            session.search = saved.search;
        }
        session
    }

    /// Persist the navigation state and search query.
    pub fn save_state(&mut self) -> CalDeckResult<()> {
        let saved = SavedState {
            state: self.state.clone(),
            search: self.search.clone(),
        };
        let text = serde_json::to_string(&saved)?;
        self.store.storage_mut().set(STATE_KEY, &text)
    }

    pub fn state(&self) -> &CalendarState {
        &self.state
    }

    pub fn store(&self) -> &EventStore<S> {
        &self.store
    }

    pub fn events(&self) -> &[Event] {
        self.store.list()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// The active search query, if any.
    pub fn search_query(&self) -> Option<&str> {
        self.search.as_deref()
    }

    // NAVIGATION:

    pub fn navigate(&mut self, direction: Direction) {
        self.state.navigate(direction);
        debug!(%direction, current = %self.state.current_date, "navigated");
    }

    pub fn go_to_today(&mut self) {
        let today = self.clock.today();
        self.state.go_to_today(today);
    }

    pub fn change_view(&mut self, view: View) {
        self.state.change_view(view);
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.state.select_date(date);
    }

    // EVENTS:

    pub fn add_event(&mut self, data: NewEvent) -> CalDeckResult<Event> {
        self.store.add(data)
    }

    pub fn update_event(&mut self, event: Event) -> CalDeckResult<Event> {
        self.store.update(event)
    }

    pub fn delete_event(&mut self, id: &str) -> CalDeckResult<()> {
        self.store.delete(id)
    }

    /// Set the search query and return the matching events. An empty or
    /// absent query clears the search and returns every event.
    pub fn search(&mut self, text: Option<&str>) -> Vec<&Event> {
        self.search = text.filter(|q| !q.is_empty()).map(String::from);

        query::search(self.store.list(), self.search.as_deref().unwrap_or(""))
    }

    /// View model for the current state, search and day.
    pub fn view_model(&self) -> CalendarViewModel {
        ViewModelBuilder::new(self.store.list(), self.clock.today())
            .with_search(self.search.as_deref())
            .build(&self.state)
    }
}
