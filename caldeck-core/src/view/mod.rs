//! Renderer-agnostic view models.
//!
//! `ViewModelBuilder` turns a navigation state and an event snapshot into
//! fixed-shape grids: 42 day cells for a month, 7 for a week, 24 hour slots
//! for a day, plus the detailed listing for the selected day. Building is
//! pure. "Today" and the active search query are explicit inputs, so the
//! same inputs always give the same model.

mod day;
mod detail;
mod month;
mod week;

pub use day::{DayViewModel, HOURS_PER_DAY, HourSlot};
pub use detail::{DetailedDayViewModel, DetailedEvent};
pub use month::{MONTH_GRID_CELLS, MonthViewModel};
pub use week::{DAYS_PER_WEEK, WeekViewModel};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::calendar_state::{CalendarState, View};
use crate::date::format_month_title;
use crate::event::Event;
use crate::query;

/// An event as listed inside a cell or slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventItem {
    pub id: String,
    pub title: String,
    pub time: Option<String>,
    /// Resolved display color (the event's own, or the default)
    pub color: String,
    /// False when a search is active and this event does not match it
    pub highlighted: bool,
}

/// One calendar day on a month or week grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub day_number: u32,
    pub is_today: bool,
    pub is_selected: bool,
    /// Day belongs to an adjacent month (month grid only)
    pub is_inactive: bool,
    pub events: Vec<EventItem>,
}

/// The grid for the active view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ViewModel {
    Month(MonthViewModel),
    Week(WeekViewModel),
    Day(DayViewModel),
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarViewModel {
    /// Month and year of the current page, e.g. "March 2024"
    pub title: String,
    pub grid: ViewModel,
    pub detail: DetailedDayViewModel,
}

pub struct ViewModelBuilder<'a> {
    events: &'a [Event],
    today: NaiveDate,
    query: Option<&'a str>,
}

impl<'a> ViewModelBuilder<'a> {
    pub fn new(events: &'a [Event], today: NaiveDate) -> Self {
        ViewModelBuilder {
            events,
            today,
            query: None,
        }
    }

    /// Highlight matches of `query`. An empty query clears the search.
    pub fn with_search(mut self, query: Option<&'a str>) -> Self {
        self.query = query.filter(|q| !q.is_empty());
        self
    }

    /// Build the grid for the active view and the selected-day detail.
    pub fn build(&self, state: &CalendarState) -> CalendarViewModel {
        let grid = match state.view {
            View::Month => ViewModel::Month(self.month(state)),
            View::Week => ViewModel::Week(self.week(state)),
            View::Day => ViewModel::Day(self.day(state)),
        };

        CalendarViewModel {
            title: format_month_title(state.current_date),
            grid,
            detail: self.detail(state),
        }
    }

    fn is_search_active(&self) -> bool {
        self.query.is_some()
    }

    fn is_highlighted(&self, event: &Event) -> bool {
        self.query.is_none_or(|q| query::matches_query(event, q))
    }

    fn item(&self, event: &Event) -> EventItem {
        EventItem {
            id: event.id.clone(),
            title: event.title.clone(),
            time: event.time.clone(),
            color: event.display_color().to_string(),
            highlighted: self.is_highlighted(event),
        }
    }

    fn items_on(&self, date: NaiveDate) -> Vec<EventItem> {
        query::by_date(self.events, date)
            .into_iter()
            .map(|e| self.item(e))
            .collect()
    }

    /// Inactive cells never carry the today or selected flag.
    fn cell(&self, date: NaiveDate, state: &CalendarState, is_inactive: bool) -> DayCell {
        DayCell {
            date,
            day_number: date.day(),
            is_today: !is_inactive && date == self.today,
            is_selected: !is_inactive && date == state.selected_date,
            is_inactive,
            events: self.items_on(date),
        }
    }
}
