use chrono::NaiveDate;
use serde::Serialize;

use super::ViewModelBuilder;
use crate::calendar_state::CalendarState;
use crate::date::format_long;
use crate::query;

/// Listing for the selected day, independent of the active view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailedDayViewModel {
    pub date: NaiveDate,
    /// e.g. "Friday, March 15, 2024"
    pub formatted_date: String,
    pub sorted_events: Vec<DetailedEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailedEvent {
    pub id: String,
    pub title: String,
    pub time: Option<String>,
    pub description: Option<String>,
    pub color: String,
}

impl ViewModelBuilder<'_> {
    /// Events of `selected_date` sorted by time, untimed last. While a
    /// search is active only matching events are listed.
    pub fn detail(&self, state: &CalendarState) -> DetailedDayViewModel {
        let date = state.selected_date;

        let mut events: Vec<_> = query::by_date(self.events, date)
            .into_iter()
            .filter(|e| !self.is_search_active() || self.is_highlighted(e))
            .collect();
        query::sort_by_time(&mut events);

        DetailedDayViewModel {
            date,
            formatted_date: format_long(date),
            sorted_events: events
                .into_iter()
                .map(|e| DetailedEvent {
                    id: e.id.clone(),
                    title: e.title.clone(),
                    time: e.time.clone(),
                    description: e.description.clone(),
                    color: e.display_color().to_string(),
                })
                .collect(),
        }
    }
}
