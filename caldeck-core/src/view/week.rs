use serde::Serialize;

use super::{DayCell, ViewModelBuilder};
use crate::calendar_state::CalendarState;
use crate::date::{format_week_header, shift_days, week_start};

pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekViewModel {
    /// Weekday plus day/month, e.g. "Fri 15/3"
    pub weekday_headers: Vec<String>,
    pub cells: Vec<DayCell>,
}

impl ViewModelBuilder<'_> {
    /// The Sunday-first week containing `current_date`.
    pub fn week(&self, state: &CalendarState) -> WeekViewModel {
        let start = week_start(state.current_date);
        let days: Vec<_> = (0..DAYS_PER_WEEK as i64)
            .map(|offset| shift_days(start, offset))
            .collect();

        WeekViewModel {
            weekday_headers: days.iter().map(|d| format_week_header(*d)).collect(),
            cells: days.iter().map(|d| self.cell(*d, state, false)).collect(),
        }
    }
}
