use serde::Serialize;

use super::{DayCell, ViewModelBuilder};
use crate::calendar_state::CalendarState;
use crate::date::{WEEKDAY_SHORT_NAMES, month_grid_start, same_month, shift_days};

/// Six rows of seven days.
pub const MONTH_GRID_CELLS: usize = 42;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthViewModel {
    pub weekday_headers: Vec<String>,
    /// Always `MONTH_GRID_CELLS` cells, Sunday first, row by row
    pub cells: Vec<DayCell>,
}

impl ViewModelBuilder<'_> {
    /// Month grid for the month containing `current_date`.
    ///
    /// Leading and trailing cells come from the adjacent months and are
    /// marked inactive.
    pub fn month(&self, state: &CalendarState) -> MonthViewModel {
        let anchor = state.current_date;
        let start = month_grid_start(anchor);

        let cells = (0..MONTH_GRID_CELLS as i64)
            .map(|offset| {
                let date = shift_days(start, offset);
                self.cell(date, state, !same_month(date, anchor))
            })
            .collect();

        MonthViewModel {
            weekday_headers: WEEKDAY_SHORT_NAMES.iter().map(|s| s.to_string()).collect(),
            cells,
        }
    }
}
