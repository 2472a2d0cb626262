use chrono::NaiveDate;
use serde::Serialize;

use super::{EventItem, ViewModelBuilder};
use crate::calendar_state::CalendarState;
use crate::query::{self, hour_of};

pub const HOURS_PER_DAY: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourSlot {
    pub hour: u32,
    /// "00:00" through "23:00"
    pub label: String,
    pub events: Vec<EventItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayViewModel {
    pub date: NaiveDate,
    /// Always `HOURS_PER_DAY` slots, hour 0 first
    pub hour_slots: Vec<HourSlot>,
    /// Events of the day without a parseable time; never in any slot
    pub untimed: Vec<EventItem>,
}

impl ViewModelBuilder<'_> {
    /// Hourly schedule for `current_date`.
    pub fn day(&self, state: &CalendarState) -> DayViewModel {
        let date = state.current_date;
        let events = query::by_date(self.events, date);

        let mut hour_slots: Vec<HourSlot> = (0..HOURS_PER_DAY as u32)
            .map(|hour| HourSlot {
                hour,
                label: format!("{:02}:00", hour),
                events: Vec::new(),
            })
            .collect();
        let mut untimed = Vec::new();

        for event in events {
            match event.time.as_deref().and_then(hour_of) {
                Some(hour) => hour_slots[hour as usize].events.push(self.item(event)),
                None => untimed.push(self.item(event)),
            }
        }

        DayViewModel {
            date,
            hour_slots,
            untimed,
        }
    }
}
