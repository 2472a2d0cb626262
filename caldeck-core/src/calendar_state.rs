//! Calendar navigation state.
//!
//! Tracks which page is visible (`current_date` + `view`) and which day has
//! focus (`selected_date`). In day view the two dates move together.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::{shift_days, shift_months};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Month,
    Week,
    Day,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    fn sign(self) -> i32 {
        match self {
            Direction::Prev => -1,
            Direction::Next => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarState {
    pub current_date: NaiveDate,
    pub selected_date: NaiveDate,
    pub view: View,
}

impl CalendarState {
    /// Fresh state anchored on `today`, in month view.
    pub fn new(today: NaiveDate) -> Self {
        Self::with_view(today, View::Month)
    }

    pub fn with_view(today: NaiveDate, view: View) -> Self {
        CalendarState {
            current_date: today,
            selected_date: today,
            view,
        }
    }

    /// Move one page in `direction`: a month, a week or a day depending on
    /// the active view. Month steps clamp the day of month.
    pub fn navigate(&mut self, direction: Direction) {
        let sign = direction.sign();
        match self.view {
            View::Month => {
                self.current_date = shift_months(self.current_date, sign);
            }
            View::Week => {
                self.current_date = shift_days(self.current_date, 7 * i64::from(sign));
            }
            View::Day => {
                self.current_date = shift_days(self.current_date, i64::from(sign));
                self.selected_date = self.current_date;
            }
        }
    }

    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.current_date = today;
        self.selected_date = today;
    }

    pub fn change_view(&mut self, view: View) {
        self.view = view;
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
        if self.view == View::Day {
            self.current_date = date;
        }
    }
}

impl View {
    pub fn as_str(self) -> &'static str {
        match self {
            View::Month => "month",
            View::Week => "week",
            View::Day => "day",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "month" => Ok(View::Month),
            "week" => Ok(View::Week),
            "day" => Ok(View::Day),
            other => Err(format!(
                "Unknown view '{}'. Expected month, week or day",
                other
            )),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Prev => write!(f, "prev"),
            Direction::Next => write!(f, "next"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prev" => Ok(Direction::Prev),
            "next" => Ok(Direction::Next),
            other => Err(format!("Unknown direction '{}'. Expected prev or next", other)),
        }
    }
}
