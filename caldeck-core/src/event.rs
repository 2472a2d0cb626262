//! Calendar event types.
//!
//! An `Event` is a titled entry pinned to a single calendar day, with an
//! optional wall-clock time. `NewEvent` is the id-less payload handed to
//! the store when an event is created.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{CalDeckError, CalDeckResult};

/// Color used by renderers when an event has none of its own.
pub const DEFAULT_EVENT_COLOR: &str = "#4a6fa5";

/// A stored calendar event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Opaque identifier, assigned by the store and never changed
    pub id: String,
    pub title: String,
    #[serde(with = "day_format")]
    pub date: NaiveDate,
    /// Start time as "HH:MM" text (None for untimed events)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Color token, e.g. "#d9534f"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Data for an event that has not been stored yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
}

impl NewEvent {
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        NewEvent {
            title: title.into(),
            date: Some(date),
            ..Default::default()
        }
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Validate the payload and turn it into an event with the given id.
    pub(crate) fn into_event(self, id: String) -> CalDeckResult<Event> {
        let date = self
            .date
            .ok_or_else(|| CalDeckError::Validation("date is required".into()))?;

        let event = Event {
            id,
            title: self.title,
            date,
            time: self.time,
            description: self.description,
            color: self.color,
        }
        .normalized();

        event.validate()?;
        Ok(event)
    }
}

impl Event {
    /// Check the fields a stored event must satisfy.
    pub fn validate(&self) -> CalDeckResult<()> {
        if self.title.trim().is_empty() {
            return Err(CalDeckError::Validation("title must not be empty".into()));
        }

        if let Some(time) = &self.time
            && NaiveTime::parse_from_str(time, "%H:%M").is_err()
        {
            return Err(CalDeckError::Validation(format!(
                "invalid time '{}'. Expected HH:MM",
                time
            )));
        }

        Ok(())
    }

    /// Collapse blank optional fields to None and zero-pad parseable
    /// times to "HH:MM", so text order is time order.
    pub fn normalized(mut self) -> Self {
        self.time = non_blank(self.time).map(|time| {
            NaiveTime::parse_from_str(&time, "%H:%M")
                .map(|t| t.format("%H:%M").to_string())
                .unwrap_or(time)
        });
        self.description = non_blank(self.description);
        self.color = non_blank(self.color);
        self
    }

    /// True when the event falls on the given calendar day.
    pub fn is_on(&self, day: NaiveDate) -> bool {
        self.date == day
    }

    pub fn display_color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_EVENT_COLOR)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Serde format for event days.
///
/// Days are written as `YYYY-MM-DD`. Reading also accepts full RFC 3339
/// timestamps, which are reduced to their local calendar day.
mod day_format {
    use chrono::{DateTime, Local, NaiveDate};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_day(&s).ok_or_else(|| {
            D::Error::custom(format!("invalid date '{}'. Expected YYYY-MM-DD", s))
        })
    }

    pub(super) fn parse_timestamp(s: &str) -> Option<NaiveDate> {
        DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Local).date_naive())
    }

    pub(super) fn parse_plain(s: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(s, FORMAT).ok()
    }
}

/// Parse a day given as `YYYY-MM-DD` or as an RFC 3339 timestamp.
pub fn parse_day(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    day_format::parse_plain(s).or_else(|| day_format::parse_timestamp(s))
}
