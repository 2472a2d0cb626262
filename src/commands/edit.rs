use anyhow::Result;
use caldeck_core::session::Clock;
use caldeck_core::storage::KeyValueStore;
use caldeck_core::{CalDeckError, Session};
use owo_colors::OwoColorize;

use super::{EventFields, parse_date};

/// Apply the given changes to an existing event. Fields left out keep
/// their value; an empty string clears an optional field.
pub fn run<S: KeyValueStore, C: Clock>(
    session: &mut Session<S, C>,
    id: &str,
    title: Option<String>,
    date: Option<&str>,
    fields: EventFields,
) -> Result<()> {
    let mut event = session
        .store()
        .get(id)
        .cloned()
        .ok_or_else(|| CalDeckError::NotFound(id.to_string()))?;

    if let Some(title) = title {
        event.title = title;
    }
    if let Some(date) = date {
        event.date = parse_date(date)?;
    }
    if let Some(time) = fields.time {
        event.time = Some(time);
    }
    if let Some(description) = fields.description {
        event.description = Some(description);
    }
    if let Some(color) = fields.color {
        event.color = Some(color);
    }

    let event = session.update_event(event)?;
    println!("{}", format!("  Updated: {}", event.title).yellow());

    Ok(())
}
