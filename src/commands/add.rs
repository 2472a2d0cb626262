use anyhow::Result;
use caldeck_core::session::Clock;
use caldeck_core::storage::KeyValueStore;
use caldeck_core::{NewEvent, Session};
use owo_colors::OwoColorize;

use super::{EventFields, parse_date};

pub fn run<S: KeyValueStore, C: Clock>(
    session: &mut Session<S, C>,
    title: String,
    date: Option<&str>,
    fields: EventFields,
) -> Result<()> {
    let date = match date {
        Some(d) => parse_date(d)?,
        None => session.state().selected_date,
    };

    let data = NewEvent {
        title,
        date: Some(date),
        time: fields.time,
        description: fields.description,
        color: fields.color,
    };

    let event = session.add_event(data)?;
    println!("{}", format!("  Created: {}", event.title).green());
    println!("{}", format!("  id {}", event.id).dimmed());

    Ok(())
}
