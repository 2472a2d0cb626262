use anyhow::Result;
use caldeck_core::Session;
use caldeck_core::session::Clock;
use caldeck_core::storage::KeyValueStore;
use owo_colors::OwoColorize;

use crate::render::format_event_line;

/// Print every stored event, in insertion order.
pub fn run<S: KeyValueStore, C: Clock>(session: &Session<S, C>) -> Result<()> {
    let events = session.events();

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    for event in events {
        println!(
            "{}  {}  {}",
            event.date.format("%Y-%m-%d"),
            format_event_line(event.time.as_deref(), &event.title, event.display_color()),
            event.id.dimmed()
        );
    }

    Ok(())
}
