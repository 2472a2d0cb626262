use anyhow::Result;
use caldeck_core::Session;
use caldeck_core::session::Clock;
use caldeck_core::storage::KeyValueStore;
use owo_colors::OwoColorize;

pub fn run<S: KeyValueStore, C: Clock>(session: &mut Session<S, C>, id: &str) -> Result<()> {
    // Deleting is idempotent, so look the event up first to report it
    let title = session.store().get(id).map(|e| e.title.clone());

    session.delete_event(id)?;

    match title {
        Some(title) => println!("{}", format!("  Deleted: {}", title).red()),
        None => println!("{}", format!("  No event with id {}", id).dimmed()),
    }

    Ok(())
}
