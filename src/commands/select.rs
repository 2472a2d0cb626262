use anyhow::Result;
use caldeck_core::Session;
use caldeck_core::session::Clock;
use caldeck_core::storage::KeyValueStore;

use super::parse_date;

pub fn run<S: KeyValueStore, C: Clock>(session: &mut Session<S, C>, date: &str) -> Result<()> {
    let date = parse_date(date)?;
    session.select_date(date);
    Ok(())
}
