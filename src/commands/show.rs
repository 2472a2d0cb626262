use anyhow::Result;
use caldeck_core::Session;
use caldeck_core::session::Clock;
use caldeck_core::storage::KeyValueStore;

use crate::render::Render;

/// Paint the current view model, or print it as JSON.
pub fn run<S: KeyValueStore, C: Clock>(session: &Session<S, C>, json: bool) -> Result<()> {
    let model = session.view_model();

    if json {
        println!("{}", serde_json::to_string_pretty(&model)?);
    } else {
        println!("{}", model.render());
    }

    Ok(())
}
