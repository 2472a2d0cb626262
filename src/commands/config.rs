use std::path::Path;

use anyhow::Result;
use caldeck_core::View;
use caldeck_core::caldeck_config::CalDeckConfig;
use owo_colors::OwoColorize;

/// Print the config and data paths, applying any given settings first.
pub fn run(
    config: &mut CalDeckConfig,
    config_path: &Path,
    default_view: Option<View>,
    log_level: Option<String>,
) -> Result<()> {
    let changed = default_view.is_some() || log_level.is_some();

    if let Some(view) = default_view {
        config.default_view = view;
    }
    if let Some(level) = log_level {
        config.log_level = level;
    }
    if changed {
        config.save_to(config_path)?;
        println!("{}", "  Saved configuration".green());
    }

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Data:    {}", config.data_path().display());

    println!("{}", "Settings".bold());
    println!("  Default view:  {}", config.default_view);
    println!("  Log level:     {}", config.log_level);

    Ok(())
}
