mod commands;
mod logging;
mod render;

use anyhow::{Context, Result};
use caldeck_core::caldeck_config::CalDeckConfig;
use caldeck_core::session::SystemClock;
use caldeck_core::storage::FileStore;
use caldeck_core::{Direction, Session, View};
use clap::{Parser, Subcommand};

use crate::commands::EventFields;

#[derive(Parser)]
#[command(name = "caldeck")]
#[command(about = "Browse, record and search your calendar events")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current view and the selected day
    Show {
        /// Print the view model as JSON instead of drawing it
        #[arg(long)]
        json: bool,
    },
    /// Go to the next month, week or day
    Next,
    /// Go to the previous month, week or day
    Prev,
    /// Jump back to today
    Today,
    /// Switch between month, week and day views
    View { view: View },
    /// Focus a day (YYYY-MM-DD)
    Select { date: String },
    /// Add an event
    Add {
        title: String,

        /// Day of the event (YYYY-MM-DD), defaults to the selected day
        #[arg(short, long)]
        date: Option<String>,

        #[command(flatten)]
        fields: EventFields,
    },
    /// Change an event. Pass an empty string to clear an optional field.
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        /// New day (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        #[command(flatten)]
        fields: EventFields,
    },
    /// Delete an event
    Delete { id: String },
    /// Highlight events matching text; run without text to clear
    Search { text: Option<String> },
    /// List every stored event
    List,
    /// Show config paths, or change settings
    Config {
        /// View a fresh session opens in
        #[arg(long)]
        default_view: Option<View>,

        /// Log filter used when RUST_LOG is not set, e.g. "debug"
        #[arg(long)]
        log_level: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CalDeckConfig::load().context("Failed to load configuration")?;
    logging::init(&config.log_level);

    let command = cli.command.unwrap_or(Commands::Show { json: false });
    if let Commands::Config {
        default_view,
        log_level,
    } = command
    {
        let config_path = CalDeckConfig::config_path()?;
        return commands::config::run(&mut config, &config_path, default_view, log_level);
    }

    let storage = FileStore::new(config.data_path());
    let mut session = Session::resume(storage, SystemClock, config.default_view);
    tracing::debug!(
        events = session.events().len(),
        view = %session.state().view,
        "Session ready"
    );

    let json = matches!(command, Commands::Show { json: true });

    match command {
        Commands::Show { .. } => {}
        Commands::Next => session.navigate(Direction::Next),
        Commands::Prev => session.navigate(Direction::Prev),
        Commands::Today => session.go_to_today(),
        Commands::View { view } => session.change_view(view),
        Commands::Select { date } => commands::select::run(&mut session, &date)?,
        Commands::Add {
            title,
            date,
            fields,
        } => commands::add::run(&mut session, title, date.as_deref(), fields)?,
        Commands::Edit {
            id,
            title,
            date,
            fields,
        } => commands::edit::run(&mut session, &id, title, date.as_deref(), fields)?,
        Commands::Delete { id } => commands::delete::run(&mut session, &id)?,
        Commands::Search { text } => commands::search::run(&mut session, text.as_deref()),
        Commands::List => return commands::list::run(&session),
        Commands::Config { .. } => {}
    }

    session
        .save_state()
        .context("Failed to save calendar state")?;

    commands::show::run(&session, json)
}
