pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod list;
pub mod search;
pub mod select;
pub mod show;

use anyhow::Result;
use caldeck_core::event::parse_day;
use chrono::NaiveDate;
use clap::Args;

/// Optional event fields shared by `add` and `edit`.
#[derive(Args, Debug, Default)]
pub struct EventFields {
    /// Start time (HH:MM)
    #[arg(short, long)]
    pub time: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Color, e.g. "#d9534f"
    #[arg(short, long)]
    pub color: Option<String>,
}

/// Parse a YYYY-MM-DD day argument.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    parse_day(s).ok_or_else(|| anyhow::anyhow!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
}
