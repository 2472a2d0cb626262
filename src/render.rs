//! Terminal rendering for caldeck view models.
//!
//! This module provides extension traits that paint the core's view models
//! as colored text using owo_colors. Layout is done on plain strings first
//! and colored afterwards, so ANSI codes never disturb column widths.

use caldeck_core::view::{
    CalendarViewModel, DayCell, DayViewModel, DetailedDayViewModel, EventItem, MonthViewModel,
    ViewModel, WeekViewModel,
};
use owo_colors::OwoColorize;

/// Width of one day column in month and week grids
const COLUMN_WIDTH: usize = 14;

/// Events listed per cell before collapsing into "+N more"
const MAX_CELL_EVENTS: usize = 3;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for CalendarViewModel {
    fn render(&self) -> String {
        let grid = match &self.grid {
            ViewModel::Month(month) => month.render(),
            ViewModel::Week(week) => week.render(),
            ViewModel::Day(day) => day.render(),
        };

        format!(
            "{}\n\n{}\n\n{}",
            self.title.bold(),
            grid,
            self.detail.render()
        )
    }
}

impl Render for MonthViewModel {
    fn render(&self) -> String {
        let mut lines = vec![render_headers(&self.weekday_headers)];
        for week in self.cells.chunks(7) {
            lines.extend(render_row(week));
        }
        lines.join("\n")
    }
}

impl Render for WeekViewModel {
    fn render(&self) -> String {
        let mut lines = vec![render_headers(&self.weekday_headers)];
        lines.extend(render_row(&self.cells));
        lines.join("\n")
    }
}

impl Render for DayViewModel {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        if !self.untimed.is_empty() {
            lines.push(format!(
                "{} {}",
                fit("all day", 7).dimmed(),
                render_items(&self.untimed)
            ));
        }

        for slot in &self.hour_slots {
            lines.push(format!(
                "{} {}",
                fit(&slot.label, 7).dimmed(),
                render_items(&slot.events)
            ));
        }

        lines.join("\n")
    }
}

impl Render for DetailedDayViewModel {
    fn render(&self) -> String {
        let mut lines = vec![self.formatted_date.bold().underline().to_string()];

        if self.sorted_events.is_empty() {
            lines.push("  No events for this day.".dimmed().to_string());
            return lines.join("\n");
        }

        for event in &self.sorted_events {
            lines.push(format!(
                "  {}",
                format_event_line(event.time.as_deref(), &event.title, &event.color)
            ));
            let description = event.description.as_deref().unwrap_or("No description");
            lines.push(format!("         {}", description.dimmed()));
        }

        lines.join("\n")
    }
}

/// One event as "HH:MM title" (or "All Day title"), title in its color.
pub fn format_event_line(time: Option<&str>, title: &str, color: &str) -> String {
    let time = fit(time.unwrap_or("All Day"), 7);
    match parse_hex_color(color) {
        Some((r, g, b)) => format!("{} {}", time, title.truecolor(r, g, b)),
        None => format!("{} {}", time, title),
    }
}

fn render_headers(headers: &[String]) -> String {
    headers
        .iter()
        .map(|h| fit(h, COLUMN_WIDTH).bold().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render one row of day cells: a line of day numbers, then event lines.
fn render_row(cells: &[DayCell]) -> Vec<String> {
    let numbers = cells
        .iter()
        .map(render_day_number)
        .collect::<Vec<_>>()
        .join(" ");

    let mut lines = vec![numbers];
    for index in 0..MAX_CELL_EVENTS + 1 {
        let line = cells
            .iter()
            .map(|cell| render_cell_line(cell, index))
            .collect::<Vec<_>>();
        if line.iter().all(|s| s.trim().is_empty()) {
            break;
        }
        lines.push(line.join(" "));
    }

    lines
}

fn render_day_number(cell: &DayCell) -> String {
    let marker = if cell.is_selected { "*" } else { "" };
    let text = fit(&format!("{}{}", cell.day_number, marker), COLUMN_WIDTH);

    if cell.is_today {
        text.reversed().to_string()
    } else if cell.is_inactive {
        text.dimmed().to_string()
    } else if cell.is_selected {
        text.underline().to_string()
    } else {
        text
    }
}

/// Line `index` of a cell's event list, padded to the column width.
fn render_cell_line(cell: &DayCell, index: usize) -> String {
    let total = cell.events.len();

    if index < MAX_CELL_EVENTS || total == MAX_CELL_EVENTS + 1 {
        match cell.events.get(index) {
            Some(item) => render_cell_item(item, cell.is_inactive),
            None => fit("", COLUMN_WIDTH),
        }
    } else if index == MAX_CELL_EVENTS && total > MAX_CELL_EVENTS + 1 {
        let more = format!("+{} more", total - MAX_CELL_EVENTS);
        fit(&more, COLUMN_WIDTH).dimmed().to_string()
    } else {
        fit("", COLUMN_WIDTH)
    }
}

fn render_cell_item(item: &EventItem, inactive: bool) -> String {
    let text = fit(&format!("• {}", item.title), COLUMN_WIDTH);
    if inactive || !item.highlighted {
        return text.dimmed().to_string();
    }
    match parse_hex_color(&item.color) {
        Some((r, g, b)) => text.truecolor(r, g, b).to_string(),
        None => text,
    }
}

fn render_items(items: &[EventItem]) -> String {
    items
        .iter()
        .map(|item| {
            let line = format_event_line(item.time.as_deref(), &item.title, &item.color);
            if item.highlighted {
                line
            } else {
                line.dimmed().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Truncate or pad `s` to exactly `width` characters.
fn fit(s: &str, width: usize) -> String {
    let count = s.chars().count();
    if count > width {
        let mut truncated: String = s.chars().take(width.saturating_sub(1)).collect();
        truncated.push('…');
        truncated
    } else {
        format!("{}{}", s, " ".repeat(width - count))
    }
}

/// Parse "#rrggbb" into RGB components.
fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
