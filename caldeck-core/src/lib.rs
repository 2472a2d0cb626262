//! Core of caldeck, a personal calendar.
//!
//! This crate holds everything except painting:
//! - `store::EventStore` for event CRUD with write-through persistence
//! - `calendar_state::CalendarState` for month/week/day navigation
//! - `query` for date, range and text queries over events
//! - `view::ViewModelBuilder` for the fixed-shape grids a renderer draws
//! - `session::Session` tying the above into one command surface

pub mod caldeck_config;
pub mod calendar_state;
pub mod date;
pub mod error;
pub mod event;
pub mod query;
pub mod session;
pub mod storage;
pub mod store;
pub mod view;

pub use calendar_state::{CalendarState, Direction, View};
pub use error::{CalDeckError, CalDeckResult};
pub use event::{Event, NewEvent};
pub use session::Session;
pub use store::EventStore;
