//! The event store.
//!
//! Owns the ordered event collection and writes a full snapshot through the
//! injected `KeyValueStore` after every mutation, before the mutating call
//! returns. A failed write rolls the in-memory change back, so the
//! collection and the persisted snapshot never disagree.

use std::collections::HashSet;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{CalDeckError, CalDeckResult};
use crate::event::{Event, NewEvent};
use crate::storage::KeyValueStore;

/// Storage key holding the serialized event collection.
pub const EVENTS_KEY: &str = "calendarEvents";

pub struct EventStore<S: KeyValueStore> {
    events: Vec<Event>,
    storage: S,
}

impl<S: KeyValueStore> EventStore<S> {
    /// Restore the collection from `storage`.
    ///
    /// A missing, unreadable or malformed snapshot leaves the store empty;
    /// the problem is logged and startup continues.
    pub fn load(storage: S) -> Self {
        let events = match storage.get(EVENTS_KEY) {
            Ok(Some(text)) => match parse_snapshot(&text) {
                Ok(events) => events,
                Err(e) => {
                    warn!(error = %e, "stored events are malformed, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => {
                debug!("no stored events, starting empty");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "could not read stored events, starting empty");
                Vec::new()
            }
        };

        debug!(count = events.len(), "loaded events");
        EventStore { events, storage }
    }

    /// All events, in insertion order.
    pub fn list(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Validate and append a new event, returning it with its assigned id.
    pub fn add(&mut self, data: NewEvent) -> CalDeckResult<Event> {
        let event = data.into_event(self.next_id())?;

        self.events.push(event.clone());
        if let Err(e) = self.persist() {
            self.events.pop();
            return Err(e);
        }

        debug!(id = %event.id, date = %event.date, "added event");
        Ok(event)
    }

    /// Replace the event with the same id, keeping its position.
    pub fn update(&mut self, event: Event) -> CalDeckResult<Event> {
        let index = self
            .position(&event.id)
            .ok_or_else(|| CalDeckError::NotFound(event.id.clone()))?;

        let event = event.normalized();
        event.validate()?;

        let previous = std::mem::replace(&mut self.events[index], event.clone());
        if let Err(e) = self.persist() {
            self.events[index] = previous;
            return Err(e);
        }

        debug!(id = %event.id, "updated event");
        Ok(event)
    }

    /// Remove the event with this id. Unknown ids are a no-op and nothing
    /// is written.
    pub fn delete(&mut self, id: &str) -> CalDeckResult<()> {
        let Some(index) = self.position(id) else {
            debug!(id, "delete of unknown event ignored");
            return Ok(());
        };

        let removed = self.events.remove(index);
        if let Err(e) = self.persist() {
            self.events.insert(index, removed);
            return Err(e);
        }

        debug!(id, "deleted event");
        Ok(())
    }

    /// Write the full collection to storage.
    pub fn persist(&mut self) -> CalDeckResult<()> {
        let snapshot = self.snapshot()?;
        self.storage.set(EVENTS_KEY, &snapshot)
    }

    /// The collection in its persisted text form.
    pub fn snapshot(&self) -> CalDeckResult<String> {
        Ok(serde_json::to_string(&self.events)?)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.events.iter().position(|e| e.id == id)
    }

    fn next_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }
}

/// Parse a persisted snapshot.
///
/// Blank optional fields are normalized away. If the snapshot repeats an
/// id, only the first occurrence is kept.
pub fn parse_snapshot(text: &str) -> CalDeckResult<Vec<Event>> {
    let stored: Vec<Event> = serde_json::from_str(text)
        .map_err(|e| CalDeckError::Persistence(format!("malformed event snapshot: {e}")))?;

    let mut seen = HashSet::new();
    let events = stored
        .into_iter()
        .map(Event::normalized)
        .filter(|event| {
            let fresh = seen.insert(event.id.clone());
            if !fresh {
                warn!(id = %event.id, "dropping duplicate stored event");
            }
            fresh
        })
        .collect();

    Ok(events)
}
