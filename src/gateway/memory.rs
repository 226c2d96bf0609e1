use std::sync::{Arc, Mutex};
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;

// MemoryPublisher keeps published events in order. Clones share the same event log,
// so a caller can hand one clone to a library and read the events from another.
#[derive(Debug, Clone, Default)]
pub struct MemoryPublisher {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> LibraryResult<Vec<DomainEvent>> {
        let events = self.events.lock().map_err(poisoned)?;
        Ok(events.clone())
    }
}

impl EventPublisher for MemoryPublisher {
    fn publish(&self, event: &DomainEvent) -> LibraryResult<()> {
        self.events.lock().map_err(poisoned)?.push(event.clone());
        Ok(())
    }
}

fn poisoned<T>(err: std::sync::PoisonError<T>) -> LibraryError {
    LibraryError::runtime(format!("event log unavailable {}", err).as_str(), None)
}
