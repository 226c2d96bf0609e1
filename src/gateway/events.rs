use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;

// EventPublisher delivers catalog events. The library applies a change before
// publishing it, so an error here leaves the change in place.
pub trait EventPublisher: Sync + Send {
    fn publish(&self, event: &DomainEvent) -> LibraryResult<()>;
}
