use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

// LogPublisher writes every catalog event to the tracing subscriber.
#[derive(Debug, Default)]
pub struct LogPublisher {}

impl LogPublisher {
    pub fn new() -> Self {
        Self {}
    }
}

impl EventPublisher for LogPublisher {
    fn publish(&self, event: &DomainEvent) -> LibraryResult<()> {
        info!(event_id = %event.event_id, branch_id = %event.branch_id, isbn = %event.isbn,
            kind = ?event.kind, data = %event.json_data, "catalog event");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::logs::LogPublisher;

    #[test]
    fn test_should_publish_without_subscriber() {
        let event = DomainEvent::removed("test", "isbn", &"data").expect("build event");
        assert!(LogPublisher::new().publish(&event).is_ok());
    }
}
