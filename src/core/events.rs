use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::utils::date::serializer;

// DomainEventType defines type of event for catalog changes
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum DomainEventType {
    Added,
    Lent,
    Returned,
    Removed,
}

// DomainEvent records a catalog change accepted by a library branch
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub branch_id: String,
    pub isbn: String,
    pub kind: DomainEventType,
    pub json_data: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl DomainEvent {
    pub fn added<T: Serialize>(branch_id: &str, isbn: &str, data: &T) -> serde_json::Result<Self> {
        Self::new(DomainEventType::Added, branch_id, isbn, data)
    }

    pub fn lent<T: Serialize>(branch_id: &str, isbn: &str, data: &T) -> serde_json::Result<Self> {
        Self::new(DomainEventType::Lent, branch_id, isbn, data)
    }

    pub fn returned<T: Serialize>(branch_id: &str, isbn: &str, data: &T) -> serde_json::Result<Self> {
        Self::new(DomainEventType::Returned, branch_id, isbn, data)
    }

    pub fn removed<T: Serialize>(branch_id: &str, isbn: &str, data: &T) -> serde_json::Result<Self> {
        Self::new(DomainEventType::Removed, branch_id, isbn, data)
    }

    pub fn new<T: Serialize>(kind: DomainEventType, branch_id: &str, isbn: &str, data: &T) -> serde_json::Result<Self> {
        let json = serde_json::to_string(data)?;
        Ok(DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            branch_id: branch_id.to_string(),
            isbn: isbn.to_string(),
            kind,
            json_data: json,
            created_at: Utc::now().naive_utc(),
        })
    }
}
