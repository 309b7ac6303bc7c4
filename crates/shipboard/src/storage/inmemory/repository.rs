//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use shipboard_core::events::EventRecord;
use shipboard_core::storage::{EventRepository, RepositoryError, Result};

/// In-memory event store keyed by UID.
///
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    events: Arc<RwLock<HashMap<String, EventRecord>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventRepository for InMemoryRepository {
    async fn get_event(&self, uid: &str) -> Result<Option<EventRecord>> {
        let events = self.events.read().await;
        Ok(events.get(uid).cloned())
    }

    async fn list_events(&self) -> Result<Vec<EventRecord>> {
        let events = self.events.read().await;
        Ok(events.values().cloned().collect())
    }

    async fn create_event(&self, event: &EventRecord) -> Result<()> {
        let mut events = self.events.write().await;
        if events.contains_key(&event.uid) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Event",
                id: event.uid.clone(),
            });
        }
        events.insert(event.uid.clone(), event.clone());
        Ok(())
    }

    async fn delete_event(&self, uid: &str) -> Result<()> {
        let mut events = self.events.write().await;
        if events.remove(uid).is_none() {
            return Err(RepositoryError::event_not_found(uid));
        }
        Ok(())
    }
}
