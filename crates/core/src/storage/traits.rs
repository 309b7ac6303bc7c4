use async_trait::async_trait;

use crate::events::EventRecord;

use super::Result;

/// Repository for scheduled events, keyed by UID.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Gets an event by its UID.
    async fn get_event(&self, uid: &str) -> Result<Option<EventRecord>>;

    /// Lists every stored event in no particular order.
    async fn list_events(&self) -> Result<Vec<EventRecord>>;

    /// Creates a new event. Fails if the UID is taken.
    async fn create_event(&self, event: &EventRecord) -> Result<()>;

    /// Deletes an event by its UID.
    async fn delete_event(&self, uid: &str) -> Result<()>;
}
