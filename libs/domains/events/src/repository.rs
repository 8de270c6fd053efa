//! Event repository trait

use crate::error::Result;
use crate::models::{Event, PageWindow, UpdateEvent};
use async_trait::async_trait;
use uuid::Uuid;

/// Repository trait for event storage operations
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Store a new event
    async fn create(&self, event: Event) -> Result<Event>;

    /// Store multiple events in batch
    async fn create_batch(&self, events: Vec<Event>) -> Result<Vec<Event>>;

    /// Get event by ID
    async fn get_by_id(&self, id: &Uuid) -> Result<Option<Event>>;

    /// List a page of events sorted by schedule
    async fn list(&self, window: &PageWindow) -> Result<Vec<Event>>;

    /// Apply a partial update and return the updated document,
    /// or `None` when the id matches nothing
    async fn update(&self, id: &Uuid, update: &UpdateEvent) -> Result<Option<Event>>;

    /// Delete by ID and return the pre-delete document,
    /// or `None` when the id matches nothing
    async fn delete(&self, id: &Uuid) -> Result<Option<Event>>;
}
