//! Event service layer

use crate::error::{EventError, Result};
use crate::models::{CreateEvent, Event, EventQuery, UpdateEvent};
use crate::repository::EventRepository;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

/// Event service: validation, query shaping, not-found mapping.
pub struct EventService<R: EventRepository> {
    repository: R,
}

impl<R: EventRepository> EventService<R> {
    /// Create a new event service
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Create and store a new event
    #[instrument(skip(self, create), fields(event_name = %create.name))]
    pub async fn create(&self, create: CreateEvent) -> Result<Event> {
        create.validate()?;

        let event = self.repository.create(Event::from(create)).await?;
        info!(event_id = %event.id, "Event stored");
        Ok(event)
    }

    /// Create multiple events in batch
    #[instrument(skip(self, creates), fields(count = creates.len()))]
    pub async fn create_batch(&self, creates: Vec<CreateEvent>) -> Result<Vec<Event>> {
        for create in &creates {
            create.validate()?;
        }

        let events: Vec<Event> = creates.into_iter().map(Into::into).collect();
        let events = self.repository.create_batch(events).await?;
        info!(count = events.len(), "Events batch stored");
        Ok(events)
    }

    /// Resolve a read query.
    ///
    /// An `id` wins over everything else and yields a one-element list, or
    /// not-found. A `type` yields a sorted page. A query carrying neither
    /// is rejected rather than left unanswered.
    #[instrument(skip(self, query))]
    pub async fn query(&self, query: &EventQuery) -> Result<Vec<Event>> {
        if let Some(id) = query.id {
            let event = self
                .repository
                .get_by_id(&id)
                .await?
                .ok_or_else(|| EventError::not_found(id))?;
            return Ok(vec![event]);
        }

        if query.event_type.is_none() {
            return Err(EventError::validation(
                "either 'id' or 'type' query parameter is required",
            ));
        }

        self.repository.list(&query.window()).await
    }

    /// Get event by ID
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &Uuid) -> Result<Event> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| EventError::not_found(id))
    }

    /// Apply a partial update and return the updated event
    #[instrument(skip(self, update))]
    pub async fn update(&self, id: &Uuid, update: UpdateEvent) -> Result<Event> {
        update.validate()?;

        // MongoDB rejects an empty $set, so the service does too
        if update.is_empty() {
            return Err(EventError::validation("update body must set at least one field"));
        }

        self.repository
            .update(id, &update)
            .await?
            .ok_or_else(|| EventError::not_found(id))
    }

    /// Delete by ID and return the pre-delete state
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &Uuid) -> Result<Event> {
        let deleted = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| EventError::not_found(id))?;
        info!(event_id = %deleted.id, "Event deleted");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PageWindow, ScheduleOrder};
    use crate::repository::mock::MockEventRepository;
    use chrono::Utc;

    fn sample_create() -> CreateEvent {
        CreateEvent {
            uid: "1234567890".to_string(),
            name: "Intro to Databases".to_string(),
            tagline: Some("indexes for everyone".to_string()),
            description: None,
            moderator: None,
            category: Some("tech".to_string()),
            sub_category: None,
            schedule: Utc::now(),
            rigor_rank: Some(5),
        }
    }

    fn sample_event() -> Event {
        sample_create().into()
    }

    #[tokio::test]
    async fn test_create_echoes_stored_event() {
        let mut repo = MockEventRepository::new();
        repo.expect_create()
            .withf(|event: &Event| event.uid == "1234567890")
            .returning(|event| Ok(event));

        let service = EventService::new(repo);
        let event = service.create(sample_create()).await.unwrap();
        assert_eq!(event.name, "Intro to Databases");
        assert!(!event.id.is_nil());
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_uid() {
        let mut repo = MockEventRepository::new();
        repo.expect_create().never();

        let service = EventService::new(repo);
        let mut create = sample_create();
        create.uid = "not-digits".to_string();

        let err = service.create(create).await.unwrap_err();
        assert!(matches!(err, EventError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_query_by_id_returns_one_element_list() {
        let event = sample_event();
        let id = event.id;

        let mut repo = MockEventRepository::new();
        let found = event.clone();
        repo.expect_get_by_id()
            .withf(move |query_id| *query_id == id)
            .returning(move |_| Ok(Some(found.clone())));

        let service = EventService::new(repo);
        let query = EventQuery {
            id: Some(id),
            ..Default::default()
        };

        let events = service.query(&query).await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, id);
    }

    #[tokio::test]
    async fn test_query_unknown_id_is_not_found() {
        let mut repo = MockEventRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let service = EventService::new(repo);
        let query = EventQuery {
            id: Some(Uuid::now_v7()),
            ..Default::default()
        };

        let err = service.query(&query).await.unwrap_err();
        assert!(matches!(err, EventError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_query_without_id_or_type_is_rejected() {
        let mut repo = MockEventRepository::new();
        repo.expect_get_by_id().never();
        repo.expect_list().never();

        let service = EventService::new(repo);
        let err = service.query(&EventQuery::default()).await.unwrap_err();
        assert!(matches!(err, EventError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_query_latest_requests_descending_window() {
        let mut repo = MockEventRepository::new();
        repo.expect_list()
            .withf(|window: &PageWindow| {
                window.order == ScheduleOrder::Descending && window.skip == 6 && window.limit == 3
            })
            .returning(|_| Ok(vec![]));

        let service = EventService::new(repo);
        let query = EventQuery {
            event_type: Some("latest".to_string()),
            limit: Some(3),
            page: Some(3),
            ..Default::default()
        };

        service.query(&query).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_empty_body_is_rejected() {
        let mut repo = MockEventRepository::new();
        repo.expect_update().never();

        let service = EventService::new(repo);
        let err = service
            .update(&Uuid::now_v7(), UpdateEvent::default())
            .await
            .unwrap_err();
        assert!(matches!(err, EventError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let mut repo = MockEventRepository::new();
        repo.expect_update().returning(|_, _| Ok(None));

        let service = EventService::new(repo);
        let update = UpdateEvent {
            name: Some("renamed".to_string()),
            ..Default::default()
        };

        let err = service.update(&Uuid::now_v7(), update).await.unwrap_err();
        assert!(matches!(err, EventError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_returns_merged_document() {
        let mut updated = sample_event();
        updated.name = "renamed".to_string();
        let id = updated.id;

        let mut repo = MockEventRepository::new();
        let returned = updated.clone();
        repo.expect_update()
            .withf(|_, update: &UpdateEvent| update.name.as_deref() == Some("renamed"))
            .returning(move |_, _| Ok(Some(returned.clone())));

        let service = EventService::new(repo);
        let update = UpdateEvent {
            name: Some("renamed".to_string()),
            ..Default::default()
        };

        let event = service.update(&id, update).await.unwrap();
        assert_eq!(event.name, "renamed");
        // Fields absent from the update body are untouched
        assert_eq!(event.uid, "1234567890");
    }

    #[tokio::test]
    async fn test_delete_returns_pre_delete_state() {
        let event = sample_event();
        let id = event.id;

        let mut repo = MockEventRepository::new();
        let returned = event.clone();
        repo.expect_delete()
            .returning(move |_| Ok(Some(returned.clone())));

        let service = EventService::new(repo);
        let deleted = service.delete(&id).await.unwrap();
        assert_eq!(deleted.id, id);
        assert_eq!(deleted.name, event.name);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let mut repo = MockEventRepository::new();
        repo.expect_delete().returning(|_| Ok(None));

        let service = EventService::new(repo);
        let err = service.delete(&Uuid::now_v7()).await.unwrap_err();
        assert!(matches!(err, EventError::NotFound { .. }));
    }
}
