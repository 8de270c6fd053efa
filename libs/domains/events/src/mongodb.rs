//! MongoDB implementation of EventRepository

use crate::error::Result;
use crate::models::{Event, PageWindow, ScheduleOrder, UpdateEvent};
use crate::repository::EventRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::bson::{Bson, Document, doc, to_bson};
use mongodb::options::{FindOptions, ReturnDocument};
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

/// Stored shape of an event.
///
/// Identical to [`Event`] except that `schedule` round-trips as a native
/// BSON datetime, so schedule sorts are chronological rather than
/// lexicographic. The HTTP layer never sees this type.
#[derive(Debug, Serialize, Deserialize)]
struct EventDocument {
    #[serde(rename = "_id")]
    id: Uuid,
    uid: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    moderator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(rename = "sub-category", skip_serializing_if = "Option::is_none")]
    sub_category: Option<String>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    schedule: DateTime<Utc>,
    #[serde(rename = "rigor-rank", skip_serializing_if = "Option::is_none")]
    rigor_rank: Option<i32>,
}

impl From<Event> for EventDocument {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            uid: event.uid,
            name: event.name,
            tagline: event.tagline,
            description: event.description,
            moderator: event.moderator,
            category: event.category,
            sub_category: event.sub_category,
            schedule: event.schedule,
            rigor_rank: event.rigor_rank,
        }
    }
}

impl From<EventDocument> for Event {
    fn from(doc: EventDocument) -> Self {
        Self {
            id: doc.id,
            uid: doc.uid,
            name: doc.name,
            tagline: doc.tagline,
            description: doc.description,
            moderator: doc.moderator,
            category: doc.category,
            sub_category: doc.sub_category,
            schedule: doc.schedule,
            rigor_rank: doc.rigor_rank,
        }
    }
}

/// MongoDB-based event repository
#[derive(Clone)]
pub struct MongoEventRepository {
    collection: Collection<EventDocument>,
}

impl MongoEventRepository {
    /// Create a new MongoDB event repository
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection("events"),
        }
    }

    /// Convert chrono DateTime to BSON DateTime
    fn to_bson_datetime(dt: DateTime<Utc>) -> Bson {
        Bson::DateTime(mongodb::bson::DateTime::from_millis(dt.timestamp_millis()))
    }

    /// Create indexes for efficient querying
    pub async fn create_indexes(&self) -> Result<()> {
        use mongodb::IndexModel;

        // Sorted reads walk the schedule index in either direction
        let indexes = vec![IndexModel::builder().keys(doc! { "schedule": 1 }).build()];

        self.collection.create_indexes(indexes).await?;
        Ok(())
    }

    /// Sort document for a page window
    fn sort_doc(order: ScheduleOrder) -> Document {
        match order {
            ScheduleOrder::Ascending => doc! { "schedule": 1 },
            ScheduleOrder::Descending => doc! { "schedule": -1 },
        }
    }

    /// Build the `$set` document from the fields present in an update
    fn build_update_doc(update: &UpdateEvent) -> Document {
        let mut set = Document::new();

        if let Some(uid) = &update.uid {
            set.insert("uid", uid);
        }
        if let Some(name) = &update.name {
            set.insert("name", name);
        }
        if let Some(tagline) = &update.tagline {
            set.insert("tagline", tagline);
        }
        if let Some(description) = &update.description {
            set.insert("description", description);
        }
        if let Some(moderator) = &update.moderator {
            set.insert("moderator", moderator);
        }
        if let Some(category) = &update.category {
            set.insert("category", category);
        }
        if let Some(sub_category) = &update.sub_category {
            set.insert("sub-category", sub_category);
        }
        if let Some(schedule) = update.schedule {
            set.insert("schedule", Self::to_bson_datetime(schedule));
        }
        if let Some(rigor_rank) = update.rigor_rank {
            set.insert("rigor-rank", rigor_rank);
        }

        doc! { "$set": set }
    }
}

#[async_trait]
impl EventRepository for MongoEventRepository {
    #[instrument(skip(self, event), fields(event_id = %event.id))]
    async fn create(&self, event: Event) -> Result<Event> {
        // Single-element batch keeps the write path identical to the seeder's
        self.create_batch(vec![event])
            .await
            .map(|mut events| events.remove(0))
    }

    #[instrument(skip(self, events), fields(count = events.len()))]
    async fn create_batch(&self, events: Vec<Event>) -> Result<Vec<Event>> {
        if events.is_empty() {
            return Ok(vec![]);
        }

        let documents: Vec<EventDocument> = events.iter().cloned().map(Into::into).collect();
        self.collection.insert_many(&documents).await?;
        Ok(events)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &Uuid) -> Result<Option<Event>> {
        let filter = doc! { "_id": to_bson(id)? };
        let document = self.collection.find_one(filter).await?;
        Ok(document.map(Into::into))
    }

    #[instrument(skip(self))]
    async fn list(&self, window: &PageWindow) -> Result<Vec<Event>> {
        let options = FindOptions::builder()
            .sort(Self::sort_doc(window.order))
            .skip(window.skip)
            .limit(window.limit)
            .build();

        let cursor = self.collection.find(doc! {}).with_options(options).await?;
        let documents: Vec<EventDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self, update))]
    async fn update(&self, id: &Uuid, update: &UpdateEvent) -> Result<Option<Event>> {
        let filter = doc! { "_id": to_bson(id)? };
        let update_doc = Self::build_update_doc(update);

        let document = self
            .collection
            .find_one_and_update(filter, update_doc)
            .return_document(ReturnDocument::After)
            .await?;
        Ok(document.map(Into::into))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &Uuid) -> Result<Option<Event>> {
        let filter = doc! { "_id": to_bson(id)? };
        let document = self.collection.find_one_and_delete(filter).await?;
        Ok(document.map(Into::into))
    }
}
