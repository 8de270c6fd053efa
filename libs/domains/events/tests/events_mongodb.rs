//! Integration tests against a live MongoDB instance.
//!
//! Requires `MONGODB_URL` (defaults to localhost). Run with:
//! `cargo test -p domain_events -- --ignored`

use chrono::{Duration, Utc};
use domain_events::{
    CreateEvent, EventError, EventQuery, EventService, MongoEventRepository, UpdateEvent,
};
use mongodb::Client;
use uuid::Uuid;

async fn connect() -> Client {
    let url =
        std::env::var("MONGODB_URL").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    database::mongodb::connect(&url)
        .await
        .expect("failed to connect to MongoDB")
}

fn scratch_db_name() -> String {
    format!("events_it_{}", Uuid::now_v7().simple())
}

fn create_event(uid: &str, name: &str, offset_hours: i64) -> CreateEvent {
    CreateEvent {
        uid: uid.to_string(),
        name: name.to_string(),
        tagline: Some("integration".to_string()),
        description: None,
        moderator: None,
        category: Some("tech".to_string()),
        sub_category: Some("databases".to_string()),
        schedule: Utc::now() + Duration::hours(offset_hours),
        rigor_rank: Some(3),
    }
}

#[tokio::test]
#[ignore] // Requires running MongoDB instance
async fn test_crud_flow() {
    let client = connect().await;
    let db_name = scratch_db_name();
    let db = client.database(&db_name);

    let repository = MongoEventRepository::new(&db);
    repository.create_indexes().await.unwrap();
    let service = EventService::new(repository);

    // Create
    let created = service
        .create(create_event("1000000001", "First", 1))
        .await
        .unwrap();
    assert!(!created.id.is_nil());

    // Lookup by id returns a one-element list
    let query = EventQuery {
        id: Some(created.id),
        ..Default::default()
    };
    let found = service.query(&query).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "First");
    // Schedule survives the BSON datetime round-trip to millisecond precision
    assert_eq!(
        found[0].schedule.timestamp_millis(),
        created.schedule.timestamp_millis()
    );

    // Partial update leaves other fields untouched
    let update = UpdateEvent {
        name: Some("First (renamed)".to_string()),
        ..Default::default()
    };
    let updated = service.update(&created.id, update).await.unwrap();
    assert_eq!(updated.name, "First (renamed)");
    assert_eq!(updated.uid, "1000000001");
    assert_eq!(updated.category.as_deref(), Some("tech"));

    // Delete echoes the pre-delete state
    let deleted = service.delete(&created.id).await.unwrap();
    assert_eq!(deleted.name, "First (renamed)");

    let err = service.delete(&created.id).await.unwrap_err();
    assert!(matches!(err, EventError::NotFound { .. }));

    db.drop().await.unwrap();
}

#[tokio::test]
#[ignore] // Requires running MongoDB instance
async fn test_pagination_and_ordering() {
    let client = connect().await;
    let db_name = scratch_db_name();
    let db = client.database(&db_name);

    let repository = MongoEventRepository::new(&db);
    repository.create_indexes().await.unwrap();
    let service = EventService::new(repository);

    let creates: Vec<CreateEvent> = (0..5)
        .map(|i| create_event(&format!("200000000{}", i), &format!("Event {}", i), i))
        .collect();
    service.create_batch(creates).await.unwrap();

    // latest: schedule descending
    let latest = service
        .query(&EventQuery {
            event_type: Some("latest".to_string()),
            limit: Some(2),
            page: Some(1),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(latest.len(), 2);
    assert_eq!(latest[0].name, "Event 4");
    assert_eq!(latest[1].name, "Event 3");

    // Second page continues the window
    let second = service
        .query(&EventQuery {
            event_type: Some("latest".to_string()),
            limit: Some(2),
            page: Some(2),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(second.len(), 2);
    assert_eq!(second[0].name, "Event 2");

    // Any other type value: schedule ascending
    let oldest = service
        .query(&EventQuery {
            event_type: Some("upcoming".to_string()),
            limit: Some(2),
            page: Some(1),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(oldest[0].name, "Event 0");

    db.drop().await.unwrap();
}
