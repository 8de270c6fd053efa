//! Event domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Default page size when the `limit` query parameter is omitted.
pub const DEFAULT_LIMIT: i64 = 50;

/// Upper bound on the page size; larger requests are clamped.
pub const MAX_LIMIT: i64 = 500;

/// Main Event entity, stored in the `events` collection.
///
/// Wire names follow the collection's document shape: the identifier is
/// `_id` and the hyphenated fields keep their stored spelling.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Event {
    /// Unique identifier, assigned server-side at insert time
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,

    /// Numeric external identifier, string-encoded (digits only)
    pub uid: String,

    /// Event name
    pub name: String,

    /// Short tagline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,

    /// Long-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Moderator handle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moderator: Option<String>,

    /// Category label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Sub-category label
    #[serde(rename = "sub-category", skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,

    /// Scheduled time, the sort key for paginated reads
    pub schedule: DateTime<Utc>,

    /// Rigor rank
    #[serde(rename = "rigor-rank", skip_serializing_if = "Option::is_none")]
    pub rigor_rank: Option<i32>,
}

fn validate_uid(uid: &str) -> Result<(), ValidationError> {
    if uid.is_empty() || uid.len() > 20 || !uid.bytes().all(|b| b.is_ascii_digit()) {
        let mut err = ValidationError::new("uid");
        err.message = Some("uid must be 1-20 ASCII digits".into());
        return Err(err);
    }
    Ok(())
}

/// DTO for creating new events.
///
/// Unknown fields are rejected so callers cannot smuggle an `_id` or
/// arbitrary keys into the stored document.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateEvent {
    /// Numeric external identifier, string-encoded
    #[validate(custom(function = "validate_uid"))]
    pub uid: String,

    /// Event name
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    /// Short tagline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,

    /// Long-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Moderator handle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moderator: Option<String>,

    /// Category label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Sub-category label
    #[serde(
        rename = "sub-category",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sub_category: Option<String>,

    /// Scheduled time (RFC 3339)
    pub schedule: DateTime<Utc>,

    /// Rigor rank
    #[serde(rename = "rigor-rank", default, skip_serializing_if = "Option::is_none")]
    pub rigor_rank: Option<i32>,
}

impl From<CreateEvent> for Event {
    fn from(create: CreateEvent) -> Self {
        Self {
            id: Uuid::now_v7(),
            uid: create.uid,
            name: create.name,
            tagline: create.tagline,
            description: create.description,
            moderator: create.moderator,
            category: create.category,
            sub_category: create.sub_category,
            schedule: create.schedule,
            rigor_rank: create.rigor_rank,
        }
    }
}

/// DTO for partial updates. Only fields present in the body are written;
/// an all-empty body is rejected before it reaches the database.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateEvent {
    /// Numeric external identifier, string-encoded
    #[validate(custom(function = "validate_uid"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    /// Event name
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Short tagline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,

    /// Long-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Moderator handle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moderator: Option<String>,

    /// Category label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Sub-category label
    #[serde(
        rename = "sub-category",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sub_category: Option<String>,

    /// Scheduled time (RFC 3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<DateTime<Utc>>,

    /// Rigor rank
    #[serde(rename = "rigor-rank", default, skip_serializing_if = "Option::is_none")]
    pub rigor_rank: Option<i32>,
}

impl UpdateEvent {
    /// True when no field is present; such a body has nothing to `$set`.
    pub fn is_empty(&self) -> bool {
        self.uid.is_none()
            && self.name.is_none()
            && self.tagline.is_none()
            && self.description.is_none()
            && self.moderator.is_none()
            && self.category.is_none()
            && self.sub_category.is_none()
            && self.schedule.is_none()
            && self.rigor_rank.is_none()
    }
}

/// Query parameters for `GET /events`.
///
/// `id` wins over everything else; otherwise `type` selects the sort
/// direction and `limit`/`page` shape the window.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct EventQuery {
    /// Look up exactly one event by identifier
    pub id: Option<Uuid>,

    /// Sort selector: `latest` sorts by schedule descending,
    /// any other value ascending
    #[serde(rename = "type")]
    pub event_type: Option<String>,

    /// Page size, defaults to 50, clamped to 1..=500
    pub limit: Option<i64>,

    /// 1-based page number
    pub page: Option<u64>,
}

/// Sort direction over the `schedule` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleOrder {
    Ascending,
    Descending,
}

/// Resolved pagination window: sort direction, documents to skip,
/// and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub order: ScheduleOrder,
    pub skip: u64,
    pub limit: i64,
}

impl EventQuery {
    /// Resolve the raw query parameters into a concrete page window.
    ///
    /// `limit` falls back to [`DEFAULT_LIMIT`] and is clamped to
    /// `1..=`[`MAX_LIMIT`]. Page numbers start at 1; page 0 and page 1
    /// both address the first window.
    pub fn window(&self) -> PageWindow {
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let page = self.page.unwrap_or(1);
        // Saturating arithmetic: an absurd page number addresses a window
        // past the collection end, never a wrapped one
        let skip = page.saturating_sub(1).saturating_mul(limit as u64);

        let order = match self.event_type.as_deref() {
            Some("latest") => ScheduleOrder::Descending,
            _ => ScheduleOrder::Ascending,
        };

        PageWindow { order, skip, limit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(event_type: &str, limit: Option<i64>, page: Option<u64>) -> EventQuery {
        EventQuery {
            id: None,
            event_type: Some(event_type.to_string()),
            limit,
            page,
        }
    }

    #[test]
    fn test_latest_sorts_descending() {
        let window = query("latest", None, None).window();
        assert_eq!(window.order, ScheduleOrder::Descending);
    }

    #[test]
    fn test_other_type_sorts_ascending() {
        let window = query("upcoming", None, None).window();
        assert_eq!(window.order, ScheduleOrder::Ascending);
    }

    #[test]
    fn test_default_window() {
        let window = query("latest", None, None).window();
        assert_eq!(window.skip, 0);
        assert_eq!(window.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn test_page_window_arithmetic() {
        let window = query("latest", Some(5), Some(3)).window();
        assert_eq!(window.skip, 10);
        assert_eq!(window.limit, 5);
    }

    #[test]
    fn test_huge_page_saturates_instead_of_wrapping() {
        let window = query("latest", Some(500), Some(u64::MAX)).window();
        assert_eq!(window.skip, u64::MAX);
        assert_eq!(window.limit, 500);
    }

    #[test]
    fn test_page_zero_and_one_address_first_window() {
        assert_eq!(query("latest", Some(5), Some(0)).window().skip, 0);
        assert_eq!(query("latest", Some(5), Some(1)).window().skip, 0);
    }

    #[test]
    fn test_limit_is_clamped() {
        assert_eq!(query("latest", Some(0), None).window().limit, 1);
        assert_eq!(query("latest", Some(-7), None).window().limit, 1);
        assert_eq!(query("latest", Some(10_000), None).window().limit, MAX_LIMIT);
    }

    #[test]
    fn test_create_event_validation() {
        let valid = CreateEvent {
            uid: "1234567890".to_string(),
            name: "Intro to Databases".to_string(),
            tagline: None,
            description: None,
            moderator: None,
            category: None,
            sub_category: None,
            schedule: Utc::now(),
            rigor_rank: None,
        };
        assert!(valid.validate().is_ok());

        let mut bad_uid = valid.clone();
        bad_uid.uid = "12ab".to_string();
        assert!(bad_uid.validate().is_err());

        let mut empty_name = valid.clone();
        empty_name.name = String::new();
        assert!(empty_name.validate().is_err());
    }

    #[test]
    fn test_create_event_rejects_unknown_fields() {
        let body = serde_json::json!({
            "uid": "123",
            "name": "x",
            "schedule": "2024-01-01T00:00:00Z",
            "_id": "11111111-1111-1111-1111-111111111111"
        });
        assert!(serde_json::from_value::<CreateEvent>(body).is_err());
    }

    #[test]
    fn test_event_wire_names() {
        let event = Event {
            id: Uuid::now_v7(),
            uid: "42".to_string(),
            name: "n".to_string(),
            tagline: None,
            description: None,
            moderator: None,
            category: Some("tech".to_string()),
            sub_category: Some("databases".to_string()),
            schedule: Utc::now(),
            rigor_rank: Some(7),
        };

        let json = serde_json::to_value(&event).unwrap();
        assert!(json.get("_id").is_some());
        assert_eq!(json["sub-category"], "databases");
        assert_eq!(json["rigor-rank"], 7);
        assert!(json.get("tagline").is_none());
    }

    #[test]
    fn test_update_event_is_empty() {
        assert!(UpdateEvent::default().is_empty());

        let update = UpdateEvent {
            name: Some("renamed".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn test_create_assigns_fresh_id() {
        let create = CreateEvent {
            uid: "7".to_string(),
            name: "n".to_string(),
            tagline: None,
            description: None,
            moderator: None,
            category: None,
            sub_category: None,
            schedule: Utc::now(),
            rigor_rank: None,
        };

        let a: Event = create.clone().into();
        let b: Event = create.into();
        assert!(!a.id.is_nil());
        assert_ne!(a.id, b.id);
    }
}
