//! Events Domain
//!
//! CRUD over the `events` collection in MongoDB:
//! - typed models with boundary validation
//! - a repository trait with a MongoDB implementation
//! - a service layer that shapes read queries (id lookup vs sorted pages)
//! - axum handlers with OpenAPI documentation

use utoipa::OpenApi;

mod error;
mod handlers;
mod models;
mod mongodb;
mod repository;
mod service;

pub use error::{EventError, Result};
pub use handlers::{EventsState, events_router};
pub use models::{
    CreateEvent, DEFAULT_LIMIT, Event, EventQuery, MAX_LIMIT, PageWindow, ScheduleOrder,
    UpdateEvent,
};
pub use mongodb::MongoEventRepository;
pub use repository::EventRepository;
pub use service::EventService;

/// OpenAPI documentation for the Events API
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::query_events,
        handlers::create_event,
        handlers::update_event,
        handlers::delete_event,
    ),
    components(
        schemas(Event, CreateEvent, UpdateEvent),
        responses(
            axum_helpers::errors::responses::BadRequestValidationResponse,
            axum_helpers::errors::responses::BadRequestUuidResponse,
            axum_helpers::errors::responses::NotFoundResponse,
            axum_helpers::errors::responses::InternalServerErrorResponse,
            axum_helpers::errors::responses::ServiceUnavailableResponse,
        )
    ),
    tags(
        (name = "events", description = "Event CRUD over MongoDB")
    )
)]
pub struct ApiDoc;
