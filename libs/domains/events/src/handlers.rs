//! HTTP handlers for the events API

use crate::error::EventError;
use crate::models::{CreateEvent, Event, EventQuery, UpdateEvent};
use crate::repository::EventRepository;
use crate::service::EventService;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, put};
use axum::{Json, Router};
use axum_helpers::extractors::{UuidPath, ValidatedJson};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

/// Events router state
pub type EventsState<R> = Arc<EventService<R>>;

/// Create the events router.
///
/// Routes are relative to the `/api/v3/app` prefix applied by the
/// application router.
pub fn events_router<R: EventRepository + 'static>() -> Router<EventsState<R>> {
    Router::new()
        .route("/events", get(query_events::<R>).post(create_event::<R>))
        .route(
            "/events/{id}",
            put(update_event::<R>).delete(delete_event::<R>),
        )
}

/// Query events: one by id, or a sorted page by type
#[utoipa::path(
    get,
    path = "/events",
    params(EventQuery),
    responses(
        (status = 200, description = "Matching events", body = Vec<Event>),
        (status = 400, response = axum_helpers::errors::responses::BadRequestValidationResponse),
        (status = 404, response = axum_helpers::errors::responses::NotFoundResponse),
        (status = 500, response = axum_helpers::errors::responses::InternalServerErrorResponse),
        (status = 503, response = axum_helpers::errors::responses::ServiceUnavailableResponse)
    ),
    tag = "events"
)]
#[instrument(skip(state))]
pub async fn query_events<R: EventRepository>(
    State(state): State<EventsState<R>>,
    Query(query): Query<EventQuery>,
) -> Result<Json<Vec<Event>>, EventError> {
    let events = state.query(&query).await?;
    Ok(Json(events))
}

/// Create a new event
#[utoipa::path(
    post,
    path = "/events",
    request_body = CreateEvent,
    responses(
        (status = 201, description = "Event created", body = Event),
        (status = 400, response = axum_helpers::errors::responses::BadRequestValidationResponse),
        (status = 500, response = axum_helpers::errors::responses::InternalServerErrorResponse),
        (status = 503, response = axum_helpers::errors::responses::ServiceUnavailableResponse)
    ),
    tag = "events"
)]
#[instrument(skip(state, create), fields(event_name = %create.name))]
pub async fn create_event<R: EventRepository>(
    State(state): State<EventsState<R>>,
    ValidatedJson(create): ValidatedJson<CreateEvent>,
) -> Result<impl IntoResponse, EventError> {
    let event = state.create(create).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// Apply a partial update to an event
#[utoipa::path(
    put,
    path = "/events/{id}",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    request_body = UpdateEvent,
    responses(
        (status = 200, description = "Updated event", body = Event),
        (status = 400, response = axum_helpers::errors::responses::BadRequestUuidResponse),
        (status = 404, response = axum_helpers::errors::responses::NotFoundResponse),
        (status = 500, response = axum_helpers::errors::responses::InternalServerErrorResponse),
        (status = 503, response = axum_helpers::errors::responses::ServiceUnavailableResponse)
    ),
    tag = "events"
)]
#[instrument(skip(state, update))]
pub async fn update_event<R: EventRepository>(
    State(state): State<EventsState<R>>,
    UuidPath(id): UuidPath,
    ValidatedJson(update): ValidatedJson<UpdateEvent>,
) -> Result<Json<Event>, EventError> {
    let event = state.update(&id, update).await?;
    Ok(Json(event))
}

/// Delete an event, returning its pre-delete state
#[utoipa::path(
    delete,
    path = "/events/{id}",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Deleted event (pre-delete state)", body = Event),
        (status = 400, response = axum_helpers::errors::responses::BadRequestUuidResponse),
        (status = 404, response = axum_helpers::errors::responses::NotFoundResponse),
        (status = 500, response = axum_helpers::errors::responses::InternalServerErrorResponse),
        (status = 503, response = axum_helpers::errors::responses::ServiceUnavailableResponse)
    ),
    tag = "events"
)]
#[instrument(skip(state))]
pub async fn delete_event<R: EventRepository>(
    State(state): State<EventsState<R>>,
    UuidPath(id): UuidPath,
) -> Result<Json<Event>, EventError> {
    let event = state.delete(&id).await?;
    Ok(Json(event))
}
