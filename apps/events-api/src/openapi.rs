//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Events API",
        version = "0.1.0",
        description = "MongoDB-based REST API for managing events",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/v3/app", api = domain_events::ApiDoc)
    ),
    tags(
        (name = "events", description = "Event CRUD over MongoDB")
    )
)]
pub struct ApiDoc;
