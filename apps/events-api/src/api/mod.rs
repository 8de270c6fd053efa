//! API routes module

pub mod events;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Create all API routes.
/// Note: these are nested under /api/v3/app by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    Router::new().merge(events::router(state))
}
