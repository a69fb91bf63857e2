//! Route definitions for the association resources.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::association;
use crate::state::AppState;

/// Routes mounted at `/person-works`.
///
/// ```text
/// POST   /        -> create_person_work
/// GET    /{id}    -> get_person_work
/// PATCH  /{id}    -> update_person_work
/// DELETE /{id}    -> delete_person_work
/// ```
pub fn person_work_router() -> Router<AppState> {
    Router::new()
        .route("/", post(association::create_person_work))
        .route(
            "/{id}",
            get(association::get_person_work)
                .patch(association::update_person_work)
                .delete(association::delete_person_work),
        )
}

/// Routes mounted at `/person-organizations`.
///
/// ```text
/// POST   /        -> create_person_organization
/// GET    /{id}    -> get_person_organization
/// PATCH  /{id}    -> update_person_organization
/// DELETE /{id}    -> delete_person_organization
/// ```
pub fn person_organization_router() -> Router<AppState> {
    Router::new()
        .route("/", post(association::create_person_organization))
        .route(
            "/{id}",
            get(association::get_person_organization)
                .patch(association::update_person_organization)
                .delete(association::delete_person_organization),
        )
}
