//! Route definitions for the `/people` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::person;
use crate::state::AppState;

/// Routes mounted at `/people`.
///
/// ```text
/// POST   /                      -> create
/// GET    /{id}                  -> get_by_id
/// PUT    /{id}                  -> update
/// DELETE /{id}                  -> delete
/// GET    /{id}/works            -> list_works
/// GET    /{id}/organizations    -> list_organizations
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(person::create))
        .route(
            "/{id}",
            get(person::get_by_id)
                .put(person::update)
                .delete(person::delete),
        )
        .route("/{id}/works", get(person::list_works))
        .route("/{id}/organizations", get(person::list_organizations))
}
