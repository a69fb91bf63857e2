//! Route definitions for the `/organizations` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::organization;
use crate::state::AppState;

/// Routes mounted at `/organizations`.
///
/// ```text
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// GET    /{id}/works    -> list_works
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(organization::create))
        .route(
            "/{id}",
            get(organization::get_by_id)
                .put(organization::update)
                .delete(organization::delete),
        )
        .route("/{id}/works", get(organization::list_works))
}
