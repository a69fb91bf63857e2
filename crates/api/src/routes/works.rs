//! Route definitions for the `/works` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::work;
use crate::state::AppState;

/// Routes mounted at `/works`.
///
/// ```text
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(work::create)).route(
        "/{id}",
        get(work::get_by_id).put(work::update).delete(work::delete),
    )
}
