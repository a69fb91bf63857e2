pub mod associations;
pub mod health;
pub mod organizations;
pub mod people;
pub mod works;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /people                      create
/// /people/{id}                 get, update, delete
/// /people/{id}/works           works the person has a role on
/// /people/{id}/organizations   organizations the person has a role in
///
/// /works                       create
/// /works/{id}                  get, update, delete
///
/// /organizations               create
/// /organizations/{id}          get, update, delete (with owned works)
/// /organizations/{id}/works    owned works
///
/// /person-works                create (person and work must exist)
/// /person-works/{id}           get, patch, delete
///
/// /person-organizations        create (person and organization must exist)
/// /person-organizations/{id}   get, patch, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/people", people::router())
        .nest("/works", works::router())
        .nest("/organizations", organizations::router())
        .nest("/person-works", associations::person_work_router())
        .nest(
            "/person-organizations",
            associations::person_organization_router(),
        )
}
