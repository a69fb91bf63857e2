//! Handlers for the `/people` resource.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use roster_core::error::CoreError;
use roster_core::types::DbId;
use roster_core::validation::validate;
use roster_db::entity::Entity;
use roster_db::fields::{parse_create, parse_update, Fields};
use roster_db::models::organization::Organization;
use roster_db::models::person::Person;
use roster_db::models::work::Work;

use crate::error::{AppError, AppResult};
use crate::extract::UnitOfWork;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::not_found(Person::NAME, id))
}

/// POST /api/v1/people
pub async fn create(
    mut db: UnitOfWork,
    Json(fields): Json<Fields>,
) -> AppResult<(StatusCode, Json<Person>)> {
    let input = parse_create::<Person>(fields)?;
    validate(&input)?;
    let person = db.people().create(&input).await?;
    tracing::info!(person_id = person.id, "Person created");
    Ok((StatusCode::CREATED, Json(person)))
}

/// GET /api/v1/people/{id}
pub async fn get_by_id(mut db: UnitOfWork, Path(id): Path<DbId>) -> AppResult<Json<Person>> {
    let person = db.people().get(id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(person))
}

/// PUT /api/v1/people/{id}
pub async fn update(
    mut db: UnitOfWork,
    Path(id): Path<DbId>,
    Json(fields): Json<Fields>,
) -> AppResult<Json<Person>> {
    let changes = parse_update::<Person>(fields)?;
    validate(&changes)?;
    let existing = db.people().get(id).await?.ok_or_else(|| not_found(id))?;
    let person = db
        .people()
        .update(existing, changes)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(person))
}

/// DELETE /api/v1/people/{id}
pub async fn delete(mut db: UnitOfWork, Path(id): Path<DbId>) -> AppResult<Json<Person>> {
    let person = db.people().delete(id).await?.ok_or_else(|| not_found(id))?;
    tracing::info!(person_id = id, "Person deleted");
    Ok(Json(person))
}

/// GET /api/v1/people/{id}/works
pub async fn list_works(mut db: UnitOfWork, Path(id): Path<DbId>) -> AppResult<Json<Vec<Work>>> {
    db.people().get(id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(db.works_of_person(id).await?))
}

/// GET /api/v1/people/{id}/organizations
pub async fn list_organizations(
    mut db: UnitOfWork,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Organization>>> {
    db.people().get(id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(db.organizations_of_person(id).await?))
}
