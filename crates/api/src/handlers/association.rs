//! Handlers for the `/person-works` and `/person-organizations` resources.
//!
//! Writes go through the coordinator, which confirms the referenced person
//! and work/organization exist before touching the association table.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use roster_core::error::CoreError;
use roster_core::types::DbId;
use roster_core::validation::validate;
use roster_db::entity::Entity;
use roster_db::fields::{parse_create, parse_update, Fields};
use roster_db::models::association::{PersonOrganization, PersonWork};

use crate::error::{AppError, AppResult};
use crate::extract::UnitOfWork;

fn not_found<E: Entity>(id: DbId) -> AppError {
    AppError::Core(CoreError::not_found(E::NAME, id))
}

// ---------------------------------------------------------------------------
// Person <-> Work
// ---------------------------------------------------------------------------

/// POST /api/v1/person-works
pub async fn create_person_work(
    mut db: UnitOfWork,
    Json(fields): Json<Fields>,
) -> AppResult<(StatusCode, Json<PersonWork>)> {
    let input = parse_create::<PersonWork>(fields)?;
    validate(&input)?;
    let link = db.create_person_work(&input).await?;
    tracing::info!(
        person_work_id = link.id,
        person_id = link.person_id,
        work_id = link.work_id,
        "Person linked to work"
    );
    Ok((StatusCode::CREATED, Json(link)))
}

/// GET /api/v1/person-works/{id}
pub async fn get_person_work(
    mut db: UnitOfWork,
    Path(id): Path<DbId>,
) -> AppResult<Json<PersonWork>> {
    let link = db
        .person_works()
        .get(id)
        .await?
        .ok_or_else(|| not_found::<PersonWork>(id))?;
    Ok(Json(link))
}

/// PATCH /api/v1/person-works/{id}
pub async fn update_person_work(
    mut db: UnitOfWork,
    Path(id): Path<DbId>,
    Json(fields): Json<Fields>,
) -> AppResult<Json<PersonWork>> {
    let changes = parse_update::<PersonWork>(fields)?;
    validate(&changes)?;
    Ok(Json(db.update_person_work(id, changes).await?))
}

/// DELETE /api/v1/person-works/{id}
pub async fn delete_person_work(
    mut db: UnitOfWork,
    Path(id): Path<DbId>,
) -> AppResult<Json<PersonWork>> {
    let link = db
        .person_works()
        .delete(id)
        .await?
        .ok_or_else(|| not_found::<PersonWork>(id))?;
    tracing::info!(person_work_id = id, "Person-work link deleted");
    Ok(Json(link))
}

// ---------------------------------------------------------------------------
// Person <-> Organization
// ---------------------------------------------------------------------------

/// POST /api/v1/person-organizations
pub async fn create_person_organization(
    mut db: UnitOfWork,
    Json(fields): Json<Fields>,
) -> AppResult<(StatusCode, Json<PersonOrganization>)> {
    let input = parse_create::<PersonOrganization>(fields)?;
    validate(&input)?;
    let link = db.create_person_organization(&input).await?;
    tracing::info!(
        person_organization_id = link.id,
        person_id = link.person_id,
        organization_id = link.organization_id,
        "Person linked to organization"
    );
    Ok((StatusCode::CREATED, Json(link)))
}

/// GET /api/v1/person-organizations/{id}
pub async fn get_person_organization(
    mut db: UnitOfWork,
    Path(id): Path<DbId>,
) -> AppResult<Json<PersonOrganization>> {
    let link = db
        .person_organizations()
        .get(id)
        .await?
        .ok_or_else(|| not_found::<PersonOrganization>(id))?;
    Ok(Json(link))
}

/// PATCH /api/v1/person-organizations/{id}
pub async fn update_person_organization(
    mut db: UnitOfWork,
    Path(id): Path<DbId>,
    Json(fields): Json<Fields>,
) -> AppResult<Json<PersonOrganization>> {
    let changes = parse_update::<PersonOrganization>(fields)?;
    validate(&changes)?;
    Ok(Json(db.update_person_organization(id, changes).await?))
}

/// DELETE /api/v1/person-organizations/{id}
pub async fn delete_person_organization(
    mut db: UnitOfWork,
    Path(id): Path<DbId>,
) -> AppResult<Json<PersonOrganization>> {
    let link = db
        .person_organizations()
        .delete(id)
        .await?
        .ok_or_else(|| not_found::<PersonOrganization>(id))?;
    tracing::info!(person_organization_id = id, "Person-organization link deleted");
    Ok(Json(link))
}
