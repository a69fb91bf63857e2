//! Handlers for the `/works` resource.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use roster_core::error::CoreError;
use roster_core::types::DbId;
use roster_core::validation::validate;
use roster_db::entity::Entity;
use roster_db::fields::{parse_create, parse_update, Fields};
use roster_db::models::work::Work;

use crate::error::{AppError, AppResult};
use crate::extract::UnitOfWork;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::not_found(Work::NAME, id))
}

/// POST /api/v1/works
pub async fn create(
    mut db: UnitOfWork,
    Json(fields): Json<Fields>,
) -> AppResult<(StatusCode, Json<Work>)> {
    let input = parse_create::<Work>(fields)?;
    validate(&input)?;
    let work = db.works().create(&input).await?;
    tracing::info!(
        work_id = work.id,
        organization_id = ?work.organization_id,
        "Work created"
    );
    Ok((StatusCode::CREATED, Json(work)))
}

/// GET /api/v1/works/{id}
pub async fn get_by_id(mut db: UnitOfWork, Path(id): Path<DbId>) -> AppResult<Json<Work>> {
    let work = db.works().get(id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(work))
}

/// PUT /api/v1/works/{id}
pub async fn update(
    mut db: UnitOfWork,
    Path(id): Path<DbId>,
    Json(fields): Json<Fields>,
) -> AppResult<Json<Work>> {
    let changes = parse_update::<Work>(fields)?;
    validate(&changes)?;
    let existing = db.works().get(id).await?.ok_or_else(|| not_found(id))?;
    let work = db
        .works()
        .update(existing, changes)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(work))
}

/// DELETE /api/v1/works/{id}
pub async fn delete(mut db: UnitOfWork, Path(id): Path<DbId>) -> AppResult<Json<Work>> {
    let work = db.works().delete(id).await?.ok_or_else(|| not_found(id))?;
    tracing::info!(work_id = id, "Work deleted");
    Ok(Json(work))
}
