//! Handlers for the `/organizations` resource.
//!
//! Reads and writes answer with the organization's works embedded.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use roster_core::error::CoreError;
use roster_core::types::DbId;
use roster_core::validation::validate;
use roster_db::entity::Entity;
use roster_db::fields::{parse_create, parse_update, Fields};
use roster_db::models::organization::{Organization, OrganizationWithWorks};
use roster_db::models::work::Work;

use crate::error::{AppError, AppResult};
use crate::extract::UnitOfWork;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::not_found(Organization::NAME, id))
}

async fn with_works(
    db: &mut UnitOfWork,
    organization: Organization,
) -> AppResult<OrganizationWithWorks> {
    let works = db.works_of_organization(organization.id).await?;
    Ok(OrganizationWithWorks {
        organization,
        works,
    })
}

/// POST /api/v1/organizations
pub async fn create(
    mut db: UnitOfWork,
    Json(fields): Json<Fields>,
) -> AppResult<(StatusCode, Json<OrganizationWithWorks>)> {
    let input = parse_create::<Organization>(fields)?;
    validate(&input)?;
    let organization = db.organizations().create(&input).await?;
    tracing::info!(organization_id = organization.id, "Organization created");
    Ok((
        StatusCode::CREATED,
        Json(OrganizationWithWorks {
            organization,
            works: Vec::new(),
        }),
    ))
}

/// GET /api/v1/organizations/{id}
pub async fn get_by_id(
    mut db: UnitOfWork,
    Path(id): Path<DbId>,
) -> AppResult<Json<OrganizationWithWorks>> {
    let organization = db
        .organizations()
        .get(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(with_works(&mut db, organization).await?))
}

/// PUT /api/v1/organizations/{id}
pub async fn update(
    mut db: UnitOfWork,
    Path(id): Path<DbId>,
    Json(fields): Json<Fields>,
) -> AppResult<Json<OrganizationWithWorks>> {
    let changes = parse_update::<Organization>(fields)?;
    validate(&changes)?;
    let existing = db
        .organizations()
        .get(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let organization = db
        .organizations()
        .update(existing, changes)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(with_works(&mut db, organization).await?))
}

/// DELETE /api/v1/organizations/{id}
///
/// Works it owned remain, with `organization_id` cleared.
pub async fn delete(mut db: UnitOfWork, Path(id): Path<DbId>) -> AppResult<Json<Organization>> {
    let organization = db
        .organizations()
        .delete(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(organization_id = id, "Organization deleted");
    Ok(Json(organization))
}

/// GET /api/v1/organizations/{id}/works
pub async fn list_works(mut db: UnitOfWork, Path(id): Path<DbId>) -> AppResult<Json<Vec<Work>>> {
    db.organizations()
        .get(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(db.works_of_organization(id).await?))
}
