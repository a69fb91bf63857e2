//! Role-carrying association records between people and works/organizations.
//!
//! Several rows may link the same pair; each row is one role.

use roster_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::entity::{Bound, Entity};
use crate::fields::nullable;

// ---------------------------------------------------------------------------
// Person <-> Work
// ---------------------------------------------------------------------------

/// A row from the `person_works` table. The store allows a missing role.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PersonWork {
    pub id: DbId,
    pub person_id: DbId,
    pub work_id: DbId,
    pub role: Option<String>,
}

/// DTO for linking a person to a work.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreatePersonWork {
    pub person_id: DbId,
    pub work_id: DbId,
    #[validate(length(max = 10))]
    pub role: String,
}

/// DTO for updating a person-work link. All fields are optional.
///
/// `role` uses `Option<Option<String>>`: an explicit `null` clears it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePersonWork {
    pub person_id: Option<DbId>,
    pub work_id: Option<DbId>,
    #[serde(default, deserialize_with = "nullable")]
    #[validate(length(max = 10))]
    pub role: Option<Option<String>>,
}

impl Entity for PersonWork {
    const NAME: &'static str = "PersonWork";
    const TABLE: &'static str = "person_works";
    const FIELDS: &'static [&'static str] = &["person_id", "work_id", "role"];

    type Create = CreatePersonWork;
    type Update = UpdatePersonWork;

    fn id(&self) -> DbId {
        self.id
    }

    fn bind_create<'q>(query: Bound<'q, Self>, input: &'q CreatePersonWork) -> Bound<'q, Self> {
        query
            .bind(input.person_id)
            .bind(input.work_id)
            .bind(&input.role)
    }

    fn bind_fields<'q>(&'q self, query: Bound<'q, Self>) -> Bound<'q, Self> {
        query
            .bind(self.person_id)
            .bind(self.work_id)
            .bind(&self.role)
    }

    fn apply(&mut self, changes: UpdatePersonWork) {
        if let Some(person_id) = changes.person_id {
            self.person_id = person_id;
        }
        if let Some(work_id) = changes.work_id {
            self.work_id = work_id;
        }
        if let Some(role) = changes.role {
            self.role = role;
        }
    }
}

// ---------------------------------------------------------------------------
// Person <-> Organization
// ---------------------------------------------------------------------------

/// A row from the `person_organizations` table. The role is mandatory.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PersonOrganization {
    pub id: DbId,
    pub person_id: DbId,
    pub organization_id: DbId,
    pub role: String,
}

/// DTO for linking a person to an organization.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreatePersonOrganization {
    pub person_id: DbId,
    pub organization_id: DbId,
    #[validate(length(max = 10))]
    pub role: String,
}

/// DTO for updating a person-organization link. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePersonOrganization {
    pub person_id: Option<DbId>,
    pub organization_id: Option<DbId>,
    #[validate(length(max = 10))]
    pub role: Option<String>,
}

impl Entity for PersonOrganization {
    const NAME: &'static str = "PersonOrganization";
    const TABLE: &'static str = "person_organizations";
    const FIELDS: &'static [&'static str] = &["person_id", "organization_id", "role"];

    type Create = CreatePersonOrganization;
    type Update = UpdatePersonOrganization;

    fn id(&self) -> DbId {
        self.id
    }

    fn bind_create<'q>(
        query: Bound<'q, Self>,
        input: &'q CreatePersonOrganization,
    ) -> Bound<'q, Self> {
        query
            .bind(input.person_id)
            .bind(input.organization_id)
            .bind(&input.role)
    }

    fn bind_fields<'q>(&'q self, query: Bound<'q, Self>) -> Bound<'q, Self> {
        query
            .bind(self.person_id)
            .bind(self.organization_id)
            .bind(&self.role)
    }

    fn apply(&mut self, changes: UpdatePersonOrganization) {
        if let Some(person_id) = changes.person_id {
            self.person_id = person_id;
        }
        if let Some(organization_id) = changes.organization_id {
            self.organization_id = organization_id;
        }
        if let Some(role) = changes.role {
            self.role = role;
        }
    }
}
