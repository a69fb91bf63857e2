//! Organization entity model and DTOs.

use roster_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::entity::{Bound, Entity};
use crate::models::work::Work;

/// A row from the `organizations` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Organization {
    pub id: DbId,
    pub name: String,
    pub contact_email_address: String,
    pub phone_number: String,
}

/// An organization together with the works it owns.
#[derive(Debug, Clone, Serialize)]
pub struct OrganizationWithWorks {
    #[serde(flatten)]
    pub organization: Organization,
    pub works: Vec<Work>,
}

/// DTO for creating a new organization.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateOrganization {
    #[validate(length(max = 100))]
    pub name: String,
    #[validate(length(max = 50))]
    pub contact_email_address: String,
    #[validate(length(max = 15))]
    pub phone_number: String,
}

/// DTO for updating an existing organization. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateOrganization {
    #[validate(length(max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 50))]
    pub contact_email_address: Option<String>,
    #[validate(length(max = 15))]
    pub phone_number: Option<String>,
}

impl Entity for Organization {
    const NAME: &'static str = "Organization";
    const TABLE: &'static str = "organizations";
    const FIELDS: &'static [&'static str] = &["name", "contact_email_address", "phone_number"];

    type Create = CreateOrganization;
    type Update = UpdateOrganization;

    fn id(&self) -> DbId {
        self.id
    }

    fn bind_create<'q>(query: Bound<'q, Self>, input: &'q CreateOrganization) -> Bound<'q, Self> {
        query
            .bind(&input.name)
            .bind(&input.contact_email_address)
            .bind(&input.phone_number)
    }

    fn bind_fields<'q>(&'q self, query: Bound<'q, Self>) -> Bound<'q, Self> {
        query
            .bind(&self.name)
            .bind(&self.contact_email_address)
            .bind(&self.phone_number)
    }

    fn apply(&mut self, changes: UpdateOrganization) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(contact_email_address) = changes.contact_email_address {
            self.contact_email_address = contact_email_address;
        }
        if let Some(phone_number) = changes.phone_number {
            self.phone_number = phone_number;
        }
    }
}
