//! Person entity model and DTOs.

use roster_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::entity::{Bound, Entity};

/// A row from the `people` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Person {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub minimum_fee: i64,
}

/// DTO for creating a new person.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreatePerson {
    #[validate(length(max = 50))]
    pub first_name: String,
    #[validate(length(max = 50))]
    pub last_name: String,
    #[validate(length(max = 50))]
    pub email: String,
    pub minimum_fee: i64,
}

/// DTO for updating an existing person. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePerson {
    #[validate(length(max = 50))]
    pub first_name: Option<String>,
    #[validate(length(max = 50))]
    pub last_name: Option<String>,
    #[validate(length(max = 50))]
    pub email: Option<String>,
    pub minimum_fee: Option<i64>,
}

impl Entity for Person {
    const NAME: &'static str = "Person";
    const TABLE: &'static str = "people";
    const FIELDS: &'static [&'static str] = &["first_name", "last_name", "email", "minimum_fee"];

    type Create = CreatePerson;
    type Update = UpdatePerson;

    fn id(&self) -> DbId {
        self.id
    }

    fn bind_create<'q>(query: Bound<'q, Self>, input: &'q CreatePerson) -> Bound<'q, Self> {
        query
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(input.minimum_fee)
    }

    fn bind_fields<'q>(&'q self, query: Bound<'q, Self>) -> Bound<'q, Self> {
        query
            .bind(&self.first_name)
            .bind(&self.last_name)
            .bind(&self.email)
            .bind(self.minimum_fee)
    }

    fn apply(&mut self, changes: UpdatePerson) {
        if let Some(first_name) = changes.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = changes.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(minimum_fee) = changes.minimum_fee {
            self.minimum_fee = minimum_fee;
        }
    }
}
