//! Work entity model and DTOs.

use roster_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use crate::entity::{Bound, Entity};

/// A row from the `works` table. `genres` is stored as a JSON array.
///
/// `organization_id` is cleared when the owning organization is deleted.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Work {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub budget: i64,
    pub release_year: i32,
    #[sqlx(json)]
    pub genres: Vec<String>,
    pub organization_id: Option<DbId>,
}

/// DTO for creating a new work. The owning organization is required.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateWork {
    #[validate(length(max = 100))]
    pub title: String,
    pub description: String,
    pub budget: i64,
    pub release_year: i32,
    pub genres: Vec<String>,
    pub organization_id: DbId,
}

/// DTO for updating an existing work. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateWork {
    #[validate(length(max = 100))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub budget: Option<i64>,
    pub release_year: Option<i32>,
    pub genres: Option<Vec<String>>,
    pub organization_id: Option<DbId>,
}

impl Entity for Work {
    const NAME: &'static str = "Work";
    const TABLE: &'static str = "works";
    const FIELDS: &'static [&'static str] = &[
        "title",
        "description",
        "budget",
        "release_year",
        "genres",
        "organization_id",
    ];

    type Create = CreateWork;
    type Update = UpdateWork;

    fn id(&self) -> DbId {
        self.id
    }

    fn bind_create<'q>(query: Bound<'q, Self>, input: &'q CreateWork) -> Bound<'q, Self> {
        query
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.budget)
            .bind(input.release_year)
            .bind(Json(&input.genres))
            .bind(input.organization_id)
    }

    fn bind_fields<'q>(&'q self, query: Bound<'q, Self>) -> Bound<'q, Self> {
        query
            .bind(&self.title)
            .bind(&self.description)
            .bind(self.budget)
            .bind(self.release_year)
            .bind(Json(&self.genres))
            .bind(self.organization_id)
    }

    fn apply(&mut self, changes: UpdateWork) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(budget) = changes.budget {
            self.budget = budget;
        }
        if let Some(release_year) = changes.release_year {
            self.release_year = release_year;
        }
        if let Some(genres) = changes.genres {
            self.genres = genres;
        }
        if let Some(organization_id) = changes.organization_id {
            self.organization_id = Some(organization_id);
        }
    }
}
