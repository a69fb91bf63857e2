//! Per-request access coordinator.
//!
//! [`Repositories`] owns one pooled connection for the lifetime of a unit of
//! work and hands out a [`Repo`] per entity type over it. Association writes
//! go through it so both referenced entities are confirmed to exist before
//! anything is written.

use roster_core::error::CoreError;
use roster_core::types::DbId;
use sqlx::pool::PoolConnection;
use sqlx::Sqlite;

use crate::entity::{qualified_columns, Entity};
use crate::error::DataError;
use crate::models::association::{
    CreatePersonOrganization, CreatePersonWork, PersonOrganization, PersonWork,
    UpdatePersonOrganization, UpdatePersonWork,
};
use crate::models::organization::Organization;
use crate::models::person::Person;
use crate::models::work::Work;
use crate::repo::Repo;
use crate::DbPool;

pub struct Repositories {
    conn: PoolConnection<Sqlite>,
}

impl Repositories {
    /// Start a unit of work by checking a connection out of the pool.
    pub async fn acquire(pool: &DbPool) -> Result<Self, sqlx::Error> {
        Ok(Self {
            conn: pool.acquire().await?,
        })
    }

    pub fn people(&mut self) -> Repo<'_, Person> {
        Repo::new(&mut self.conn)
    }

    pub fn works(&mut self) -> Repo<'_, Work> {
        Repo::new(&mut self.conn)
    }

    pub fn organizations(&mut self) -> Repo<'_, Organization> {
        Repo::new(&mut self.conn)
    }

    pub fn person_works(&mut self) -> Repo<'_, PersonWork> {
        Repo::new(&mut self.conn)
    }

    pub fn person_organizations(&mut self) -> Repo<'_, PersonOrganization> {
        Repo::new(&mut self.conn)
    }

    // -----------------------------------------------------------------------
    // Associations
    // -----------------------------------------------------------------------

    /// Link a person to a work after confirming both exist.
    pub async fn create_person_work(
        &mut self,
        input: &CreatePersonWork,
    ) -> Result<PersonWork, DataError> {
        self.require::<Person>(input.person_id).await?;
        self.require::<Work>(input.work_id).await?;
        Ok(self.person_works().create(input).await?)
    }

    /// Update a person-work link. The person and work it points at after the
    /// merge must both exist.
    pub async fn update_person_work(
        &mut self,
        id: DbId,
        changes: UpdatePersonWork,
    ) -> Result<PersonWork, DataError> {
        let existing = self.require::<PersonWork>(id).await?;
        self.require::<Person>(changes.person_id.unwrap_or(existing.person_id))
            .await?;
        self.require::<Work>(changes.work_id.unwrap_or(existing.work_id))
            .await?;
        self.person_works()
            .update(existing, changes)
            .await?
            .ok_or_else(|| CoreError::not_found(PersonWork::NAME, id).into())
    }

    /// Link a person to an organization after confirming both exist.
    pub async fn create_person_organization(
        &mut self,
        input: &CreatePersonOrganization,
    ) -> Result<PersonOrganization, DataError> {
        self.require::<Person>(input.person_id).await?;
        self.require::<Organization>(input.organization_id).await?;
        Ok(self.person_organizations().create(input).await?)
    }

    /// Update a person-organization link. The person and organization it
    /// points at after the merge must both exist.
    pub async fn update_person_organization(
        &mut self,
        id: DbId,
        changes: UpdatePersonOrganization,
    ) -> Result<PersonOrganization, DataError> {
        let existing = self.require::<PersonOrganization>(id).await?;
        self.require::<Person>(changes.person_id.unwrap_or(existing.person_id))
            .await?;
        self.require::<Organization>(
            changes.organization_id.unwrap_or(existing.organization_id),
        )
        .await?;
        self.person_organizations()
            .update(existing, changes)
            .await?
            .ok_or_else(|| CoreError::not_found(PersonOrganization::NAME, id).into())
    }

    /// Fetch `E` by id or fail with a not-found naming the entity.
    async fn require<E: Entity>(&mut self, id: DbId) -> Result<E, DataError> {
        match Repo::<E>::new(&mut self.conn).get(id).await? {
            Some(row) => Ok(row),
            None => {
                tracing::debug!(entity = E::NAME, id, "Referenced entity does not exist");
                Err(CoreError::not_found(E::NAME, id).into())
            }
        }
    }

    // -----------------------------------------------------------------------
    // Relationship navigation
    // -----------------------------------------------------------------------

    /// Works owned by an organization, oldest first.
    pub async fn works_of_organization(
        &mut self,
        organization_id: DbId,
    ) -> Result<Vec<Work>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM works w WHERE w.organization_id = ? ORDER BY w.id",
            qualified_columns::<Work>("w"),
        );
        sqlx::query_as::<_, Work>(&query)
            .bind(organization_id)
            .fetch_all(&mut *self.conn)
            .await
    }

    /// Works a person holds at least one role on.
    pub async fn works_of_person(&mut self, person_id: DbId) -> Result<Vec<Work>, sqlx::Error> {
        let query = format!(
            "SELECT DISTINCT {} FROM works w
             JOIN person_works pw ON pw.work_id = w.id
             WHERE pw.person_id = ?
             ORDER BY w.id",
            qualified_columns::<Work>("w"),
        );
        sqlx::query_as::<_, Work>(&query)
            .bind(person_id)
            .fetch_all(&mut *self.conn)
            .await
    }

    /// Organizations a person holds at least one role in.
    pub async fn organizations_of_person(
        &mut self,
        person_id: DbId,
    ) -> Result<Vec<Organization>, sqlx::Error> {
        let query = format!(
            "SELECT DISTINCT {} FROM organizations o
             JOIN person_organizations po ON po.organization_id = o.id
             WHERE po.person_id = ?
             ORDER BY o.id",
            qualified_columns::<Organization>("o"),
        );
        sqlx::query_as::<_, Organization>(&query)
            .bind(person_id)
            .fetch_all(&mut *self.conn)
            .await
    }
}
