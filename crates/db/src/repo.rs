//! Generic create/get/update/delete over one entity table.

use std::marker::PhantomData;

use roster_core::types::DbId;
use sqlx::SqliteConnection;

use crate::entity::{columns, Entity};

/// Data access for the table of `E`, borrowing one connection.
///
/// Every call is its own statement and commits immediately. Lookups by a
/// missing id yield `None`, never an error.
pub struct Repo<'c, E> {
    conn: &'c mut SqliteConnection,
    entity: PhantomData<fn() -> E>,
}

impl<'c, E: Entity> Repo<'c, E> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self {
            conn,
            entity: PhantomData,
        }
    }

    /// Insert a new row, returning it with its store-assigned id.
    pub async fn create(&mut self, input: &E::Create) -> Result<E, sqlx::Error> {
        let placeholders = vec!["?"; E::FIELDS.len()].join(", ");
        let query = format!(
            "INSERT INTO {} ({}) VALUES ({placeholders}) RETURNING {}",
            E::TABLE,
            E::FIELDS.join(", "),
            columns::<E>(),
        );
        E::bind_create(sqlx::query_as::<_, E>(&query), input)
            .fetch_one(&mut *self.conn)
            .await
    }

    /// Find a row by primary key.
    pub async fn get(&mut self, id: DbId) -> Result<Option<E>, sqlx::Error> {
        let query = format!("SELECT {} FROM {} WHERE id = ?", columns::<E>(), E::TABLE);
        sqlx::query_as::<_, E>(&query)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await
    }

    /// Merge `changes` into `existing` and write the whole row back.
    ///
    /// Returns the row as stored after the write, or `None` if it was deleted
    /// in the meantime.
    pub async fn update(
        &mut self,
        mut existing: E,
        changes: E::Update,
    ) -> Result<Option<E>, sqlx::Error> {
        existing.apply(changes);
        let assignments = E::FIELDS
            .iter()
            .map(|field| format!("{field} = ?"))
            .collect::<Vec<_>>()
            .join(", ");
        let query = format!(
            "UPDATE {} SET {assignments} WHERE id = ? RETURNING {}",
            E::TABLE,
            columns::<E>(),
        );
        let id = existing.id();
        existing
            .bind_fields(sqlx::query_as::<_, E>(&query))
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await
    }

    /// Permanently remove a row, returning its last values.
    pub async fn delete(&mut self, id: DbId) -> Result<Option<E>, sqlx::Error> {
        let query = format!(
            "DELETE FROM {} WHERE id = ? RETURNING {}",
            E::TABLE,
            columns::<E>(),
        );
        sqlx::query_as::<_, E>(&query)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await
    }
}
