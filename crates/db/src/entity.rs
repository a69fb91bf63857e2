//! Definition-time description of a persisted table.
//!
//! Every model implements [`Entity`] once. The generic [`Repo`](crate::repo::Repo)
//! uses that description to build its SQL, so the five tables share one
//! create/get/update/delete implementation.

use roster_core::types::DbId;
use serde::de::DeserializeOwned;
use sqlx::query::QueryAs;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqliteRow};
use sqlx::FromRow;

/// A `query_as` targeting entity `E` with SQLite arguments.
pub type Bound<'q, E> = QueryAs<'q, Sqlite, E, SqliteArguments<'q>>;

pub trait Entity: for<'r> FromRow<'r, SqliteRow> + Send + Sync + Unpin + 'static {
    /// Human-readable name used in not-found and field errors.
    const NAME: &'static str;

    const TABLE: &'static str;

    /// Writable columns in bind order. The store-assigned `id` is never listed.
    const FIELDS: &'static [&'static str];

    /// Insert payload. Every required column is mandatory.
    type Create: DeserializeOwned + Send + Sync;

    /// Partial update payload. Every column is optional.
    type Update: DeserializeOwned + Default + Send;

    fn id(&self) -> DbId;

    /// Bind `input` to the placeholders of an insert, in [`Entity::FIELDS`] order.
    fn bind_create<'q>(query: Bound<'q, Self>, input: &'q Self::Create) -> Bound<'q, Self>;

    /// Bind the current values of `self`, in [`Entity::FIELDS`] order.
    fn bind_fields<'q>(&'q self, query: Bound<'q, Self>) -> Bound<'q, Self>;

    /// Overwrite every field present in `changes`, leaving the rest untouched.
    fn apply(&mut self, changes: Self::Update);
}

/// `id` followed by every writable column.
pub fn columns<E: Entity>() -> String {
    std::iter::once("id")
        .chain(E::FIELDS.iter().copied())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Same as [`columns`], read through table alias `alias` for use in joins.
pub fn qualified_columns<E: Entity>(alias: &str) -> String {
    std::iter::once("id")
        .chain(E::FIELDS.iter().copied())
        .map(|column| format!("{alias}.{column} AS {column}"))
        .collect::<Vec<_>>()
        .join(", ")
}
