//! Request-scoped data access extractor.

use std::ops::{Deref, DerefMut};

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use roster_db::Repositories;

use crate::error::AppError;
use crate::state::AppState;

/// One unit of work against the store, bound to the lifetime of a request.
///
/// Checks a connection out of the pool when the handler runs and returns it
/// when the handler finishes. Derefs to [`Repositories`]:
///
/// ```ignore
/// async fn my_handler(mut db: UnitOfWork, Path(id): Path<DbId>) -> AppResult<Json<Person>> {
///     let person = db.people().get(id).await?;
///     // ...
/// }
/// ```
pub struct UnitOfWork(pub Repositories);

impl FromRequestParts<AppState> for UnitOfWork {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(UnitOfWork(Repositories::acquire(&state.pool).await?))
    }
}

impl Deref for UnitOfWork {
    type Target = Repositories;

    fn deref(&self) -> &Repositories {
        &self.0
    }
}

impl DerefMut for UnitOfWork {
    fn deref_mut(&mut self) -> &mut Repositories {
        &mut self.0
    }
}
