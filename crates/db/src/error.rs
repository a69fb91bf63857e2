use roster_core::error::CoreError;

/// Failure of a coordinated data-access call.
///
/// Domain outcomes (a missing referenced entity, a bad payload) stay
/// distinguishable from store faults, which pass through untouched.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] sqlx::Error),
}
