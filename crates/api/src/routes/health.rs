//! Liveness probe, mounted at the root rather than under `/api/v1`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `"ok"` when the store answered, `"degraded"` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    /// Latest applied migration; `null` when the store is unreachable or
    /// has not been migrated.
    pub schema_version: Option<i64>,
}

async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let (code, status, schema_version) = match roster_db::schema_version(&state.pool).await {
        Ok(version) => (StatusCode::OK, "ok", version),
        Err(e) => {
            tracing::warn!(error = %e, "Store unreachable during health check");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", None)
        }
    };

    let report = HealthReport {
        status,
        version: env!("CARGO_PKG_VERSION"),
        schema_version,
    };
    (code, Json(report))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
