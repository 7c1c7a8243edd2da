//! `GET /health`: liveness plus a read against the product store.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use catalog_db::repositories::ProductRepo;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` when the store answered, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Number of products not soft-deleted; `null` when the store is unreachable.
    pub active_products: Option<i64>,
}

/// Always answers 200 so load balancers can tell a live process from a dead
/// one; store trouble shows up in the body.
async fn report(State(state): State<AppState>) -> Json<HealthReport> {
    let active_products = match ProductRepo::count_active(&state.pool).await {
        Ok(count) => Some(count),
        Err(e) => {
            tracing::warn!(error = %e, "Product store unavailable for health report");
            None
        }
    };
    let db_healthy = active_products.is_some();

    Json(HealthReport {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        active_products,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}
