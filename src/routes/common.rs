//! Operational routes: health, readiness, version, and the OpenAPI document.

use crate::migration::missing_tables;
use crate::openapi::ApiDoc;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use utoipa::OpenApi;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

/// Readiness of the database behind the menu endpoints.
#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    database: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    missing_tables: Vec<&'static str>,
}

impl ReadyBody {
    fn degraded(database: &'static str, missing_tables: Vec<&'static str>) -> (StatusCode, Json<Self>) {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyBody {
                status: "degraded",
                database,
                missing_tables,
            }),
        )
    }
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

/// Ready once the database answers and every table the menu endpoints use exists.
async fn ready(State(state): State<AppState>) -> Result<Json<ReadyBody>, (StatusCode, Json<ReadyBody>)> {
    let missing = match missing_tables(&state.pool).await {
        Ok(missing) => missing,
        Err(e) => {
            tracing::warn!(error = %e, "database unreachable");
            return Err(ReadyBody::degraded("unavailable", Vec::new()));
        }
    };
    if !missing.is_empty() {
        tracing::warn!(?missing, "schema incomplete");
        return Err(ReadyBody::degraded("schema incomplete", missing));
    }
    Ok(Json(ReadyBody {
        status: "ok",
        database: "ok",
        missing_tables: Vec::new(),
    }))
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /health, /ready, /version, /api-docs/openapi.json.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .route("/api-docs/openapi.json", get(openapi))
        .with_state(state)
}
