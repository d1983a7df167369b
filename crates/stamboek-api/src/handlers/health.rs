//! Health check handler.

use axum::Json;
use axum::extract::State;

use stamboek_database::connection;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /health — liveness plus a database round-trip.
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<HealthResponse>>, ApiError> {
    let database = connection::health_check(&state.db_pool).await.unwrap_or(false);

    Ok(Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        database,
    })))
}
