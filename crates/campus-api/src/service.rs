use axum::Json;

use campus_types::api::{HealthResponse, RootInfo};

use crate::state::timestamp;

/// GET /
pub async fn root() -> Json<RootInfo> {
    Json(RootInfo {
        message: "X Campus API is running!".into(),
        docs: "/docs".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".into(),
        timestamp: timestamp(),
    })
}
