use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

use crate::db::Database;
use crate::errors::{ApiException, ErrorKind, GENERIC, TRAFFIC_LOG_NOT_FOUND};
use crate::models::TrafficLog;

lazy_static::lazy_static! {
    static ref START_TIME: Instant = Instant::now();
}

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub traffic_logs: Database,
    pub instance_id: String,
}

/// Errors `get_traffic_log` can return, advertised in the OpenAPI document
pub const GET_TRAFFIC_LOG_ERRORS: &[ErrorKind] = &[GENERIC, TRAFFIC_LOG_NOT_FOUND];

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = serde_json::Value)
    )
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "traffic-logs-api",
        "version": env!("CARGO_PKG_VERSION"),
        "instance_id": state.instance_id,
        "uptime_seconds": START_TIME.elapsed().as_secs(),
    }))
}

/// Get a traffic log by identifier
#[utoipa::path(
    get,
    path = "/traffic-logs/{identifier}",
    tag = "traffic-logs",
    params(
        ("identifier" = String, Path, description = "Traffic log identifier")
    ),
    responses(
        (status = 200, description = "Traffic log found", body = TrafficLog)
    )
)]
pub async fn get_traffic_log(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> Result<Json<TrafficLog>, ApiException> {
    info!("Get traffic log request: identifier={}", identifier);

    match state.traffic_logs.get_traffic_log(&identifier).await {
        Ok(Some(log)) => Ok(Json(log)),
        Ok(None) => {
            info!("Traffic log not found: {}", identifier);
            Err(ApiException::traffic_log_not_found(identifier))
        }
        Err(e) => {
            error!("Get traffic log failed: {:#}", e);
            Err(ApiException::generic())
        }
    }
}
