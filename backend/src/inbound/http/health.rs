//! Health endpoint for orchestration probes and load balancers.

use actix_web::{HttpResponse, get};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health probe payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthBody {
    /// Always `healthy` while the process serves traffic.
    pub status: String,
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/healthz",
    responses((status = 200, description = "Server is healthy", body = HealthBody)),
    tags = ["health"],
    operation_id = "health",
    security(())
)]
#[get("/healthz")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthBody {
        status: "healthy".to_owned(),
    })
}
