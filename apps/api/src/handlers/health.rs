use crate::models::HealthResponse;
use actix_web::{get, HttpResponse};

/// Plain-text liveness probe
#[get("/")]
pub async fn ping() -> HttpResponse {
    HttpResponse::Ok().body("It works")
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "System",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
