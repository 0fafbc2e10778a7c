use actix_web::{web, HttpResponse, Scope};
use utoipa::OpenApi;

use crate::app::ApiDoc;
use crate::error::ApiError;
use crate::handlers::{health_check, legacy_config, ping, recommendations_config};

/// Register every route of the service
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(path_config())
        .service(ping)
        .configure(legacy_config)
        .service(api_routes())
        .service(openapi_route());
}

/// Reject malformed path segments as JSON `InvalidInput` errors
fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| ApiError::InvalidInput(err.to_string()).into())
}

/// Configure all routes under `/api`
pub fn api_routes() -> Scope {
    web::scope("/api")
        .service(health_check)
        .configure(recommendations_config)
}

/// Configure OpenAPI documentation JSON endpoint
pub fn openapi_route() -> actix_web::Resource {
    web::resource("/api-docs/openapi.json").route(web::get().to(|| async {
        HttpResponse::Ok()
            .append_header(("Content-Type", "application/json"))
            .json(ApiDoc::openapi())
    }))
}
