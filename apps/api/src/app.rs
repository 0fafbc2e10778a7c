use crate::{
    config::Config,
    error::Result,
    models::{ErrorResponse, HealthResponse, RecommendationResponse, RestaurantSummary},
    routes,
    services::{JsonDatasetStore, RecommendationService},
};
use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{debug, info};
use std::net::TcpListener;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::recommendations::get_recommendations,
    ),
    components(schemas(
        RecommendationResponse,
        RestaurantSummary,
        HealthResponse,
        ErrorResponse
    )),
    tags(
        (name = "Recommendations", description = "Restaurant recommendations"),
        (name = "System", description = "Service health")
    )
)]
pub struct ApiDoc;

pub struct Application {
    port: u16,
    host: String,
    config: Config,
}

impl Application {
    /// Create a new application instance
    pub fn new(config: &Config) -> Self {
        Self {
            port: config.port,
            host: config.host.clone(),
            config: config.clone(),
        }
    }

    /// Build and run the server
    pub async fn run(&self) -> Result<()> {
        let bind_address = format!("{}:{}", self.host, self.port);
        let listener = TcpListener::bind(&bind_address)?;
        info!("Starting server at http://{}", bind_address);

        self.run_with_listener(listener).await
    }

    /// Run the server with a specific TCP listener
    /// This is useful for testing where we want to use a random port
    pub async fn run_with_listener(&self, listener: TcpListener) -> Result<()> {
        let recommendation_service = web::Data::new(RecommendationService::new(
            self.config.neighbors,
            self.config.min_seed_score,
        ));
        let dataset_store = web::Data::new(JsonDatasetStore::new(&self.config.data_path));
        debug!(
            "Recommendation service ready: dataset={}, k={}",
            dataset_store.path().display(),
            recommendation_service.neighbors()
        );

        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header();

            App::new()
                .wrap(cors)
                .wrap(Logger::default())
                .app_data(recommendation_service.clone())
                .app_data(dataset_store.clone())
                .configure(routes::configure)
        })
        .listen(listener)?
        .run()
        .await?;

        Ok(())
    }
}
