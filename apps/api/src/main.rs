use log::info;
use restaurant_recommender_api::{app, config, error::Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> Result<()> {
    // Load configuration
    dotenv::dotenv().ok();

    // Setup logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // Default to info level if RUST_LOG is not set
                "restaurant_recommender_api=info,actix_web=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Loading configuration...");
    let config = config::Config::load()?;
    info!(
        "Serving recommendations from {} with k={} and seed score >= {}",
        config.data_path, config.neighbors, config.min_seed_score
    );

    // Create and run application
    let application = app::Application::new(&config);
    application.run().await
}
