use anyhow::{bail, Context, Result};
use console::style;
use log::{error, info};
use restaurant_recommender_api::{
    config::Config,
    models::{RestaurantSummary, NO_RECOMMENDATIONS_MESSAGE},
    services::{JsonDatasetStore, RecommendationService},
};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

async fn print_recommendations(user_id: i64) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    let dataset = JsonDatasetStore::new(&config.data_path)
        .load()
        .await
        .with_context(|| format!("Failed to load dataset from {}", config.data_path))?;

    let service = RecommendationService::new(config.neighbors, config.min_seed_score);
    let result = service.get_recommendations(user_id, &dataset)?;

    println!(
        "\n{}",
        style(format!(
            "--- RESTAURANT RECOMMENDATIONS FOR USER {} ---",
            result.user_display_name.to_uppercase()
        ))
        .bold()
        .cyan()
    );

    if result.is_empty() {
        println!("{}", NO_RECOMMENDATIONS_MESSAGE);
        return Ok(());
    }

    for restaurant in &result.restaurants {
        let summary = RestaurantSummary::from(restaurant);
        println!(
            "Name: {} | Category: {} | Average price: R${:.2}",
            style(&summary.name).bold(),
            summary.category,
            summary.average_price
        );
    }

    Ok(())
}

fn parse_user_id() -> Result<i64> {
    let Some(raw) = env::args().nth(1) else {
        bail!("Usage: recommend <user_id>");
    };
    raw.trim()
        .parse()
        .with_context(|| format!("Invalid user ID: {}", raw))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recommend=warn,restaurant_recommender_api=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true),
        )
        .init();

    dotenv::dotenv().ok();

    let user_id = parse_user_id()?;
    info!("Computing recommendations for user {}", user_id);

    if let Err(e) = print_recommendations(user_id).await {
        error!("Recommendation failed: {}", e);
        eprintln!("{} {:#}", style("error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
