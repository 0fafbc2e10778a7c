use crate::error::{ApiError, Result};
use serde::Deserialize;

const ENV_PREFIX: &str = "RECOMMENDER";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Path of the JSON document holding users, restaurants and ratings.
    pub data_path: String,
    /// Neighbours requested from the index for every seed restaurant.
    pub neighbors: usize,
    /// Minimum score for a rating to turn its restaurant into a seed.
    pub min_seed_score: f64,
}

impl Config {
    /// Load configuration from defaults, then `RECOMMENDER_*` environment variables
    pub fn load() -> Result<Self> {
        let settings = Self::builder()?
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        Ok(config::Config::builder()
            .set_default("host", "127.0.0.1")?
            .set_default("port", 5000)?
            .set_default("data_path", "data.json")?
            .set_default("neighbors", 5)?
            .set_default("min_seed_score", 3.0)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.neighbors == 0 {
            return Err(ApiError::ConfigError(
                "neighbors must be at least 1".to_string(),
            ));
        }
        if !self.min_seed_score.is_finite() {
            return Err(ApiError::ConfigError(
                "min_seed_score must be a finite number".to_string(),
            ));
        }
        Ok(())
    }
}
