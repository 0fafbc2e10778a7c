use crate::{
    error::{ApiError, Result},
    models::{Dataset, Restaurant},
    services::aggregator::{recommend_with_threshold, DEFAULT_MIN_SEED_SCORE, DEFAULT_NEIGHBORS},
};
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Recommendations for one user, ready to be shaped for a response
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationResult {
    pub user_display_name: String,
    /// Ordered by restaurant identifier
    pub restaurants: Vec<Restaurant>,
}

impl RecommendationResult {
    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}

/// Stateless façade over the recommendation pipeline.
///
/// Holds only tuning parameters. The dataset is passed in per request and
/// every call encodes and indexes it from scratch.
#[derive(Debug, Clone)]
pub struct RecommendationService {
    neighbors: usize,
    min_seed_score: f64,
}

impl Default for RecommendationService {
    fn default() -> Self {
        Self::new(DEFAULT_NEIGHBORS, DEFAULT_MIN_SEED_SCORE)
    }
}

impl RecommendationService {
    pub fn new(neighbors: usize, min_seed_score: f64) -> Self {
        Self {
            neighbors,
            min_seed_score,
        }
    }

    pub fn neighbors(&self) -> usize {
        self.neighbors
    }

    pub fn get_recommendations(&self, user_id: i64, dataset: &Dataset) -> Result<RecommendationResult> {
        let user = dataset
            .find_user(user_id)
            .ok_or(ApiError::UserNotFound(user_id))?;
        debug!(user_id, name = %user.name, "Resolved user");

        let ids: BTreeSet<i64> = recommend_with_threshold(
            user_id,
            &dataset.ratings,
            &dataset.restaurants,
            self.neighbors,
            self.min_seed_score,
        )?;

        let mut restaurants: Vec<Restaurant> = dataset
            .restaurants
            .iter()
            .filter(|r| ids.contains(&r.id))
            .cloned()
            .collect();
        restaurants.sort_by_key(|r| r.id);

        info!(
            user_id,
            total = restaurants.len(),
            "Returning restaurant recommendations"
        );

        Ok(RecommendationResult {
            user_display_name: user.name.clone(),
            restaurants,
        })
    }
}
