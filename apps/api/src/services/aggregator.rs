//! Liked-restaurant similarity aggregation.
//!
//! Every restaurant the user rated at or above the seed threshold is used as a
//! query into a [`FlatIndex`] built over all restaurants. Neighbours from all
//! seeds are unioned, then anything the user has rated at all is removed.

use crate::{
    error::Result,
    ml::{encode, FlatIndex},
    models::{Rating, Restaurant},
};
use std::collections::{BTreeSet, HashMap, HashSet};
use tracing::{debug, info};

pub const DEFAULT_NEIGHBORS: usize = 5;
pub const DEFAULT_MIN_SEED_SCORE: f64 = 3.0;

/// Restaurants the user has touched, split by purpose.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UserHistory {
    /// Every restaurant rated by the user, whatever the score
    pub visited: HashSet<i64>,
    /// Restaurants rated at or above the threshold, in rating order
    pub seeds: Vec<i64>,
}

impl UserHistory {
    pub fn from_ratings(user_id: i64, ratings: &[Rating], min_seed_score: f64) -> Self {
        let mut history = Self::default();
        for rating in ratings.iter().filter(|r| r.user_id == user_id) {
            history.visited.insert(rating.restaurant_id);
            if rating.score >= min_seed_score {
                history.seeds.push(rating.restaurant_id);
            }
        }
        history
    }
}

pub fn recommend(
    user_id: i64,
    ratings: &[Rating],
    restaurants: &[Restaurant],
    k: usize,
) -> Result<BTreeSet<i64>> {
    recommend_with_threshold(user_id, ratings, restaurants, k, DEFAULT_MIN_SEED_SCORE)
}

/// Identifiers of unvisited restaurants near any of the user's seeds.
pub fn recommend_with_threshold(
    user_id: i64,
    ratings: &[Rating],
    restaurants: &[Restaurant],
    k: usize,
    min_seed_score: f64,
) -> Result<BTreeSet<i64>> {
    let history = UserHistory::from_ratings(user_id, ratings, min_seed_score);
    debug!(
        user_id,
        seeds = history.seeds.len(),
        visited = history.visited.len(),
        "Collected user rating history"
    );

    let encoding = encode(restaurants)?;
    let index = FlatIndex::build(encoding.vectors.view());

    // First occurrence wins when raw data repeats an identifier.
    let mut positions: HashMap<i64, usize> = HashMap::with_capacity(restaurants.len());
    for (position, restaurant) in restaurants.iter().enumerate() {
        positions.entry(restaurant.id).or_insert(position);
    }

    let mut candidates = BTreeSet::new();
    for seed in &history.seeds {
        let Some(&position) = positions.get(seed) else {
            debug!(user_id, seed, "Seed restaurant not in restaurant set, skipping");
            continue;
        };

        let query = encoding.vectors.row(position);
        for neighbor in index.search(query, k)? {
            candidates.insert(restaurants[neighbor.position].id);
        }
    }

    let recommended: BTreeSet<i64> = candidates
        .into_iter()
        .filter(|id| !history.visited.contains(id))
        .collect();

    info!(
        user_id,
        recommended = recommended.len(),
        "Computed restaurant recommendations"
    );

    Ok(recommended)
}
