use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use dataset::{Dataset, Rating, Restaurant, User};

mod dataset;

/// Message returned when a user has nothing new to try
pub const NO_RECOMMENDATIONS_MESSAGE: &str = "No new recommendations found.";

/// A recommended restaurant as exposed by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantSummary {
    #[schema(example = "Cantina da Nona")]
    pub name: String,
    #[schema(example = "italian")]
    pub category: String,
    /// Average price rounded to two decimal places
    #[schema(example = 52.9)]
    pub average_price: f64,
}

impl From<&Restaurant> for RestaurantSummary {
    fn from(restaurant: &Restaurant) -> Self {
        Self {
            name: restaurant.name.clone(),
            category: restaurant.category.clone(),
            average_price: round_price(restaurant.average_price),
        }
    }
}

/// Response structure for restaurant recommendations
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecommendationResponse {
    /// Display name of the user, upper-cased
    #[schema(example = "ANA")]
    pub user: String,
    pub total_restaurants: usize,
    pub restaurants: Vec<RestaurantSummary>,
    /// Present only when there is nothing new to recommend
    #[serde(skip_serializing_if = "Option::is_none", default)]
    #[schema(example = "No new recommendations found.")]
    pub message: Option<String>,
}

/// Health check response structure
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    /// Current timestamp in RFC3339 format
    #[schema(example = "2024-01-15T10:30:00Z")]
    pub timestamp: String,
}

/// Error response structure
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "User with ID 99 not found")]
    pub error: String,
}

fn round_price(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}
