use crate::{
    error::Result,
    models::{ErrorResponse, RecommendationResponse, RestaurantSummary, NO_RECOMMENDATIONS_MESSAGE},
    services::{JsonDatasetStore, RecommendationResult, RecommendationService},
};
use actix_web::{web, HttpResponse};
use log::info;

pub fn recommendations_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/recommendations/{user_id}").route(web::get().to(get_recommendations)),
    );
}

/// Legacy route for existing `/find/{user_id}` clients
pub fn legacy_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/find/{user_id}").route(web::get().to(get_recommendations)));
}

impl From<RecommendationResult> for RecommendationResponse {
    fn from(result: RecommendationResult) -> Self {
        let restaurants: Vec<RestaurantSummary> =
            result.restaurants.iter().map(RestaurantSummary::from).collect();
        let message = restaurants
            .is_empty()
            .then(|| NO_RECOMMENDATIONS_MESSAGE.to_string());

        Self {
            user: result.user_display_name.to_uppercase(),
            total_restaurants: restaurants.len(),
            restaurants,
            message,
        }
    }
}

/// Recommend restaurants similar to the ones a user liked
///
/// Finds restaurants close in category and price to those the user rated at or
/// above the seed threshold, excluding every restaurant the user has already rated.
#[utoipa::path(
    get,
    path = "/api/recommendations/{user_id}",
    tag = "Recommendations",
    params(
        ("user_id" = i64, Path, description = "Identifier of the user to recommend restaurants for")
    ),
    responses(
        (status = 200, description = "Recommendations computed, possibly empty", body = RecommendationResponse),
        (status = 400, description = "User ID is not an integer", body = ErrorResponse),
        (status = 404, description = "Unknown user", body = ErrorResponse),
        (status = 500, description = "Dataset could not be loaded or encoded", body = ErrorResponse),
    )
)]
pub async fn get_recommendations(
    user_id: web::Path<i64>,
    recommendation_service: web::Data<RecommendationService>,
    dataset_store: web::Data<JsonDatasetStore>,
) -> Result<HttpResponse> {
    let user_id = user_id.into_inner();
    info!("Recommendation request for user {}", user_id);

    let dataset = dataset_store.load().await?;
    let result = recommendation_service.get_recommendations(user_id, &dataset)?;

    Ok(HttpResponse::Ok().json(RecommendationResponse::from(result)))
}
