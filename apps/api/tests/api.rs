use actix_web::{http::StatusCode, test, web, App};
use restaurant_recommender_api::{
    models::{RecommendationResponse, NO_RECOMMENDATIONS_MESSAGE},
    routes,
    services::{JsonDatasetStore, RecommendationService},
};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

macro_rules! init_app {
    ($fixture:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(RecommendationService::default()))
                .app_data(web::Data::new(JsonDatasetStore::new(fixture($fixture))))
                .configure(routes::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn test_ping() {
    let app = init_app!("data.json");
    let req = test::TestRequest::get().uri("/").to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(body, web::Bytes::from_static(b"It works"));
}

#[actix_web::test]
async fn test_health() {
    let app = init_app!("data.json");
    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn test_recommendations_for_user_with_likes() {
    let app = init_app!("data.json");
    let req = test::TestRequest::get()
        .uri("/api/recommendations/1")
        .to_request();
    let body: RecommendationResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.user, "ANA");
    assert_eq!(body.total_restaurants, 3);
    let names: Vec<&str> = body.restaurants.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Pasta & Co", "Forno Velho", "La Pizzeria"]);
    assert_eq!(body.restaurants[2].average_price, 52.5);
    assert!(body.message.is_none());
}

#[actix_web::test]
async fn test_legacy_find_route_matches_api_route() {
    let app = init_app!("data.json");
    let legacy: serde_json::Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/find/1").to_request(),
    )
    .await;
    let current: serde_json::Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/recommendations/1")
            .to_request(),
    )
    .await;
    assert_eq!(legacy, current);
}

#[actix_web::test]
async fn test_user_without_ratings_gets_message() {
    let app = init_app!("data.json");
    let req = test::TestRequest::get()
        .uri("/api/recommendations/2")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: RecommendationResponse = test::read_body_json(resp).await;
    assert_eq!(body.user, "BRUNO");
    assert_eq!(body.total_restaurants, 0);
    assert!(body.restaurants.is_empty());
    assert_eq!(body.message.as_deref(), Some(NO_RECOMMENDATIONS_MESSAGE));
}

#[actix_web::test]
async fn test_user_with_only_low_ratings_gets_nothing() {
    let app = init_app!("data.json");
    let req = test::TestRequest::get().uri("/find/3").to_request();
    let body: RecommendationResponse = test::call_and_read_body_json(&app, req).await;
    assert!(body.restaurants.is_empty());
}

#[actix_web::test]
async fn test_unknown_user_is_not_found() {
    let app = init_app!("data.json");
    let req = test::TestRequest::get()
        .uri("/api/recommendations/99")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "User with ID 99 not found");
}

#[actix_web::test]
async fn test_non_integer_user_id_is_bad_request() {
    let app = init_app!("data.json");
    for uri in ["/find/abc", "/api/recommendations/abc"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        let error = body["error"].as_str().unwrap();
        assert!(error.starts_with("Invalid input:"));
    }
}

#[actix_web::test]
async fn test_empty_restaurant_set_is_server_error() {
    let app = init_app!("no_restaurants.json");
    let req = test::TestRequest::get()
        .uri("/api/recommendations/1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn test_missing_data_file_is_server_error() {
    let app = init_app!("missing.json");
    let req = test::TestRequest::get()
        .uri("/api/recommendations/1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn test_openapi_document() {
    let app = init_app!("data.json");
    let req = test::TestRequest::get()
        .uri("/api-docs/openapi.json")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["paths"]["/api/recommendations/{user_id}"].is_object());
}
