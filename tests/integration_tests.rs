// Integration tests for Camper Search

use actix_web::{http::StatusCode, test, web, App};
use camper_search::core::SearchEvaluator;
use camper_search::models::{Camper, CalendarEntry, Dataset, ErrorResponse, MatchResult, Search, SearchMode, SearchResponse};
use camper_search::routes::{self, search::AppState};
use camper_search::services::{DataProvider, DatasetCache, InMemoryProvider, JsonFileProvider};
use std::path::Path;
use std::sync::Arc;

fn fixtures_provider() -> Arc<dyn DataProvider> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    Arc::new(DatasetCache::new(JsonFileProvider::new(root), 8, 60))
}

fn app_state(provider: Arc<dyn DataProvider>) -> web::Data<AppState> {
    web::Data::new(AppState {
        provider,
        evaluator: SearchEvaluator::default(),
    })
}

fn priced(camper_id: &str, price: f64) -> MatchResult {
    MatchResult {
        camper_id: camper_id.to_string(),
        price: Some(price),
    }
}

fn unpriced(camper_id: &str) -> MatchResult {
    MatchResult {
        camper_id: camper_id.to_string(),
        price: None,
    }
}

async fn get_response(provider: Arc<dyn DataProvider>, uri: &str) -> SearchResponse {
    let app = test::init_service(
        App::new()
            .app_data(app_state(provider))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri(uri).to_request();
    test::call_and_read_body_json(&app, req).await
}

#[actix_web::test]
async fn test_v1_proximity_only() {
    let response = get_response(fixtures_provider(), "/v1/search/campers/").await;

    let ids: Vec<&str> = response.results.iter().map(|r| r.search_id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);

    assert_eq!(response.results[0].search_results, vec![unpriced("101")]);
    assert_eq!(response.results[1].search_results, vec![unpriced("103")]);
    assert_eq!(response.results[2].search_results, vec![unpriced("104")]);
}

#[actix_web::test]
async fn test_v1_omits_price_on_the_wire() {
    let app = test::init_service(
        App::new()
            .app_data(app_state(fixtures_provider()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/v1/search/campers/").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["results"][0]["search_id"], "1");
    assert_eq!(body["results"][0]["search_results"][0], serde_json::json!({"camper_id": "101"}));
}

#[actix_web::test]
async fn test_v2_priced_and_sorted() {
    let response = get_response(fixtures_provider(), "/v2/search/campers").await;

    assert_eq!(response.results[0].search_results, vec![priced("102", 350.0), priced("101", 425.0)]);
    assert_eq!(response.results[1].search_results, vec![priced("103", 783.75), priced("104", 990.0)]);
    assert_eq!(response.results[2].search_results, vec![priced("105", 60.0)]);
}

#[actix_web::test]
async fn test_v3_excludes_booked_campers() {
    let response = get_response(fixtures_provider(), "/v3/search/campers/").await;

    assert_eq!(response.results[0].search_results, vec![priced("102", 350.0)]);
    assert_eq!(response.results[1].search_results, vec![priced("104", 990.0)]);
    // Undated search is never blocked by the year-long booking
    assert_eq!(response.results[2].search_results, vec![priced("105", 60.0)]);
}

#[actix_web::test]
async fn test_missing_collection_is_server_error() {
    let app = test::init_service(
        App::new()
            .app_data(app_state(Arc::new(InMemoryProvider::new())))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/v2/search/campers/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn test_in_memory_availability_scenario() {
    let camper = |id: &str, lat: f64| Camper {
        id: id.to_string(),
        latitude: lat,
        longitude: lat,
        price_per_day: 20.0,
        weekly_discount: 0.0,
    };

    let dataset = Dataset {
        searches: vec![Search {
            id: "s1".to_string(),
            latitude: 0.0,
            longitude: 0.0,
            start_date: Some("2024-01-01".to_string()),
            end_date: Some("2024-01-10".to_string()),
        }],
        campers: vec![camper("A", 0.05), camper("B", 0.05), camper("C", 5.0)],
        calendars: Some(vec![CalendarEntry {
            camper_id: "B".to_string(),
            start_date: "2024-01-01".to_string(),
            end_date: "2024-01-10".to_string(),
            camper_is_available: false,
        }]),
    };
    let provider = InMemoryProvider::new().with_dataset(SearchMode::PricedWithAvailability, dataset);

    let response = get_response(Arc::new(provider), "/v3/search/campers/").await;

    assert_eq!(response.results.len(), 1);
    assert_eq!(response.results[0].search_results, vec![priced("A", 200.0)]);
}

#[actix_web::test]
async fn test_inline_search() {
    let app = test::init_service(
        App::new()
            .app_data(app_state(Arc::new(InMemoryProvider::new())))
            .configure(routes::configure_routes),
    )
    .await;

    let body = serde_json::json!({
        "searches": [
            {"id": "s1", "latitude": 0.0, "longitude": 0.0, "start_date": "2024-01-01", "end_date": "2024-01-07"}
        ],
        "campers": [
            {"id": "dear", "latitude": 0.01, "longitude": 0.01, "price_per_day": 100.0, "weekly_discount": 0.25},
            {"id": "cheap", "latitude": 0.02, "longitude": 0.02, "price_per_day": 50.0}
        ],
        "calendars": [
            {"camper_id": "cheap", "start_date": "2024-01-03", "end_date": "2024-01-04", "camper_is_available": false}
        ]
    });

    // v2 ignores calendars
    let req = test::TestRequest::post().uri("/v2/search/campers/").set_json(&body).to_request();
    let response: SearchResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(response.results[0].search_results, vec![priced("cheap", 350.0), priced("dear", 525.0)]);

    // v3 applies them
    let req = test::TestRequest::post().uri("/v3/search/campers/").set_json(&body).to_request();
    let response: SearchResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(response.results[0].search_results, vec![priced("dear", 525.0)]);
}

#[actix_web::test]
async fn test_inline_search_validation() {
    let app = test::init_service(
        App::new()
            .app_data(app_state(Arc::new(InMemoryProvider::new())))
            .configure(routes::configure_routes),
    )
    .await;

    let body = serde_json::json!({
        "searches": [{"id": "", "latitude": 0.0, "longitude": 0.0}],
        "campers": []
    });

    let req = test::TestRequest::post().uri("/v1/search/campers/").set_json(&body).to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_malformed_json_body_is_bad_request() {
    let app = test::init_service(
        App::new()
            .app_data(app_state(Arc::new(InMemoryProvider::new())))
            .app_data(routes::json_config())
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/v2/search/campers/")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"searches": ["#)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "invalid_json");
    assert_eq!(body.status_code, 400);
}

fn dataset_with_search_dates(start: &str, end: &str) -> Dataset {
    Dataset {
        searches: vec![Search {
            id: "s1".to_string(),
            latitude: 0.0,
            longitude: 0.0,
            start_date: Some(start.to_string()),
            end_date: Some(end.to_string()),
        }],
        campers: vec![Camper {
            id: "A".to_string(),
            latitude: 0.0,
            longitude: 0.0,
            price_per_day: 20.0,
            weekly_discount: 0.0,
        }],
        calendars: None,
    }
}

#[actix_web::test]
async fn test_malformed_search_date_only_matters_when_priced() {
    let provider = InMemoryProvider::new()
        .with_dataset(SearchMode::ProximityOnly, dataset_with_search_dates("06/01/2024", "2024-06-05"))
        .with_dataset(SearchMode::Priced, dataset_with_search_dates("06/01/2024", "2024-06-05"));
    let app = test::init_service(
        App::new()
            .app_data(app_state(Arc::new(provider)))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/v1/search/campers/").to_request();
    let response: SearchResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(response.results[0].search_results, vec![unpriced("A")]);

    let req = test::TestRequest::get().uri("/v2/search/campers/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "Invalid date in search data");
}

#[actix_web::test]
async fn test_inline_malformed_date_is_bad_request() {
    let app = test::init_service(
        App::new()
            .app_data(app_state(Arc::new(InMemoryProvider::new())))
            .configure(routes::configure_routes),
    )
    .await;

    let body = serde_json::json!({
        "searches": [{"id": "s1", "latitude": 0.0, "longitude": 0.0, "start_date": "2024-01-01", "end_date": "tomorrow"}],
        "campers": [{"id": "A", "latitude": 0.0, "longitude": 0.0, "price_per_day": 20.0}]
    });

    let req = test::TestRequest::post().uri("/v2/search/campers/").set_json(&body).to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
