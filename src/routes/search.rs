use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{DateError, SearchEvaluator};
use crate::models::{Dataset, ErrorResponse, HealthResponse, InlineSearchRequest, SearchMode, SearchResponse};
use crate::services::{DataError, DataProvider};
use std::sync::Arc;
use thiserror::Error;

/// Reasons a search request fails as a whole
#[derive(Debug, Error)]
pub enum SearchFailure {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Date(#[from] DateError),
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn DataProvider>,
    pub evaluator: SearchEvaluator,
}

/// Configure all search-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/v{version}/search/campers/", web::get().to(search_campers))
        .route("/v{version}/search/campers", web::get().to(search_campers))
        .route("/v{version}/search/campers/", web::post().to(search_campers_inline))
        .route("/v{version}/search/campers", web::post().to(search_campers_inline));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Search campers against the configured data source
///
/// GET /v{1,2,3}/search/campers/
///
/// Response body:
/// ```json
/// {
///   "results": [
///     {"search_id": "1", "search_results": [{"camper_id": "3", "price": 90.0}]}
///   ]
/// }
/// ```
async fn search_campers(
    state: web::Data<AppState>,
    version: web::Path<u8>,
) -> impl Responder {
    let Some(mode) = SearchMode::from_version(version.into_inner()) else {
        return unknown_version();
    };

    tracing::info!("Searching campers ({})", mode);

    let provider = Arc::clone(&state.provider);
    let evaluator = state.evaluator;

    let outcome = tokio::task::spawn_blocking(move || -> Result<SearchResponse, SearchFailure> {
        let dataset = provider.dataset(mode)?;
        Ok(evaluator.evaluate(mode, &dataset)?)
    })
    .await;

    match outcome {
        Ok(Ok(response)) => HttpResponse::Ok().json(response),
        Ok(Err(SearchFailure::Data(e))) => {
            tracing::error!("Failed to load {} data: {}", mode, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to load search data".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
        Ok(Err(SearchFailure::Date(e))) => {
            tracing::error!("Malformed date in {} data: {}", mode, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Invalid date in search data".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
        Err(e) => {
            tracing::error!("Search task for {} failed: {}", mode, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Search failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Search campers against collections supplied in the request body
///
/// POST /v{1,2,3}/search/campers/
///
/// Request body:
/// ```json
/// {
///   "searches": [{"id": "1", "latitude": 48.1, "longitude": 11.5}],
///   "campers": [{"id": "3", "latitude": 48.12, "longitude": 11.52, "price_per_day": 90.0}],
///   "calendars": []
/// }
/// ```
async fn search_campers_inline(
    state: web::Data<AppState>,
    version: web::Path<u8>,
    req: web::Json<InlineSearchRequest>,
) -> impl Responder {
    let Some(mode) = SearchMode::from_version(version.into_inner()) else {
        return unknown_version();
    };

    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for inline search request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let mut dataset = Dataset::from(req.into_inner());
    if !mode.checks_availability() {
        dataset.calendars = None;
    }

    tracing::info!(
        "Searching campers inline ({}): {} searches, {} campers",
        mode,
        dataset.searches.len(),
        dataset.campers.len()
    );

    match state.evaluator.evaluate(mode, &dataset) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            tracing::info!("Malformed date in inline search request: {}", e);
            HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid date".to_string(),
                message: e.to_string(),
                status_code: 400,
            })
        }
    }
}

fn unknown_version() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: "Unknown version".to_string(),
        message: "Supported versions are v1, v2 and v3".to_string(),
        status_code: 404,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::InMemoryProvider;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_check() {
        let state = AppState {
            provider: Arc::new(InMemoryProvider::new()),
            evaluator: SearchEvaluator::default(),
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let response: HealthResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(response.status, "healthy");
    }

    #[actix_web::test]
    async fn test_unknown_version_is_not_found() {
        let state = AppState {
            provider: Arc::new(InMemoryProvider::new()),
            evaluator: SearchEvaluator::default(),
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/v4/search/campers/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}
