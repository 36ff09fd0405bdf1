use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use camper_search::config::Settings;
use camper_search::core::SearchEvaluator;
use camper_search::routes::{self, search::AppState};
use camper_search::services::{DatasetCache, JsonFileProvider};
use std::sync::Arc;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    // Initialize logging, LOG_LEVEL / LOG_FORMAT override the config file
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }

    info!("Starting camper search service...");

    let data_root = settings.data.root.clone();
    let cache_capacity = settings.data.cache_capacity.unwrap_or(16);
    let cache_ttl = settings.data.cache_ttl_secs.unwrap_or(300);

    let provider = DatasetCache::new(JsonFileProvider::new(&data_root), cache_capacity, cache_ttl);

    info!("Data provider initialized (root: {}, cache: {} entries, TTL: {}s)", data_root, cache_capacity, cache_ttl);

    if settings.search.radius <= 0.0 {
        error!("Search radius must be positive, got {}", settings.search.radius);
        return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, "invalid search radius"));
    }

    let evaluator = SearchEvaluator::new(settings.search.radius, settings.search.min_discount_days);

    info!("Evaluator initialized: {:?}", evaluator);

    let app_state = AppState {
        provider: Arc::new(provider),
        evaluator,
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
