// Route exports
pub mod errors;
pub mod search;

use actix_web::web;

pub use errors::{handle_json_payload_error, json_config};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(search::configure);
}
