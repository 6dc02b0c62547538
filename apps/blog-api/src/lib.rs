//! # Blog API
//!
//! Actix-web service exposing the blog post resource.

use actix_web::web;

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod server;
pub mod state;
pub mod telemetry;

pub use config::AppConfig;
pub use server::{RunningServer, ServerError, close_server, run_server};
pub use state::AppState;

/// App configuration shared by the HTTP server and the test harness:
/// state, JSON extractor config and routes.
pub fn configure_app(state: AppState) -> impl Fn(&mut web::ServiceConfig) + Clone {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(state.clone())).app_data(
            web::JsonConfig::default().error_handler(middleware::error::json_error_handler),
        );
        handlers::configure_routes(cfg);
    }
}
