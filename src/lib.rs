pub mod appointment;
pub mod config;
pub mod doctor;
pub mod error;
pub mod health;
pub mod models;
pub mod protocol;
pub mod state;
pub mod store;
pub mod user;
pub mod utils;

use actix_web::web;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use crate::{config::ServerConfig, state::AppState};

/// Registers every route. Pair with `health::not_found` as default service.
pub fn config(cfg: &mut web::ServiceConfig) {
    health::config(cfg);
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .app_data(query_config())
            .configure(doctor::config)
            .configure(appointment::config)
            .configure(user::config),
    );
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(error::json_error_handler)
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(error::query_error_handler)
}

/// `RUST_LOG` wins over the configured filter when both are set.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
