use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use rdv_server::{health, AppState, ServerConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;
    rdv_server::init_tracing(&config.log_filter);

    let state = web::Data::new(AppState::seeded());
    let bind = config.bind_addr();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind = %bind,
        "starting appointment server"
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .configure(rdv_server::config)
            .default_service(web::route().to(health::not_found))
    })
    .bind(&bind)
    .with_context(|| format!("failed to bind {}", bind))?
    .run()
    .await
    .context("server error")
}
