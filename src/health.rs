use crate::{
    error::{ApiError, MSG_ROUTE_NOT_FOUND},
    protocol::HealthResponse,
};
use actix_web::{get, web, HttpResponse, Responder};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK",
        message: "Serveur de rendez-vous fonctionnel",
    })
}

/// Default service for anything no route claims.
pub async fn not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound(MSG_ROUTE_NOT_FOUND))
}
