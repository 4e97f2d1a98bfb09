use actix_web::{get, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

/// Index route, kept as a liveness probe for browsers and load balancers.
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json("Task Server is running")
}

/// Health check endpoint
///
/// Returns the current status of the API and timestamp.
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "timestamp": Utc::now()
    }))
}
