//! Liveness endpoint

use rocket::get;
use rocket::serde::json::Json;

use crate::constants::HEALTH_OK;
use crate::models::HealthResponse;

#[get("/health")]
pub fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTH_OK.to_string(),
    })
}
