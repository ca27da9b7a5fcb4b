use crate::service::CatalogService;
use axum::{response::Json, routing::get, Router};
use serde_json::json;

pub fn router() -> Router<CatalogService> {
    Router::new().route("/health", get(health_check))
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "message": "Auto catalog API is healthy"
    }))
}
