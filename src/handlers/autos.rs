use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;
use crate::filter::FilterCriteria;
use crate::models::{Auto, NewAuto, UpdateAuto};
use crate::service::CatalogService;

pub fn router() -> Router<CatalogService> {
    Router::new()
        .route("/", get(list_autos).post(create_auto))
        .route("/buscar", get(search_autos))
        .route("/{id}", get(get_auto).put(update_auto).delete(delete_auto))
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    marca: Option<String>,
    region: Option<String>,
    #[serde(rename = "tipoCarroceria")]
    tipo_carroceria: Option<String>,
    precio: Option<String>,
}

async fn list_autos(
    State(service): State<CatalogService>,
) -> Result<Json<Vec<Auto>>, AppError> {
    Ok(Json(service.list().await?))
}

async fn search_autos(
    State(service): State<CatalogService>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Auto>>, AppError> {
    let criteria = FilterCriteria::from_raw(
        params.marca,
        params.region,
        params.tipo_carroceria,
        params.precio.as_deref(),
    )?;
    Ok(Json(service.search(criteria).await?))
}

async fn get_auto(
    State(service): State<CatalogService>,
    Path(id): Path<String>,
) -> Result<Json<Auto>, AppError> {
    let id = parse_id(&id)?;
    Ok(Json(service.get(id).await?))
}

async fn create_auto(
    State(service): State<CatalogService>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<Auto>, AppError> {
    let auto: NewAuto =
        serde_json::from_value(body).map_err(|e| AppError::Validation(e.to_string()))?;
    auto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    Ok(Json(service.create(auto).await?))
}

async fn update_auto(
    State(service): State<CatalogService>,
    Path(id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<Auto>, AppError> {
    let id = parse_id(&id)?;
    let changes: UpdateAuto =
        serde_json::from_value(body).map_err(|e| AppError::Validation(e.to_string()))?;
    validate_update(&changes)?;
    Ok(Json(service.update(id, changes).await?))
}

async fn delete_auto(
    State(service): State<CatalogService>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let id = parse_id(&id)?;
    service.delete(id).await?;
    Ok(Json(json!({ "message": "Auto eliminado correctamente" })))
}

// A malformed id is indistinguishable from an absent record to clients.
fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(format!("Auto '{}' not found", raw)))
}

fn validate_update(changes: &UpdateAuto) -> Result<(), AppError> {
    if matches!(changes.marca.as_deref(), Some("")) {
        return Err(AppError::Validation("marca cannot be empty".to_string()));
    }
    if matches!(changes.region.as_deref(), Some("")) {
        return Err(AppError::Validation("region cannot be empty".to_string()));
    }
    if matches!(changes.tipo_carroceria.as_deref(), Some("")) {
        return Err(AppError::Validation("tipoCarroceria cannot be empty".to_string()));
    }
    if matches!(changes.precio, Some(p) if p < 0) {
        return Err(AppError::Validation("precio must be non-negative".to_string()));
    }
    Ok(())
}
