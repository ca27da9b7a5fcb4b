use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A persisted car listing. The JSON field names (`marca`, `region`,
/// `tipoCarroceria`, `precio`, `imagen`) are the wire-format contract and
/// must not change.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Auto {
    pub id: Uuid,
    pub marca: String,
    pub region: String,
    #[serde(rename = "tipoCarroceria")]
    pub tipo_carroceria: String,
    pub precio: i64,
    pub imagen: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create payload. Required fields must be present and non-empty; `precio`
/// must be non-negative. `id` and timestamps are assigned by the store.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewAuto {
    #[validate(length(min = 1, message = "marca is required"))]
    pub marca: String,
    #[validate(length(min = 1, message = "region is required"))]
    pub region: String,
    #[serde(rename = "tipoCarroceria")]
    #[validate(length(min = 1, message = "tipoCarroceria is required"))]
    pub tipo_carroceria: String,
    #[validate(range(min = 0, message = "precio must be non-negative"))]
    pub precio: i64,
    pub imagen: Option<String>,
}

/// Partial update payload; absent fields keep their stored values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAuto {
    pub marca: Option<String>,
    pub region: Option<String>,
    #[serde(rename = "tipoCarroceria")]
    pub tipo_carroceria: Option<String>,
    pub precio: Option<i64>,
    pub imagen: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_serializes_with_wire_field_names() {
        let auto = Auto {
            id: Uuid::new_v4(),
            marca: "Toyota".to_string(),
            region: "Norte".to_string(),
            tipo_carroceria: "Sedan".to_string(),
            precio: 20000,
            imagen: None,
            created_at: None,
            updated_at: None,
        };

        let value = serde_json::to_value(&auto).unwrap();
        assert!(value.get("marca").is_some());
        assert!(value.get("region").is_some());
        assert!(value.get("tipoCarroceria").is_some());
        assert!(value.get("precio").is_some());
        assert!(value.get("imagen").is_some());
        assert!(value.get("tipo_carroceria").is_none());
    }

    #[test]
    fn new_auto_rejects_empty_required_fields() {
        let auto: NewAuto = serde_json::from_value(serde_json::json!({
            "marca": "",
            "region": "Norte",
            "tipoCarroceria": "Sedan",
            "precio": 1000
        }))
        .unwrap();

        assert!(auto.validate().is_err());
    }

    #[test]
    fn new_auto_rejects_negative_price() {
        let auto: NewAuto = serde_json::from_value(serde_json::json!({
            "marca": "Toyota",
            "region": "Norte",
            "tipoCarroceria": "Sedan",
            "precio": -1
        }))
        .unwrap();

        assert!(auto.validate().is_err());
    }

    #[test]
    fn new_auto_missing_field_fails_to_deserialize() {
        let result: Result<NewAuto, _> = serde_json::from_value(serde_json::json!({
            "marca": "Toyota",
            "precio": 1000
        }));

        assert!(result.is_err());
    }
}
