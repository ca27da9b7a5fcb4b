use crate::models::{Auto, NewAuto, UpdateAuto};
use sqlx::PgPool;
use uuid::Uuid;

const AUTO_COLUMNS: &str =
    "id, marca, region, tipo_carroceria, precio, imagen, created_at, updated_at";

#[derive(Clone)]
pub struct AutoRepository {
    pool: PgPool,
}

impl AutoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn fetch_all(&self) -> Result<Vec<Auto>, sqlx::Error> {
        sqlx::query_as::<_, Auto>(&format!("SELECT {} FROM autos", AUTO_COLUMNS))
            .fetch_all(&self.pool)
            .await
    }

    pub async fn fetch_by_id(&self, id: Uuid) -> Result<Option<Auto>, sqlx::Error> {
        sqlx::query_as::<_, Auto>(&format!("SELECT {} FROM autos WHERE id = $1", AUTO_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn create(&self, auto: &NewAuto) -> Result<Auto, sqlx::Error> {
        sqlx::query_as::<_, Auto>(&format!(
            "INSERT INTO autos (marca, region, tipo_carroceria, precio, imagen) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            AUTO_COLUMNS
        ))
        .bind(&auto.marca)
        .bind(&auto.region)
        .bind(&auto.tipo_carroceria)
        .bind(auto.precio)
        .bind(&auto.imagen)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update(&self, id: Uuid, changes: &UpdateAuto) -> Result<Option<Auto>, sqlx::Error> {
        sqlx::query_as::<_, Auto>(&format!(
            "UPDATE autos SET \
                marca = COALESCE($1, marca), \
                region = COALESCE($2, region), \
                tipo_carroceria = COALESCE($3, tipo_carroceria), \
                precio = COALESCE($4, precio), \
                imagen = COALESCE($5, imagen), \
                updated_at = NOW() \
             WHERE id = $6 RETURNING {}",
            AUTO_COLUMNS
        ))
        .bind(&changes.marca)
        .bind(&changes.region)
        .bind(&changes.tipo_carroceria)
        .bind(changes.precio)
        .bind(&changes.imagen)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM autos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
