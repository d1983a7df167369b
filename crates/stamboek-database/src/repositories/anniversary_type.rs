//! Anniversary type repository implementation.

use sqlx::PgPool;

use stamboek_core::error::{AppError, ErrorKind};
use stamboek_core::result::AppResult;
use stamboek_entity::anniversary::AnniversaryType;

/// Repository for the anniversary type vocabulary.
#[derive(Debug, Clone)]
pub struct AnniversaryTypeRepository {
    pool: PgPool,
}

impl AnniversaryTypeRepository {
    /// Create a new anniversary type repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all anniversary types.
    pub async fn find_all(&self) -> AppResult<Vec<AnniversaryType>> {
        sqlx::query_as::<_, AnniversaryType>("SELECT * FROM anniversary_types ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list anniversary types", e)
            })
    }

    /// Find an anniversary type by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<AnniversaryType>> {
        sqlx::query_as::<_, AnniversaryType>("SELECT * FROM anniversary_types WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find anniversary type", e)
            })
    }

    /// Create a new anniversary type.
    pub async fn create(&self, name: &str) -> AppResult<AnniversaryType> {
        sqlx::query_as::<_, AnniversaryType>(
            "INSERT INTO anniversary_types (name) VALUES ($1) RETURNING *",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("anniversary_types_name_key") =>
            {
                AppError::conflict(format!("Jubileumtype '{name}' bestaat al"))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create anniversary type", e),
        })
    }

    /// Rename an anniversary type.
    pub async fn update(&self, id: i64, name: &str) -> AppResult<AnniversaryType> {
        sqlx::query_as::<_, AnniversaryType>(
            "UPDATE anniversary_types SET name = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update anniversary type", e)
        })?
        .ok_or_else(|| AppError::not_found("Jubileumtype niet gevonden"))
    }

    /// Delete an anniversary type by id.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM anniversary_types WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete anniversary type", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Jubileumtype niet gevonden"));
        }
        Ok(())
    }
}
