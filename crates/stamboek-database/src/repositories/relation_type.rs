//! Relation type repository implementation.

use sqlx::PgPool;

use stamboek_core::error::{AppError, ErrorKind};
use stamboek_core::result::AppResult;
use stamboek_entity::relation::RelationType;

/// Repository for the relation type vocabulary.
#[derive(Debug, Clone)]
pub struct RelationTypeRepository {
    pool: PgPool,
}

impl RelationTypeRepository {
    /// Create a new relation type repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all relation types.
    pub async fn find_all(&self) -> AppResult<Vec<RelationType>> {
        sqlx::query_as::<_, RelationType>("SELECT * FROM relation_types ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list relation types", e)
            })
    }

    /// Find a relation type by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<RelationType>> {
        sqlx::query_as::<_, RelationType>("SELECT * FROM relation_types WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find relation type", e)
            })
    }

    /// Create a new relation type.
    pub async fn create(&self, name: &str, symmetric: bool) -> AppResult<RelationType> {
        sqlx::query_as::<_, RelationType>(
            "INSERT INTO relation_types (name, is_symmetric) VALUES ($1, $2) RETURNING *",
        )
        .bind(name)
        .bind(symmetric)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create relation type", e))
    }

    /// Update a relation type.
    pub async fn update(&self, id: i64, name: &str, symmetric: bool) -> AppResult<RelationType> {
        sqlx::query_as::<_, RelationType>(
            "UPDATE relation_types SET name = $2, is_symmetric = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .bind(symmetric)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update relation type", e)
        })?
        .ok_or_else(|| AppError::not_found("Relatietype niet gevonden"))
    }

    /// Delete a relation type by id.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM relation_types WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete relation type", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Relatietype niet gevonden"));
        }
        Ok(())
    }
}
