//! Relation repository implementation.

use sqlx::PgPool;

use stamboek_core::error::{AppError, ErrorKind};
use stamboek_core::result::AppResult;
use stamboek_entity::relation::{CreateRelation, Relation, RelationDetail, UpdateRelation};

const SELECT_DETAIL: &str = "SELECT r.id, \
            r.person1_id, p1.first_name AS person1_first_name, p1.last_name AS person1_last_name, \
            r.person2_id, p2.first_name AS person2_first_name, p2.last_name AS person2_last_name, \
            r.relation_type_id, t.name AS relation_type_name \
     FROM relations r \
     JOIN persons p1 ON p1.id = r.person1_id \
     JOIN persons p2 ON p2.id = r.person2_id \
     JOIN relation_types t ON t.id = r.relation_type_id";

/// Repository for relation CRUD and search.
#[derive(Debug, Clone)]
pub struct RelationRepository {
    pool: PgPool,
}

impl RelationRepository {
    /// Create a new relation repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all relations joined with both persons and the type.
    pub async fn find_all(&self) -> AppResult<Vec<RelationDetail>> {
        sqlx::query_as::<_, RelationDetail>(&format!("{SELECT_DETAIL} ORDER BY r.id"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list relations", e))
    }

    /// Search relations by person names or relation type name.
    pub async fn search(&self, term: &str) -> AppResult<Vec<RelationDetail>> {
        let pattern = format!("%{term}%");

        sqlx::query_as::<_, RelationDetail>(&format!(
            "{SELECT_DETAIL} \
             WHERE p1.first_name ILIKE $1 OR p1.last_name ILIKE $1 \
                OR p2.first_name ILIKE $1 OR p2.last_name ILIKE $1 \
                OR t.name ILIKE $1 \
             ORDER BY r.id"
        ))
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search relations", e))
    }

    /// Find a relation by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Relation>> {
        sqlx::query_as::<_, Relation>("SELECT * FROM relations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find relation", e))
    }

    /// Create a new relation.
    pub async fn create(&self, data: &CreateRelation) -> AppResult<Relation> {
        sqlx::query_as::<_, Relation>(
            "INSERT INTO relations (person1_id, person2_id, relation_type_id) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(data.person1_id)
        .bind(data.person2_id)
        .bind(data.relation_type_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create relation", e))
    }

    /// Update a relation.
    pub async fn update(&self, id: i64, data: &UpdateRelation) -> AppResult<Relation> {
        sqlx::query_as::<_, Relation>(
            "UPDATE relations SET person1_id = $2, person2_id = $3, relation_type_id = $4 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(data.person1_id)
        .bind(data.person2_id)
        .bind(data.relation_type_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update relation", e))?
        .ok_or_else(|| AppError::not_found("Relatie niet gevonden"))
    }

    /// Delete a relation by id.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM relations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete relation", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Relatie niet gevonden"));
        }
        Ok(())
    }
}
