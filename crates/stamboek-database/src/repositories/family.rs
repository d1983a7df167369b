//! Family repository implementation.

use sqlx::PgPool;

use stamboek_core::error::{AppError, ErrorKind};
use stamboek_core::result::AppResult;
use stamboek_entity::family::{CreateFamily, Family, UpdateFamily};
use stamboek_entity::person::Person;
use stamboek_entity::record::OwnedRecordSummary;

/// Repository for family CRUD and membership queries.
#[derive(Debug, Clone)]
pub struct FamilyRepository {
    pool: PgPool,
}

impl FamilyRepository {
    /// Create a new family repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all families ordered by name.
    pub async fn find_all(&self) -> AppResult<Vec<Family>> {
        sqlx::query_as::<_, Family>("SELECT * FROM families ORDER BY family_name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list families", e))
    }

    /// Find a family by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Family>> {
        sqlx::query_as::<_, Family>("SELECT * FROM families WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find family", e))
    }

    /// List the persons belonging to a family.
    pub async fn members(&self, family_id: i64) -> AppResult<Vec<Person>> {
        sqlx::query_as::<_, Person>(
            "SELECT * FROM persons WHERE family_id = $1 ORDER BY first_name, last_name",
        )
        .bind(family_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list family members", e))
    }

    /// Create a new family.
    pub async fn create(&self, data: &CreateFamily) -> AppResult<Family> {
        sqlx::query_as::<_, Family>(
            "INSERT INTO families \
             (family_name, street, house_number, house_number_suffix, postal_code, city, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(&data.family_name)
        .bind(&data.street)
        .bind(&data.house_number)
        .bind(&data.house_number_suffix)
        .bind(&data.postal_code)
        .bind(&data.city)
        .bind(data.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create family", e))
    }

    /// Update a family's fields. The creator is left untouched.
    pub async fn update(&self, id: i64, data: &UpdateFamily) -> AppResult<Family> {
        sqlx::query_as::<_, Family>(
            "UPDATE families SET family_name = $2, street = $3, house_number = $4, \
                                 house_number_suffix = $5, postal_code = $6, city = $7 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.family_name)
        .bind(&data.street)
        .bind(&data.house_number)
        .bind(&data.house_number_suffix)
        .bind(&data.postal_code)
        .bind(&data.city)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update family", e))?
        .ok_or_else(|| AppError::not_found("Familie niet gevonden"))
    }

    /// Delete a family by id.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM families WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete family", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Familie niet gevonden"));
        }
        Ok(())
    }

    /// Page through families joined with their owners (change-owner screen).
    pub async fn list_with_owner(
        &self,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<OwnedRecordSummary>> {
        sqlx::query_as::<_, OwnedRecordSummary>(
            "SELECT f.id, f.family_name AS label, u.id AS owner_id, u.name AS owner_name \
             FROM families f JOIN users u ON u.id = f.created_by \
             ORDER BY f.id LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list family owners", e)
        })
    }

    /// Reassign a family's owner (administrative operation).
    pub async fn update_owner(&self, id: i64, owner_id: i64) -> AppResult<()> {
        let result = sqlx::query("UPDATE families SET created_by = $2 WHERE id = $1")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update family owner", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Familie niet gevonden"));
        }
        Ok(())
    }
}
