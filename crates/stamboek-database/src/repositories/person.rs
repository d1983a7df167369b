//! Person repository implementation.

use sqlx::PgPool;

use stamboek_core::error::{AppError, ErrorKind};
use stamboek_core::result::AppResult;
use stamboek_entity::anniversary::AnniversaryDetail;
use stamboek_entity::person::{CreatePerson, Person, PersonSummary, UpdatePerson};
use stamboek_entity::record::OwnedRecordSummary;

/// Sort orders for the person listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonSort {
    /// By first name.
    FirstName,
    /// By last name.
    LastName,
    /// By family name.
    Family,
}

impl PersonSort {
    /// Parse the `sort` query parameter; unknown values mean unsorted.
    pub fn from_param(param: &str) -> Option<Self> {
        match param {
            "first_name" => Some(Self::FirstName),
            "last_name" => Some(Self::LastName),
            "family" => Some(Self::Family),
            _ => None,
        }
    }

    fn order_by(self) -> &'static str {
        match self {
            Self::FirstName => "p.first_name",
            Self::LastName => "p.last_name",
            Self::Family => "f.family_name",
        }
    }
}

/// Repository for person CRUD and listing queries.
#[derive(Debug, Clone)]
pub struct PersonRepository {
    pool: PgPool,
}

impl PersonRepository {
    /// Create a new person repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all persons joined with their family name.
    pub async fn find_all(&self, sort: Option<PersonSort>) -> AppResult<Vec<PersonSummary>> {
        let order = sort.map(PersonSort::order_by).unwrap_or("p.id");
        let query = format!(
            "SELECT p.id, p.first_name, p.last_name, f.family_name, p.alive \
             FROM persons p LEFT JOIN families f ON f.id = p.family_id \
             ORDER BY {order}"
        );

        sqlx::query_as::<_, PersonSummary>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list persons", e))
    }

    /// Find a person by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Person>> {
        sqlx::query_as::<_, Person>("SELECT * FROM persons WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find person", e))
    }

    /// List a person's anniversaries, oldest date first.
    pub async fn anniversaries(&self, person_id: i64) -> AppResult<Vec<AnniversaryDetail>> {
        sqlx::query_as::<_, AnniversaryDetail>(
            "SELECT a.id, a.event_date, a.description, t.name AS type_name, \
                    p.first_name || ' ' || p.last_name AS person_name \
             FROM anniversaries a \
             LEFT JOIN anniversary_types t ON t.id = a.anniversary_type_id \
             JOIN persons p ON p.id = a.person_id \
             WHERE a.person_id = $1 ORDER BY a.event_date",
        )
        .bind(person_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list person anniversaries", e)
        })
    }

    /// Create a new person.
    pub async fn create(&self, data: &CreatePerson) -> AppResult<Person> {
        sqlx::query_as::<_, Person>(
            "INSERT INTO persons (first_name, last_name, family_id, alive, created_by) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(data.family_id)
        .bind(data.alive)
        .bind(data.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create person", e))
    }

    /// Update a person's fields. The creator is left untouched.
    pub async fn update(&self, id: i64, data: &UpdatePerson) -> AppResult<Person> {
        sqlx::query_as::<_, Person>(
            "UPDATE persons SET first_name = $2, last_name = $3, family_id = $4, alive = $5 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(data.family_id)
        .bind(data.alive)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update person", e))?
        .ok_or_else(|| AppError::not_found("Persoon niet gevonden"))
    }

    /// Delete a person by id.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM persons WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete person", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Persoon niet gevonden"));
        }
        Ok(())
    }

    /// Page through persons joined with their owners (change-owner screen).
    pub async fn list_with_owner(
        &self,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<OwnedRecordSummary>> {
        sqlx::query_as::<_, OwnedRecordSummary>(
            "SELECT p.id, p.first_name || ' ' || p.last_name AS label, \
                    u.id AS owner_id, u.name AS owner_name \
             FROM persons p JOIN users u ON u.id = p.created_by \
             ORDER BY p.id LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list person owners", e)
        })
    }

    /// Reassign a person's owner (administrative operation).
    pub async fn update_owner(&self, id: i64, owner_id: i64) -> AppResult<()> {
        let result = sqlx::query("UPDATE persons SET created_by = $2 WHERE id = $1")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update person owner", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Persoon niet gevonden"));
        }
        Ok(())
    }
}
