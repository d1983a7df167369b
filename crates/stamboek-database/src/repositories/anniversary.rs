//! Anniversary repository implementation.

use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};

use stamboek_core::error::{AppError, ErrorKind};
use stamboek_core::result::AppResult;
use stamboek_entity::anniversary::{
    Anniversary, AnniversaryDetail, CreateAnniversary, UpdateAnniversary,
};
use stamboek_entity::record::{AgendaItem, AgendaPerson, OwnedRecordSummary};

/// Sort orders for the anniversary listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnniversarySort {
    /// By anniversary type name.
    Type,
    /// By event date.
    Date,
    /// By person name.
    Person,
}

impl AnniversarySort {
    /// Parse the `sort` query parameter; unknown values mean unsorted.
    pub fn from_param(param: &str) -> Option<Self> {
        match param {
            "type" => Some(Self::Type),
            "date" => Some(Self::Date),
            "person" => Some(Self::Person),
            _ => None,
        }
    }

    fn order_by(self) -> &'static str {
        match self {
            Self::Type => "t.name",
            Self::Date => "a.event_date",
            Self::Person => "COALESCE(p.first_name, ''), COALESCE(p.last_name, '')",
        }
    }
}

/// A joined row feeding the agenda computation.
#[derive(Debug, FromRow)]
struct AgendaRow {
    event_date: NaiveDate,
    description: Option<String>,
    type_name: String,
    first_name: Option<String>,
    last_name: Option<String>,
    alive: Option<bool>,
}

impl From<AgendaRow> for AgendaItem {
    fn from(row: AgendaRow) -> Self {
        let person = match (row.first_name, row.last_name) {
            (Some(first_name), Some(last_name)) => Some(AgendaPerson {
                first_name,
                last_name,
                alive: row.alive.unwrap_or(true),
            }),
            _ => None,
        };

        AgendaItem {
            event_date: row.event_date,
            description: row.description,
            type_name: row.type_name,
            person,
        }
    }
}

/// Repository for anniversary CRUD, listing, and agenda queries.
#[derive(Debug, Clone)]
pub struct AnniversaryRepository {
    pool: PgPool,
}

impl AnniversaryRepository {
    /// Create a new anniversary repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all anniversaries joined with type and person.
    pub async fn find_all(&self, sort: Option<AnniversarySort>) -> AppResult<Vec<AnniversaryDetail>> {
        let order = sort.map(AnniversarySort::order_by).unwrap_or("a.id");
        let query = format!(
            "SELECT a.id, a.event_date, a.description, t.name AS type_name, \
                    CASE WHEN p.id IS NULL THEN NULL \
                         ELSE p.first_name || ' ' || p.last_name END AS person_name \
             FROM anniversaries a \
             LEFT JOIN persons p ON p.id = a.person_id \
             LEFT JOIN anniversary_types t ON t.id = a.anniversary_type_id \
             ORDER BY {order}"
        );

        sqlx::query_as::<_, AnniversaryDetail>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list anniversaries", e)
            })
    }

    /// Fetch every typed anniversary for the agenda computation.
    pub async fn agenda_items(&self) -> AppResult<Vec<AgendaItem>> {
        let rows = sqlx::query_as::<_, AgendaRow>(
            "SELECT a.event_date, a.description, t.name AS type_name, \
                    p.first_name, p.last_name, p.alive \
             FROM anniversaries a \
             JOIN anniversary_types t ON t.id = a.anniversary_type_id \
             LEFT JOIN persons p ON p.id = a.person_id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load agenda items", e))?;

        Ok(rows.into_iter().map(AgendaItem::from).collect())
    }

    /// Find an anniversary by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Anniversary>> {
        sqlx::query_as::<_, Anniversary>("SELECT * FROM anniversaries WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find anniversary", e)
            })
    }

    /// Create a new anniversary.
    pub async fn create(&self, data: &CreateAnniversary) -> AppResult<Anniversary> {
        sqlx::query_as::<_, Anniversary>(
            "INSERT INTO anniversaries \
             (event_date, description, person_id, anniversary_type_id, created_by) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(data.event_date)
        .bind(&data.description)
        .bind(data.person_id)
        .bind(data.anniversary_type_id)
        .bind(data.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create anniversary", e))
    }

    /// Update an anniversary's fields. The creator is left untouched.
    pub async fn update(&self, id: i64, data: &UpdateAnniversary) -> AppResult<Anniversary> {
        sqlx::query_as::<_, Anniversary>(
            "UPDATE anniversaries SET event_date = $2, description = $3, person_id = $4, \
                                      anniversary_type_id = $5 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(data.event_date)
        .bind(&data.description)
        .bind(data.person_id)
        .bind(data.anniversary_type_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update anniversary", e))?
        .ok_or_else(|| AppError::not_found("Jubileum niet gevonden"))
    }

    /// Delete an anniversary by id.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM anniversaries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete anniversary", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Jubileum niet gevonden"));
        }
        Ok(())
    }

    /// Page through anniversaries joined with their owners (change-owner screen).
    pub async fn list_with_owner(
        &self,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<OwnedRecordSummary>> {
        sqlx::query_as::<_, OwnedRecordSummary>(
            "SELECT a.id, \
                    COALESCE(p.first_name || ' ' || p.last_name, a.description, 'Herdenking') \
                        AS label, \
                    u.id AS owner_id, u.name AS owner_name \
             FROM anniversaries a \
             JOIN users u ON u.id = a.created_by \
             LEFT JOIN persons p ON p.id = a.person_id \
             ORDER BY a.id LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list anniversary owners", e)
        })
    }

    /// Reassign an anniversary's owner (administrative operation).
    pub async fn update_owner(&self, id: i64, owner_id: i64) -> AppResult<()> {
        let result = sqlx::query("UPDATE anniversaries SET created_by = $2 WHERE id = $1")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update anniversary owner", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Jubileum niet gevonden"));
        }
        Ok(())
    }
}
