//! User repository implementation.
//!
//! Users are always resolved together with their role name (left join on
//! `roles`), so callers never see a bare `role_id`.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use stamboek_core::error::{AppError, ErrorKind};
use stamboek_core::result::AppResult;
use stamboek_entity::user::model::{CreateUser, UpdateUser};
use stamboek_entity::user::{RoleName, User};

const SELECT_USER: &str = "SELECT u.id, u.email, u.name, u.google_id, u.active, \
                                  u.created_at, u.last_login, r.name AS role_name \
                           FROM users u LEFT JOIN roles r ON r.id = u.role_id";

/// A joined user row before role-name parsing.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    email: String,
    name: String,
    google_id: String,
    active: bool,
    created_at: DateTime<Utc>,
    last_login: Option<DateTime<Utc>>,
    role_name: Option<String>,
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role = row
            .role_name
            .as_deref()
            .map(str::parse::<RoleName>)
            .transpose()
            .map_err(|e| {
                AppError::internal(format!("User {} carries an unknown role: {e}", row.id))
            })?;

        Ok(User {
            id: row.id,
            email: row.email,
            name: row.name,
            google_id: row.google_id,
            role,
            active: row.active,
            created_at: row.created_at,
            last_login: row.last_login,
        })
    }
}

/// Repository for user CRUD and login bookkeeping.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} WHERE u.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))?
            .map(User::try_from)
            .transpose()
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} WHERE LOWER(u.email) = LOWER($1)"))
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })?
            .map(User::try_from)
            .transpose()
    }

    /// List all users.
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} ORDER BY u.name"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))?
            .into_iter()
            .map(User::try_from)
            .collect()
    }

    /// Create a new user.
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO users (email, name, google_id, role_id) \
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&data.email)
        .bind(&data.name)
        .bind(&data.google_id)
        .bind(data.role_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
                AppError::conflict(format!("Email '{}' is al in gebruik", data.email))
            }
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("users_google_id_key") =>
            {
                AppError::conflict("Google-ID is al in gebruik".to_string())
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::internal("Created user disappeared"))
    }

    /// Update a user's profile, role, and active flag.
    pub async fn update(&self, id: i64, data: &UpdateUser) -> AppResult<User> {
        let updated = sqlx::query(
            "UPDATE users SET email = $2, name = $3, google_id = $4, role_id = $5, active = $6 \
             WHERE id = $1",
        )
        .bind(id)
        .bind(&data.email)
        .bind(&data.name)
        .bind(&data.google_id)
        .bind(data.role_id)
        .bind(data.active)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update user", e))?;

        if updated.rows_affected() == 0 {
            return Err(AppError::not_found("Gebruiker niet gevonden"));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Gebruiker niet gevonden"))
    }

    /// Record a successful login: refresh last_login and the stored
    /// external subject identifier.
    pub async fn record_login(&self, id: i64, google_id: &str) -> AppResult<User> {
        let updated = sqlx::query("UPDATE users SET last_login = NOW(), google_id = $2 WHERE id = $1")
            .bind(id)
            .bind(google_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record login", e))?;

        if updated.rows_affected() == 0 {
            return Err(AppError::not_found("Gebruiker niet gevonden"));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Gebruiker niet gevonden"))
    }

    /// Delete a user by id.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete user", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Gebruiker niet gevonden"));
        }
        Ok(())
    }
}
