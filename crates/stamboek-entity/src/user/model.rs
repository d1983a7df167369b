//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::role::RoleName;

/// A registered user, resolved together with their role name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Unique email address; the login identity.
    pub email: String,
    /// Human-readable display name.
    pub name: String,
    /// External subject identifier from the identity provider.
    pub google_id: String,
    /// Assigned role; `None` only transiently before assignment.
    pub role: Option<RoleName>,
    /// Whether the account may log in.
    pub active: bool,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// Last successful login time.
    pub last_login: Option<DateTime<Utc>>,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// External subject identifier.
    pub google_id: String,
    /// Assigned role id.
    pub role_id: i64,
}

/// Data for updating an existing user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New email address.
    pub email: String,
    /// New display name.
    pub name: String,
    /// New external subject identifier.
    pub google_id: String,
    /// New role id.
    pub role_id: i64,
    /// New active flag.
    pub active: bool,
}
