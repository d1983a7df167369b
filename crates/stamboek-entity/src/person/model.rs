//! Person entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A person, optionally belonging to a family.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Person {
    /// Unique person identifier.
    pub id: i64,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// The family this person belongs to.
    pub family_id: Option<i64>,
    /// Whether the person is alive. Affects birthday wording on the agenda.
    pub alive: bool,
    /// The user who created this record.
    pub created_by: Option<i64>,
}

impl Person {
    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A person joined with their family name, for listings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PersonSummary {
    /// Unique person identifier.
    pub id: i64,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// The family's name, if the person belongs to one.
    pub family_name: Option<String>,
    /// Whether the person is alive.
    pub alive: bool,
}

/// Data required to create a person.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePerson {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// The family this person belongs to.
    pub family_id: Option<i64>,
    /// Whether the person is alive.
    pub alive: bool,
    /// The creating user's id.
    pub created_by: i64,
}

/// Data for updating a person.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePerson {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// The family this person belongs to.
    pub family_id: Option<i64>,
    /// Whether the person is alive.
    pub alive: bool,
}
