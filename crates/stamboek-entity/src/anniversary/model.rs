//! Anniversary entity model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An anniversary or commemoration event.
///
/// Either linked to a person (birthday, wedding day) or free-standing with
/// only a description (a commemoration).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Anniversary {
    /// Unique anniversary identifier.
    pub id: i64,
    /// The (original) date of the event.
    pub event_date: NaiveDate,
    /// Free-form description, shown when no person is linked.
    pub description: Option<String>,
    /// The person this event belongs to, if any.
    pub person_id: Option<i64>,
    /// The anniversary type.
    pub anniversary_type_id: Option<i64>,
    /// The user who created this record.
    pub created_by: Option<i64>,
}

/// A type of anniversary (birthday, wedding day, ...).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnniversaryType {
    /// Unique type identifier.
    pub id: i64,
    /// Unique type name.
    pub name: String,
}

/// An anniversary joined with its type and person, for listings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnniversaryDetail {
    /// Unique anniversary identifier.
    pub id: i64,
    /// The (original) date of the event.
    pub event_date: NaiveDate,
    /// Free-form description.
    pub description: Option<String>,
    /// The anniversary type name.
    pub type_name: Option<String>,
    /// The linked person's full name, if any.
    pub person_name: Option<String>,
}

/// Data required to create an anniversary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAnniversary {
    /// The (original) date of the event.
    pub event_date: NaiveDate,
    /// Free-form description.
    pub description: Option<String>,
    /// The person this event belongs to.
    pub person_id: Option<i64>,
    /// The anniversary type.
    pub anniversary_type_id: Option<i64>,
    /// The creating user's id.
    pub created_by: i64,
}

/// Data for updating an anniversary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAnniversary {
    /// The (original) date of the event.
    pub event_date: NaiveDate,
    /// Free-form description.
    pub description: Option<String>,
    /// The person this event belongs to.
    pub person_id: Option<i64>,
    /// The anniversary type.
    pub anniversary_type_id: Option<i64>,
}
