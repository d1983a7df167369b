//! Family entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A family record with its address.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Family {
    /// Unique family identifier.
    pub id: i64,
    /// Family name.
    pub family_name: String,
    /// Street name.
    pub street: String,
    /// House number.
    pub house_number: String,
    /// House number suffix (e.g. "a", "bis").
    pub house_number_suffix: Option<String>,
    /// Postal code.
    pub postal_code: String,
    /// City.
    pub city: String,
    /// The user who created this record.
    pub created_by: Option<i64>,
}

/// Data required to create a family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFamily {
    /// Family name.
    pub family_name: String,
    /// Street name.
    pub street: String,
    /// House number.
    pub house_number: String,
    /// House number suffix.
    pub house_number_suffix: Option<String>,
    /// Postal code.
    pub postal_code: String,
    /// City.
    pub city: String,
    /// The creating user's id.
    pub created_by: i64,
}

/// Data for updating a family. The creator is immutable here; ownership
/// transfer is a separate administrative operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateFamily {
    /// Family name.
    pub family_name: String,
    /// Street name.
    pub street: String,
    /// House number.
    pub house_number: String,
    /// House number suffix.
    pub house_number_suffix: Option<String>,
    /// Postal code.
    pub postal_code: String,
    /// City.
    pub city: String,
}
