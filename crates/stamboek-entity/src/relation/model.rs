//! Relation entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A directed relation between two persons.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Relation {
    /// Unique relation identifier.
    pub id: i64,
    /// The first person.
    pub person1_id: i64,
    /// The second person.
    pub person2_id: i64,
    /// The relation type.
    pub relation_type_id: i64,
}

/// A type of relation (parent, partner, ...).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RelationType {
    /// Unique type identifier.
    pub id: i64,
    /// Relation name.
    pub name: String,
    /// Whether the relation reads the same in both directions.
    /// Stored as `is_symmetric` (SYMMETRIC is reserved in PostgreSQL).
    #[sqlx(rename = "is_symmetric")]
    pub symmetric: bool,
}

/// A relation joined with both persons and the type, for listings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RelationDetail {
    /// Unique relation identifier.
    pub id: i64,
    /// The first person's id.
    pub person1_id: i64,
    /// The first person's first name.
    pub person1_first_name: String,
    /// The first person's last name.
    pub person1_last_name: String,
    /// The second person's id.
    pub person2_id: i64,
    /// The second person's first name.
    pub person2_first_name: String,
    /// The second person's last name.
    pub person2_last_name: String,
    /// The relation type's id.
    pub relation_type_id: i64,
    /// The relation type's name.
    pub relation_type_name: String,
}

/// Data required to create a relation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRelation {
    /// The first person.
    pub person1_id: i64,
    /// The second person.
    pub person2_id: i64,
    /// The relation type.
    pub relation_type_id: i64,
}

/// Data for updating a relation.
pub type UpdateRelation = CreateRelation;
