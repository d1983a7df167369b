//! Relation entity and its type vocabulary.

pub mod model;

pub use model::{CreateRelation, Relation, RelationDetail, RelationType, UpdateRelation};
