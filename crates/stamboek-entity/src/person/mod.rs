//! Person entity.

pub mod model;

pub use model::{CreatePerson, Person, PersonSummary, UpdatePerson};
