//! User entity and role vocabulary.

pub mod model;
pub mod role;

pub use model::{CreateUser, UpdateUser, User};
pub use role::{Role, RoleName};
