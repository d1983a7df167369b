//! Family entity.

pub mod model;

pub use model::{CreateFamily, Family, UpdateFamily};
