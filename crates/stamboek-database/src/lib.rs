//! # stamboek-database
//!
//! PostgreSQL connection management, the migration runner, and one
//! repository per entity. Repositories use runtime-checked queries and map
//! database failures into [`stamboek_core::AppError`].

pub mod connection;
pub mod migration;
pub mod repositories;
