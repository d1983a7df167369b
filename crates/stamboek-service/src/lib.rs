//! # stamboek-service
//!
//! Business services that sit between the repositories and the HTTP layer.

pub mod agenda;

pub use agenda::{AgendaService, UpcomingEvent};
