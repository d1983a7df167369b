//! # stamboek-api
//!
//! The Axum HTTP layer: application state, router, the session extractor
//! (authentication gate), the flash cookie helper, error-to-response
//! mapping, request logging, and all handlers.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod flash;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
