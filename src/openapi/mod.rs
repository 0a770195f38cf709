//! OpenAPI Module
//!
//! Publishes a machine-readable description of the HTTP API:
//! - Document constants (path, revision, title)
//! - The `/openapi.json` route and document builder

pub mod handlers;
pub mod models;

pub use handlers::{api_document, routes};
