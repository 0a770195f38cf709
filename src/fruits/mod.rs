//! Fruit Domain Module
//!
//! This module contains everything behind `/fruits`:
//! - Domain models (Fruit, responses, validation errors)
//! - Body parsing and type coercion
//! - The in-memory store and application state
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;
pub mod store;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::Fruit;
pub use state::{AppState, SharedState};
pub use store::FruitStore;
