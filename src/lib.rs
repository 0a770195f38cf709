//! Fruit Store Library
//!
//! An HTTP service that keeps an ordered list of named, priced fruits in
//! memory and lets clients list them or append new ones.

// Domain modules
pub mod fruits;
pub mod openapi;

// Infrastructure
pub mod config;
pub mod errors;
pub mod router;
