//! REST API handlers for the fruit list
//!
//! `GET /fruits` returns the whole list, `POST /fruits` validates the body and
//! appends one fruit.

use super::{helpers::parse_new_fruit, models::*, state::SharedState};
use crate::errors::ApiError;
use axum::{body::Bytes, extract::State, routing::get, Json, Router};

/// Creates routes for fruit operations
pub fn routes() -> Router<SharedState> {
    Router::new().route(
        "/fruits",
        get(list_fruits)
            .post(add_fruit)
            .fallback(|| async { ApiError::MethodNotAllowed { allow: "GET, POST" } }),
    )
}

/// Endpoint: GET /fruits
/// Returns every fruit added since startup, oldest first.
async fn list_fruits(State(state): State<SharedState>) -> Json<Fruits> {
    Json(Fruits {
        fruits: state.fruits.list().await,
    })
}

/// Endpoint: POST /fruits
/// Appends one fruit; malformed bodies are rejected before the store is touched.
async fn add_fruit(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<FruitAdded>, ApiError> {
    let fruit = parse_new_fruit(&body).map_err(ApiError::Validation)?;

    tracing::debug!(name = %fruit.name, price = fruit.price, "adding fruit");
    let count = state.fruits.add(fruit).await;
    tracing::info!(count, "fruit added");

    Ok(Json(FruitAdded::default()))
}
