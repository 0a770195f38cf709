//! API description route
//!
//! Serves a static OpenAPI document so clients can discover the request and
//! response shapes of `/fruits` without reading the source.

use super::models::*;
use crate::errors::ApiError;
use crate::fruits::{models::FRUIT_ADDED_MESSAGE, state::SharedState};
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

/// Creates routes for the API description
pub fn routes() -> Router<SharedState> {
    Router::new().route(
        OPENAPI_PATH,
        get(openapi_json).fallback(|| async { ApiError::MethodNotAllowed { allow: "GET" } }),
    )
}

/// Endpoint: GET /openapi.json
async fn openapi_json() -> Json<Value> {
    Json(api_document())
}

/// Builds the OpenAPI document describing every route of the service.
pub fn api_document() -> Value {
    json!({
        "openapi": OPENAPI_VERSION,
        "info": {
            "title": API_TITLE,
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/fruits": {
                "get": {
                    "summary": "Get Fruits",
                    "operationId": "get_fruits_fruits_get",
                    "responses": {
                        "200": {
                            "description": "Successful Response",
                            "content": {
                                "application/json": {
                                    "schema": schema_ref("Fruits")
                                }
                            }
                        }
                    }
                },
                "post": {
                    "summary": "Add Fruit",
                    "operationId": "add_fruit_fruits_post",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": schema_ref("Fruit")
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "Successful Response",
                            "content": {
                                "application/json": {
                                    "schema": schema_ref("FruitAdded")
                                }
                            }
                        },
                        "422": {
                            "description": "Validation Error",
                            "content": {
                                "application/json": {
                                    "schema": schema_ref("HTTPValidationError")
                                }
                            }
                        }
                    }
                }
            }
        },
        "components": {
            "schemas": component_schemas()
        }
    })
}

fn component_schemas() -> Value {
    json!({
        "Fruit": {
            "title": "Fruit",
            "type": "object",
            "required": ["name", "price"],
            "properties": {
                "name": { "title": "Name", "type": "string" },
                "price": { "title": "Price", "type": "integer" }
            }
        },
        "Fruits": {
            "title": "Fruits",
            "type": "object",
            "required": ["fruits"],
            "properties": {
                "fruits": {
                    "title": "Fruits",
                    "type": "array",
                    "items": schema_ref("Fruit")
                }
            }
        },
        "FruitAdded": {
            "title": "FruitAdded",
            "type": "object",
            "required": ["message"],
            "properties": {
                "message": {
                    "title": "Message",
                    "type": "string",
                    "example": FRUIT_ADDED_MESSAGE
                }
            }
        },
        "HTTPValidationError": {
            "title": "HTTPValidationError",
            "type": "object",
            "properties": {
                "detail": {
                    "title": "Detail",
                    "type": "array",
                    "items": schema_ref("ValidationError")
                }
            }
        },
        "ValidationError": {
            "title": "ValidationError",
            "type": "object",
            "required": ["loc", "msg", "type"],
            "properties": {
                "loc": {
                    "title": "Location",
                    "type": "array",
                    "items": { "anyOf": [{ "type": "string" }, { "type": "integer" }] }
                },
                "msg": { "title": "Message", "type": "string" },
                "type": { "title": "Error Type", "type": "string" },
                "input": { "title": "Input" },
                "ctx": { "title": "Context", "type": "object" }
            }
        }
    })
}

fn schema_ref(name: &str) -> Value {
    json!({ "$ref": format!("#/components/schemas/{name}") })
}
