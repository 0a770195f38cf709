//! Routing module for the fruit store

use crate::config::ConfigError;
use crate::errors::not_found;
use crate::fruits::state::SharedState;
use axum::{body::Body, extract::Request, middleware::Next, Router};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates and configures the application router with all routes and middleware
///
/// Fails only when a configured CORS origin is not a valid header value.
pub fn create_app_router(state: SharedState) -> Result<Router, ConfigError> {
    // Middleware: Log requests
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        tracing::debug!(method = %req.method(), uri = %req.uri(), "request");
        let res = next.run(req).await;
        // Client errors are reported where they are raised.
        if res.status().is_server_error() {
            tracing::warn!(status = %res.status(), "request failed");
        }
        res
    });

    // Middleware: CORS (listed dev origins, credentials allowed).
    // Wildcards cannot be combined with credentials, so methods and headers
    // are mirrored from the request instead.
    let cors_layer = CorsLayer::new()
        .allow_origin(AllowOrigin::list(state.config.origin_headers()?))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Routes
    Ok(Router::new()
        .merge(crate::fruits::routes())
        .merge(crate::openapi::routes())
        .fallback(not_found)
        .layer(log_layer)
        .layer(trace_layer)
        .layer(cors_layer)
        .with_state(state))
}
