use anyhow::Context;
use fruit_store::config::AppConfig;
use fruit_store::fruits::{AppState, SharedState};
use fruit_store::router::create_app_router;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "fruit_store=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    // Initialize application state
    let config = AppConfig::default();
    let addr = config.socket_addr();
    let state = AppState::shared(config);

    // Build application router with all routes and middleware
    let app = create_app_router(state.clone())?;

    // Start the server
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown(state))
        .await
        .context("server error")?;

    Ok(())
}

/// Installs the global subscriber; `RUST_LOG` overrides the default filter.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Resolves on Ctrl-C. The store is discarded with the process.
async fn shutdown(state: SharedState) {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }

    let discarded = state.fruits.len().await;
    tracing::warn!(discarded, "CTRL+C received, shutting down");
}

#[cfg(test)]
mod tests {
    use fruit_store::fruits::helpers::parse_new_fruit;
    use fruit_store::fruits::{AppState, Fruit};

    #[tokio::test]
    async fn test_parsed_fruit_lands_in_state() {
        let state = AppState::default();

        let fruit = parse_new_fruit(br#"{"name":"Mango","price":"3"}"#).expect("valid body");
        state.fruits.add(fruit).await;

        assert_eq!(state.fruits.list().await, vec![Fruit::new("Mango", 3)]);
    }

    #[test]
    fn test_default_filter_parses() {
        let filter = tracing_subscriber::EnvFilter::try_new(super::DEFAULT_LOG_FILTER);
        assert!(filter.is_ok());
    }
}
