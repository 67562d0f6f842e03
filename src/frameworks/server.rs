// Framework bootstrap for the query API runtime.

use crate::domain::SearchIndex;
use crate::frameworks::config::{Config, SearchConfig};
use crate::interface_adapters::clients::search::ElasticClient;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use std::io::Result;
use std::sync::Arc;

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

// Serve the API on an already-bound listener until a shutdown signal arrives.
pub async fn run(listener: tokio::net::TcpListener, state: Arc<AppState>) -> Result<()> {
    let address = listener.local_addr()?;
    let app = routes::app(state);

    tracing::info!(%address, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!(error = %e, "server error");
        })?;

    tracing::info!("server stopped");
    Ok(())
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let config = Config::from_env().map_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
        std::io::Error::other(e)
    })?;
    let state = build_state(&config).await;

    // Bind TCP listener with error handling
    let address = config.bind_addr;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, state).await
}

pub async fn build_state(config: &Config) -> Arc<AppState> {
    let mut state = AppState::default();

    if let Some(search) = config.search.as_ref().and_then(connect_search) {
        // Best-effort probe; the endpoints never depend on the search service.
        match search.ping().await {
            Ok(()) => tracing::info!("search service reachable"),
            Err(e) => tracing::warn!(error = %e, "search service unreachable"),
        }
        state = state.with_search(search);
    }

    Arc::new(state)
}

fn connect_search(config: &SearchConfig) -> Option<Arc<dyn SearchIndex>> {
    match ElasticClient::new(config.base_url.clone(), config.timeout) {
        Ok(client) => {
            tracing::debug!(
                search_url = %client.base_url(),
                search_timeout_ms = config.timeout.as_millis(),
                "search client configured"
            );
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to initialize search client");
            None
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install ctrl+c handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
