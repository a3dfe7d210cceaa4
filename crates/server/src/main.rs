//! Model registry HTTP service.
//!
//! Wires the document store into an axum application: every request gets the
//! store through shared state, slow requests are logged, and uncaught errors
//! leave as the JSON error envelope.

mod api;
mod error;
mod middleware;
mod router;
mod state;

use std::sync::Arc;

use tracing::info;

/// Install the subscriber, keeping third-party chatter below warn.
fn init_tracing() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
        .add_directive("hyper=warn".parse()?)
        .add_directive("h2=warn".parse()?)
        .add_directive("tower_http=warn".parse()?);
    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    modelops_core::config::load_dotenv();
    let config = modelops_core::Config::from_env();
    config.log_summary();

    let store = modelops_registry::JsonFileStore::new(&config.store.data_dir, &config.store.database)?;
    let state = state::AppState::new(Arc::new(store));
    let app = router::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
