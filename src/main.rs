//! Server entry point: env config, tracing, store bootstrap, serve.

use restdirect::{app, connect, ensure_schema, AppState, ResourceRegistry};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("restdirect=info,tower_http=info")),
        )
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://contacts.db".into());
    let pool = connect(&database_url).await?;
    ensure_schema(&pool).await?;

    let registry = ResourceRegistry::with_defaults();
    for name in registry.names() {
        tracing::info!(resource = name, "registered");
    }
    let state = AppState {
        pool,
        registry: Arc::new(registry),
    };

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".into());
    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
