//! Server binary: reads settings, prepares the database, and serves the API.

use pizza_api::{app, apply_migrations, seed_sample_data, store, AppState, Settings};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pizza_api=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let pool = store::connect(&settings).await?;
    apply_migrations(&pool).await?;
    if settings.seed_database {
        seed_sample_data(&pool).await?;
    }

    let router = app(AppState { pool }, settings.body_limit);
    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
