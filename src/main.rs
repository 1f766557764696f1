use std::sync::Arc;

use axum::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use axum_todo_pro_api::{config::Config, route::create_router, AppState};

// Entry point of the application
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Every user and to-do lives here until the process exits
    let app_state = Arc::new(AppState::new());
    let app = create_router(app_state, &config);

    let addr = config.socket_addr();
    tracing::info!(%addr, "🚀 Server started successfully");

    Server::try_bind(&addr)?
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
