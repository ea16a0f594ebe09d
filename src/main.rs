use project_intake::{AppState, config::Config, create_app, init_tracing};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    init_tracing(&config);

    let addr: SocketAddr = config.server_address().parse()?;
    let api_base_url = config.api_base_url.clone();
    let state = Arc::new(AppState::new(config)?);
    let app = create_app(state);

    tracing::info!(%addr, %api_base_url, "Project intake server listening");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
