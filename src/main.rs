mod config;
mod error;
mod routes;
mod seed;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server config");

    let directory = seed::load_directory(config.seed_path.as_deref()).expect("activity catalogue load failed");
    tracing::info!(activities = directory.len(), "activity directory seeded");

    let state = state::AppState::new(directory);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .expect("failed to bind");

    tracing::info!(addr = %config.bind_addr(), "clubsignup listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server failed");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
