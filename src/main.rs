use clock::ClockEndpoint;
use endpoint::RegistryBuilder;
use log::*;
use service::{config::Config, logging::Logger, AppState};
use std::sync::Arc;
use web::init_router;

#[tokio::main]
async fn main() {
    let config = Config::new();
    Logger::init_logger(&config);

    // All endpoints must be registered here, before serving starts. The
    // builder is consumed into an immutable registry, so late registration
    // is not expressible.
    let registry = RegistryBuilder::new()
        .register("clock", Arc::new(ClockEndpoint::new(clock::Config::default())))
        .build();

    let app_state = AppState::new(config, registry);
    let address = app_state.config.server_address();
    let router = init_router(app_state);

    info!("Starting hub service on {address}");

    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {address}: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {e}");
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to install shutdown signal handler: {e}");
        return;
    }
    info!("Shutting down hub service");
}
