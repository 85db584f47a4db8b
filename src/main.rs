use mnemonica::{config::DEFAULT_LOG_FILTER, AppState, ServerConfig};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = ServerConfig::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    info!(
        relaxed_linker = config.extractor.relaxed_linker,
        "Starting Mnemonica cut server"
    );

    let app = mnemonica::app(AppState::mnemonica(config.extractor));

    let address = config.bind_address();
    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(address = %address, error = %e, "Failed to bind");
            std::process::exit(1);
        }
    };

    info!("Server running on http://{}", address);
    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server stopped");
        std::process::exit(1);
    }
}
