// Library crate for the Mnemonica cut service
// This file exposes the public API for the binary and integration tests

pub mod cards;
pub mod config;
pub mod cut;
pub mod cutcard;
pub mod extract;
pub mod shared;
pub mod stack;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// Re-export commonly used types for easier access in tests
pub use cards::{Card, Rank, Suit};
pub use config::ServerConfig;
pub use cut::{compute, CutOutcome};
pub use cutcard::{CutCardRequest, CutCardResponse};
pub use extract::{ExtractError, Extraction, Extractor, ExtractorOptions};
pub use shared::{AppError, AppState};
pub use stack::{Position, Stack};

/// Builds the HTTP router around the given state
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/stack", get(cutcard::list_stack))
        .route("/cutcard", post(cutcard::cut_card))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
