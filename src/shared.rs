use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::extract::{Extractor, ExtractorOptions};
use crate::stack::Stack;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub stack: &'static Stack,
    pub extractor: Arc<Extractor>,
}

impl AppState {
    pub fn new(stack: &'static Stack, extractor: Arc<Extractor>) -> Self {
        Self { stack, extractor }
    }

    pub fn mnemonica(options: ExtractorOptions) -> Self {
        Self::new(Stack::mnemonica(), Arc::new(Extractor::new(options)))
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// A request body axum refused to decode, with the status it chose.
    #[error("Invalid body ({0}): {1}")]
    InvalidBody(StatusCode, String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InvalidBody(status, msg) => (status, msg),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
pub mod test_utils {
    use super::*;

    /// Builder for creating AppState with overrides for testing
    pub struct AppStateBuilder {
        stack: Option<&'static Stack>,
        options: ExtractorOptions,
    }

    impl AppStateBuilder {
        pub fn new() -> Self {
            Self {
                stack: None,
                options: ExtractorOptions::default(),
            }
        }

        /// Leaks the stack; fine for the lifetime of a test binary.
        pub fn with_stack(mut self, stack: Stack) -> Self {
            self.stack = Some(Box::leak(Box::new(stack)));
            self
        }

        pub fn with_relaxed_linker(mut self) -> Self {
            self.options.relaxed_linker = true;
            self
        }

        pub fn build(self) -> AppState {
            AppState::new(
                self.stack.unwrap_or_else(Stack::mnemonica),
                Arc::new(Extractor::new(self.options)),
            )
        }
    }

    impl Default for AppStateBuilder {
        fn default() -> Self {
            Self::new()
        }
    }
}
