// Public API - what other modules can use
pub use handlers::{cut_card, list_stack};
pub use service::{CutCardError, CutCardService};
pub use types::{AfterCut, CutCardRequest, CutCardResponse, CutSummary, StackEntry};

// Internal modules
mod handlers;
mod service;
mod types;
