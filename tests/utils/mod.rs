pub mod assertions;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use assertions::CutAssertion;
#[allow(unused_imports)]
pub use setup::{TestResponse, TestSetup, TestSetupBuilder};
