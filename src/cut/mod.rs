mod calculator;

pub use calculator::{compute, CutError, CutOutcome};
