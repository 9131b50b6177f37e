//! Command implementations

pub mod classify;
pub mod simple;

pub use classify::{ClassifyResult, classify};
pub use simple::{LineOutcome, handle_line, run_simple};
