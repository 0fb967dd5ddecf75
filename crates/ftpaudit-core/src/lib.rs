//! ftpaudit Core - Foundation types and error handling
//!
//! This crate provides the core abstractions used throughout ftpaudit:
//! - `Finding`: the result of checking one recommended setting
//! - `Severity`: how serious a deviation from the baseline is
//! - `Error`/`Result`: error handling

pub mod error;
pub mod finding;
pub mod severity;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use finding::Finding;
pub use severity::Severity;
