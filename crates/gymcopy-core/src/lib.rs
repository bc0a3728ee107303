pub mod audience;
pub mod config;
pub mod error;
pub mod hero;
pub mod template;

// Re-export common error type
pub use error::{GymCopyError, Result};
