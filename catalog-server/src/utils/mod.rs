//! Utility modules: error handling, logging, validation

pub mod error;
pub mod logger;
pub mod validation;

pub use error::{AppError, AppResult, ok, ok_with_message};
