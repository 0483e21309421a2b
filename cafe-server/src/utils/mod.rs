//! Utility module
//!
//! - [`AppError`] / [`AppResult`] - re-exported from `shared::error`
//! - Logging setup
//! - Input validation helpers

pub mod logger;
pub mod validation;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode, FieldError};
