//! Shared types for the café ordering platform
//!
//! Common types used across the server and client crates: domain models,
//! the order status state machine, money arithmetic, error types and the
//! API response envelope.

pub mod error;
pub mod models;
pub mod money;
pub mod order;
pub mod order_number;
pub mod request;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode, FieldError};
pub use order::{ActorRole, OrderSnapshot, OrderStatus, PaymentMethod, PaymentStatus};
