//! Cafe Client - HTTP client and polling synchronizer for the cafe server
//!
//! Viewers never receive pushes; they reconcile by polling and replacing
//! local state wholesale from each full snapshot. Mutation responses are
//! applied immediately as the new canonical state; the next poll may
//! overwrite them if a concurrent writer won.

pub mod config;
pub mod error;
pub mod http;
pub mod poll;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use poll::{CafeConsole, OrderTracker, ViewState};

// Re-export shared types for convenience
pub use shared::order::{OrderSnapshot, OrderStatus, PaymentStatus};
