//! HTTP API
//!
//! One module per resource; each exposes a `router()` merged in
//! [`crate::core::server::build_app`]. Handlers stay thin: parse, call the
//! repository or service, wrap in [`shared::ApiResponse`].

pub mod cafes;
pub mod health;
pub mod menu_items;
pub mod orders;
pub mod tables;
