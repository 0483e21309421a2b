//! Service layer
//!
//! Business rules live here, between the HTTP handlers and the
//! repositories.

pub mod order_service;
pub mod qr;

pub use qr::QrService;
