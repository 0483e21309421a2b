//! Order domain types
//!
//! The order status state machine, payment enums, the canonical order
//! snapshot returned by every read and mutation, and the request DTOs.

pub mod snapshot;
pub mod status;
pub mod types;

pub use snapshot::{OrderItemSnapshot, OrderSnapshot};
pub use status::{ActorRole, OrderStatus, PaymentMethod, PaymentStatus};
pub use types::{
    CreateOrderRequest, CustomerInfo, OrderFilters, OrderItemInput, PaymentStatusUpdate,
    TransitionRequest,
};
