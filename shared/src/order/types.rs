//! Order request DTOs

use super::status::{ActorRole, OrderStatus, PaymentMethod, PaymentStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Customer contact fields
///
/// Unauthenticated, client-supplied, unverified. Validated server-side:
/// name ≥ 2 chars, phone 10-15 digits after stripping separators, email
/// well-formed if present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// A single requested line item
///
/// Carries only the menu item id and quantity; prices are looked up
/// server-side and client-supplied prices are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemInput {
    pub menu_item_id: i64,
    pub quantity: i32,
    #[serde(default)]
    pub special_instructions: Option<String>,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub cafe_id: i64,
    #[serde(default)]
    pub table_number: Option<i64>,
    pub customer: CustomerInfo,
    pub items: Vec<OrderItemInput>,
    pub payment_method: PaymentMethod,
}

/// Status transition request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionRequest {
    pub status: OrderStatus,
    #[serde(default)]
    pub actor_role: ActorRole,
}

/// Payment status update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentStatusUpdate {
    pub payment_status: PaymentStatus,
}

/// Staff/admin list filters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderFilters {
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub from: Option<DateTime<Utc>>,
    #[serde(default)]
    pub to: Option<DateTime<Utc>>,
}
