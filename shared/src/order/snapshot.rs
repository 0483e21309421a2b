//! Canonical order snapshot
//!
//! Every read and every mutation returns the complete current
//! representation of the order. Consumers replace local state wholesale
//! from a snapshot; they never merge or patch.

use super::status::{OrderStatus, PaymentMethod, PaymentStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable line item snapshot
///
/// Name and unit price are copied from the menu item at order creation;
/// the order total never changes retroactively if the menu changes later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderItemSnapshot {
    pub id: i64,
    pub menu_item_name: String,
    pub unit_price: f64,
    pub quantity: i32,
    /// unit_price × quantity, rounded to 2 dp
    pub total_price: f64,
    pub special_instructions: Option<String>,
}

/// Complete current representation of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSnapshot {
    pub id: i64,
    /// Human-shareable capability token for anonymous tracking
    pub order_number: String,
    pub cafe_id: i64,
    /// Display/association hint only; None for pickup orders
    pub table_number: Option<i64>,
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub customer_email: Option<String>,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub subtotal: f64,
    pub tax: f64,
    pub service_charge: f64,
    pub total_amount: f64,
    pub items: Vec<OrderItemSnapshot>,
    pub created_at: DateTime<Utc>,
    /// Bumped on every actual state change, unchanged on no-op transitions
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_json_roundtrip() {
        let snapshot = OrderSnapshot {
            id: 7,
            order_number: "ORD-9M4KTE2XQP".to_string(),
            cafe_id: 1,
            table_number: Some(4),
            customer_name: "Ana".to_string(),
            customer_phone: Some("9876543210".to_string()),
            customer_email: None,
            status: OrderStatus::Pending,
            payment_method: PaymentMethod::Cash,
            payment_status: PaymentStatus::Unpaid,
            subtotal: 100.0,
            tax: 8.5,
            service_charge: 10.0,
            total_amount: 118.5,
            items: vec![OrderItemSnapshot {
                id: 1,
                menu_item_name: "Espresso".to_string(),
                unit_price: 2.5,
                quantity: 2,
                total_price: 5.0,
                special_instructions: None,
            }],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: OrderSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
