//! Menu Item Model
//!
//! Menu items are collaborator data as far as the order core is concerned:
//! orders reference them only at creation time, when the server snapshots
//! name and price. Later menu edits never change persisted orders.

use serde::{Deserialize, Serialize};

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuItem {
    pub id: i64,
    pub cafe_id: i64,
    pub name: String,
    pub price: f64,
    pub is_available: bool,
    pub category: Option<String>,
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub category: Option<String>,
}

/// Availability toggle payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemAvailabilityUpdate {
    pub is_available: bool,
}
