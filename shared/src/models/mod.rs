//! Persisted domain models

pub mod cafe;
pub mod menu_item;
pub mod table;

pub use cafe::{ApprovalState, Cafe, CafeActiveUpdate, CafeApprovalUpdate, CafeCreate};
pub use menu_item::{MenuItem, MenuItemAvailabilityUpdate, MenuItemCreate};
pub use table::{BulkTableCreate, CafeTable, TableStatus, TableStatusUpdate};
