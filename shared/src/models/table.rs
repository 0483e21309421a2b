//! Cafe Table Model

use serde::{Deserialize, Serialize};

/// Advisory seating status of a table
///
/// Staff-mutated; not enforced against order state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum TableStatus {
    #[default]
    Available,
    Occupied,
    Reserved,
    Maintenance,
}

impl TableStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Reserved => "reserved",
            Self::Maintenance => "maintenance",
        }
    }
}

/// Physical table at a cafe, bound to a stable QR ordering URL
///
/// `qr_payload` is generated once at creation and is immutable;
/// regeneration re-renders the image but preserves the table_number
/// binding. `qr_image` is nullable: image rendering is delegated to an
/// external collaborator and may fail without failing table creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct CafeTable {
    pub id: i64,
    pub cafe_id: i64,
    /// Unique within the cafe
    pub table_number: i64,
    pub capacity: i32,
    pub location: String,
    pub status: TableStatus,
    pub qr_payload: String,
    pub qr_image: Option<String>,
}

/// Bulk table creation payload
///
/// Creates `count` tables numbered start_number..start_number+count-1,
/// all-or-nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkTableCreate {
    pub count: u32,
    pub start_number: i64,
    pub capacity: i32,
    pub location: String,
}

/// Table status update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableStatusUpdate {
    pub status: TableStatus,
}
