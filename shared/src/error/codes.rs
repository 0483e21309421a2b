//! Standardized error codes

use super::category::ErrorCategory;
use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Error raised when converting an unknown numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown error code: {0}")]
pub struct InvalidErrorCode(pub u16);

/// Standardized error codes for the platform
///
/// Codes are grouped by domain; see the module docs for the ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========== General (0xxx) ==========
    /// Malformed or otherwise invalid request
    InvalidRequest,
    /// Input failed field validation
    ValidationFailed,
    /// Resource not found
    NotFound,
    /// Resource already exists / duplicate write
    AlreadyExists,

    // ========== Cafe (3xxx) ==========
    /// Cafe has not been approved by an administrator
    CafeNotApproved,
    /// Cafe has been deactivated
    CafeInactive,

    // ========== Order (4xxx) ==========
    /// Requested status move is not in the transition table
    InvalidTransition,
    /// Lost-update race: another writer changed the order status first
    TransitionConflict,
    /// Order must contain at least one item
    EmptyOrder,
    /// Refund requires the order to be paid
    RefundRequiresPayment,
    /// Transition reserved for administrators
    AdminOnlyTransition,

    // ========== Menu (6xxx) ==========
    /// Referenced menu item is not available for ordering
    MenuItemUnavailable,
    /// Referenced menu item belongs to a different cafe
    MenuItemWrongCafe,

    // ========== Table (7xxx) ==========
    /// A table with this number already exists for the cafe
    TableNumberTaken,

    // ========== System (9xxx) ==========
    /// Internal server error
    InternalError,
    /// Database error
    DatabaseError,
}

impl ErrorCode {
    /// Numeric code carried in API responses
    pub fn code(&self) -> u16 {
        match self {
            Self::InvalidRequest => 1,
            Self::ValidationFailed => 2,
            Self::NotFound => 3,
            Self::AlreadyExists => 4,
            Self::CafeNotApproved => 3001,
            Self::CafeInactive => 3002,
            Self::InvalidTransition => 4001,
            Self::TransitionConflict => 4002,
            Self::EmptyOrder => 4003,
            Self::RefundRequiresPayment => 4004,
            Self::AdminOnlyTransition => 4005,
            Self::MenuItemUnavailable => 6001,
            Self::MenuItemWrongCafe => 6002,
            Self::TableNumberTaken => 7001,
            Self::InternalError => 9001,
            Self::DatabaseError => 9002,
        }
    }

    /// Default human-readable message for this code
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "Invalid request",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::CafeNotApproved => "Cafe is pending approval",
            Self::CafeInactive => "Cafe is not active",
            Self::InvalidTransition => "Status transition not allowed",
            Self::TransitionConflict => "Order was modified by another writer",
            Self::EmptyOrder => "Order must contain at least one item",
            Self::RefundRequiresPayment => "Only paid orders can be refunded",
            Self::AdminOnlyTransition => "Transition requires administrator role",
            Self::MenuItemUnavailable => "Menu item is not available",
            Self::MenuItemWrongCafe => "Menu item belongs to a different cafe",
            Self::TableNumberTaken => "Table number already exists for this cafe",
            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
        }
    }

    /// HTTP status code this error maps to
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::ValidationFailed => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::AlreadyExists => StatusCode::CONFLICT,
            Self::CafeNotApproved => StatusCode::UNPROCESSABLE_ENTITY,
            Self::CafeInactive => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InvalidTransition => StatusCode::UNPROCESSABLE_ENTITY,
            Self::TransitionConflict => StatusCode::CONFLICT,
            Self::EmptyOrder => StatusCode::BAD_REQUEST,
            Self::RefundRequiresPayment => StatusCode::UNPROCESSABLE_ENTITY,
            Self::AdminOnlyTransition => StatusCode::FORBIDDEN,
            Self::MenuItemUnavailable => StatusCode::UNPROCESSABLE_ENTITY,
            Self::MenuItemWrongCafe => StatusCode::UNPROCESSABLE_ENTITY,
            Self::TableNumberTaken => StatusCode::CONFLICT,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Category of this error
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            1 => Self::InvalidRequest,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            3001 => Self::CafeNotApproved,
            3002 => Self::CafeInactive,
            4001 => Self::InvalidTransition,
            4002 => Self::TransitionConflict,
            4003 => Self::EmptyOrder,
            4004 => Self::RefundRequiresPayment,
            4005 => Self::AdminOnlyTransition,
            6001 => Self::MenuItemUnavailable,
            6002 => Self::MenuItemWrongCafe,
            7001 => Self::TableNumberTaken,
            9001 => Self::InternalError,
            9002 => Self::DatabaseError,
            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}
