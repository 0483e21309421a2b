//! Cafe Model

use serde::{Deserialize, Serialize};

/// Administrator approval state of a cafe
///
/// Explicit tagged variant instead of a nullable boolean so the pending
/// state is a first-class, exhaustively-matched case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum ApprovalState {
    /// Awaiting administrator review
    #[default]
    Pending,
    /// Cleared to accept orders
    Approved,
    /// Registration rejected
    Rejected,
}

impl ApprovalState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

/// Cafe entity
///
/// Created on registration in `Pending` approval; approval and activation
/// are mutated only by an administrator. Never hard-deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Cafe {
    pub id: i64,
    pub name: String,
    pub owner_name: String,
    /// Tax rate in percent (8.5 means 8.5%)
    pub tax_rate: f64,
    /// Service charge in percent
    pub service_charge: f64,
    pub currency: String,
    pub approval: ApprovalState,
    pub is_active: bool,
}

impl Cafe {
    /// True if the cafe may accept new orders
    pub fn accepts_orders(&self) -> bool {
        self.approval == ApprovalState::Approved && self.is_active
    }
}

/// Create cafe payload (registration)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CafeCreate {
    pub name: String,
    pub owner_name: String,
    pub tax_rate: f64,
    pub service_charge: f64,
    #[serde(default)]
    pub currency: Option<String>,
}

/// Administrator approval update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CafeApprovalUpdate {
    pub approval: ApprovalState,
}

/// Soft-activation update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CafeActiveUpdate {
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_orders_requires_approval_and_active() {
        let mut cafe = Cafe {
            id: 1,
            name: "Test Cafe".to_string(),
            owner_name: "Owner".to_string(),
            tax_rate: 8.5,
            service_charge: 10.0,
            currency: "EUR".to_string(),
            approval: ApprovalState::Pending,
            is_active: true,
        };
        assert!(!cafe.accepts_orders());

        cafe.approval = ApprovalState::Approved;
        assert!(cafe.accepts_orders());

        cafe.is_active = false;
        assert!(!cafe.accepts_orders());

        cafe.is_active = true;
        cafe.approval = ApprovalState::Rejected;
        assert!(!cafe.accepts_orders());
    }

    #[test]
    fn test_approval_serde_format() {
        let json = serde_json::to_string(&ApprovalState::Pending).unwrap();
        assert_eq!(json, "\"PENDING\"");
        let back: ApprovalState = serde_json::from_str("\"APPROVED\"").unwrap();
        assert_eq!(back, ApprovalState::Approved);
    }
}
