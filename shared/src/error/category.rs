//! Error categories

use serde::{Deserialize, Serialize};

/// Classification of errors by domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCategory {
    /// General request/validation errors (0xxx)
    General,
    /// Cafe lifecycle errors (3xxx)
    Cafe,
    /// Order lifecycle errors (4xxx)
    Order,
    /// Menu item errors (6xxx)
    Menu,
    /// Table registry errors (7xxx)
    Table,
    /// System errors: database, internal (9xxx)
    System,
}

impl ErrorCategory {
    /// Derive the category from a numeric error code
    pub fn from_code(code: u16) -> Self {
        match code {
            3000..=3999 => Self::Cafe,
            4000..=4999 => Self::Order,
            6000..=6999 => Self::Menu,
            7000..=7999 => Self::Table,
            9000..=9999 => Self::System,
            _ => Self::General,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code_ranges() {
        assert_eq!(ErrorCategory::from_code(2), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::Cafe);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Order);
        assert_eq!(ErrorCategory::from_code(6001), ErrorCategory::Menu);
        assert_eq!(ErrorCategory::from_code(7001), ErrorCategory::Table);
        assert_eq!(ErrorCategory::from_code(9002), ErrorCategory::System);
    }
}
