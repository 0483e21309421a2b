//! Input validation helpers
//!
//! Customer fields arrive unauthenticated and unverified; everything is
//! validated here before any persistence. Failures are collected as a
//! field-level list so a form can highlight each offending field.

use shared::FieldError;
use shared::order::{CustomerInfo, OrderItemInput};
use validator::ValidateEmail;

/// Customer name: at least 2 characters after trimming
pub const MIN_NAME_LEN: usize = 2;
/// Entity and customer names
pub const MAX_NAME_LEN: usize = 100;
/// Notes and special instructions
pub const MAX_NOTE_LEN: usize = 500;
/// Maximum quantity per line item
pub const MAX_QUANTITY: i32 = 999;

/// Strip phone separators and validate the remaining digits
///
/// Accepted shape after stripping `[\s\-()+]`: 10-15 digits, first digit
/// 1-9. Returns the normalized digit string.
pub fn normalize_phone(raw: &str) -> Option<String> {
    let digits: String = raw
        .chars()
        .filter(|c| !matches!(c, ' ' | '\t' | '-' | '(' | ')' | '+'))
        .collect();

    let len = digits.len();
    if !(10..=15).contains(&len) {
        return None;
    }
    let mut chars = digits.chars();
    let first = chars.next()?;
    if !('1'..='9').contains(&first) {
        return None;
    }
    if !chars.all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(digits)
}

/// Validate customer fields, returning every failure
pub fn validate_customer(customer: &CustomerInfo) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let name = customer.name.trim();
    if name.len() < MIN_NAME_LEN {
        errors.push(FieldError::new(
            "customer.name",
            format!("must be at least {MIN_NAME_LEN} characters"),
        ));
    } else if name.len() > MAX_NAME_LEN {
        errors.push(FieldError::new(
            "customer.name",
            format!("is too long (max {MAX_NAME_LEN} characters)"),
        ));
    }

    if let Some(phone) = &customer.phone
        && normalize_phone(phone).is_none()
    {
        errors.push(FieldError::new(
            "customer.phone",
            "must be 10-15 digits, not starting with 0",
        ));
    }

    if let Some(email) = &customer.email
        && !email.validate_email()
    {
        errors.push(FieldError::new(
            "customer.email",
            "must be a valid email address",
        ));
    }

    errors
}

/// Validate the requested line items (shape only; menu lookup happens in
/// the order service)
pub fn validate_items(items: &[OrderItemInput]) -> Vec<FieldError> {
    let mut errors = Vec::new();

    for (idx, item) in items.iter().enumerate() {
        if item.quantity < 1 {
            errors.push(FieldError::new(
                format!("items[{idx}].quantity"),
                "must be at least 1",
            ));
        } else if item.quantity > MAX_QUANTITY {
            errors.push(FieldError::new(
                format!("items[{idx}].quantity"),
                format!("must be at most {MAX_QUANTITY}"),
            ));
        }
        if let Some(note) = &item.special_instructions
            && note.len() > MAX_NOTE_LEN
        {
            errors.push(FieldError::new(
                format!("items[{idx}].special_instructions"),
                format!("is too long (max {MAX_NOTE_LEN} characters)"),
            ));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone_accepts_plain_digits() {
        assert_eq!(normalize_phone("9876543210"), Some("9876543210".into()));
    }

    #[test]
    fn test_normalize_phone_strips_separators() {
        assert_eq!(
            normalize_phone("+34 (987) 654-3210"),
            Some("349876543210".into())
        );
    }

    #[test]
    fn test_normalize_phone_rejects_short() {
        assert_eq!(normalize_phone("123"), None);
        assert_eq!(normalize_phone("123456789"), None);
    }

    #[test]
    fn test_normalize_phone_rejects_leading_zero() {
        assert_eq!(normalize_phone("0876543210"), None);
    }

    #[test]
    fn test_normalize_phone_rejects_letters() {
        assert_eq!(normalize_phone("98765abc10"), None);
    }

    #[test]
    fn test_normalize_phone_rejects_too_long() {
        assert_eq!(normalize_phone("1234567890123456"), None);
    }

    fn customer(name: &str, phone: Option<&str>, email: Option<&str>) -> CustomerInfo {
        CustomerInfo {
            name: name.to_string(),
            phone: phone.map(String::from),
            email: email.map(String::from),
        }
    }

    #[test]
    fn test_validate_customer_ok() {
        let errors = validate_customer(&customer("Ana", Some("9876543210"), Some("a@b.com")));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_validate_customer_short_name() {
        let errors = validate_customer(&customer("A", None, None));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "customer.name");
    }

    #[test]
    fn test_validate_customer_collects_all_failures() {
        let errors = validate_customer(&customer("A", Some("123"), Some("not-an-email")));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_validate_customer_optional_fields_absent() {
        let errors = validate_customer(&customer("Ana", None, None));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_validate_items_quantity_bounds() {
        let items = vec![
            OrderItemInput {
                menu_item_id: 1,
                quantity: 0,
                special_instructions: None,
            },
            OrderItemInput {
                menu_item_id: 2,
                quantity: 1000,
                special_instructions: None,
            },
        ];
        let errors = validate_items(&items);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "items[0].quantity");
        assert_eq!(errors[1].field, "items[1].quantity");
    }
}
