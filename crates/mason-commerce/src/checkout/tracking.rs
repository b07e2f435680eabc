//! Order-tracking form validation.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Route that shows a tracked order.
pub const ORDER_STATUS_PATH: &str = "/order-status";

/// Fields on the tracking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackingField {
    OrderNumber,
    Email,
}

impl TrackingField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackingField::OrderNumber => "orderNumber",
            TrackingField::Email => "email",
        }
    }
}

/// An inline validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: TrackingField,
    pub message: &'static str,
}

/// Raw form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackOrderForm {
    pub order_number: String,
    pub email: String,
}

/// A validated tracking request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackingTarget {
    #[serde(rename = "orderNumber")]
    pub order_number: String,
    pub email: String,
}

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex"))
}

impl TrackOrderForm {
    pub fn new(order_number: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            order_number: order_number.into(),
            email: email.into(),
        }
    }

    /// Validate both fields, collecting every error.
    pub fn validate(&self) -> Result<TrackingTarget, Vec<FieldError>> {
        let order_number = self.order_number.trim();
        let email = self.email.trim();
        let mut errors = Vec::new();

        if order_number.is_empty() {
            errors.push(FieldError {
                field: TrackingField::OrderNumber,
                message: "Please enter your order number",
            });
        }

        if email.is_empty() {
            errors.push(FieldError {
                field: TrackingField::Email,
                message: "Please enter your email address",
            });
        } else if !email_regex().is_match(email) {
            errors.push(FieldError {
                field: TrackingField::Email,
                message: "Please enter a valid email address",
            });
        }

        if errors.is_empty() {
            Ok(TrackingTarget {
                order_number: order_number.to_string(),
                email: email.to_string(),
            })
        } else {
            Err(errors)
        }
    }
}

impl TrackingTarget {
    /// Order-status path with both values URL-encoded.
    pub fn path(&self) -> String {
        // Two plain string fields always serialize.
        let query = serde_urlencoded::to_string(self).unwrap_or_default();
        format!("{}?{}", ORDER_STATUS_PATH, query)
    }
}

/// First error message for a field, if any.
pub fn error_for(errors: &[FieldError], field: TrackingField) -> Option<&'static str> {
    errors.iter().find(|e| e.field == field).map(|e| e.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_form_builds_encoded_path() {
        let target = TrackOrderForm::new(" MSN-1042 ", "jo.doe+tiles@example.com")
            .validate()
            .unwrap();
        assert_eq!(target.order_number, "MSN-1042");
        assert_eq!(
            target.path(),
            "/order-status?orderNumber=MSN-1042&email=jo.doe%2Btiles%40example.com"
        );
    }

    #[test]
    fn test_path_encodes_reserved_characters() {
        let target = TrackOrderForm::new("A&B #7", "a@b.co").validate().unwrap();
        assert_eq!(
            target.path(),
            "/order-status?orderNumber=A%26B+%237&email=a%40b.co"
        );
    }

    #[test]
    fn test_empty_fields_are_rejected() {
        let errors = TrackOrderForm::new("", "   ").validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            error_for(&errors, TrackingField::OrderNumber),
            Some("Please enter your order number")
        );
        assert_eq!(
            error_for(&errors, TrackingField::Email),
            Some("Please enter your email address")
        );
    }

    #[test]
    fn test_malformed_emails_are_rejected() {
        for email in ["plainaddress", "no-at.example.com", "two@@example.com", "a@b", "a b@c.d"] {
            let errors = TrackOrderForm::new("MSN-1", email).validate().unwrap_err();
            assert_eq!(errors.len(), 1, "{email} should be rejected");
            assert_eq!(errors[0].field, TrackingField::Email);
        }
    }

    #[test]
    fn test_field_names() {
        assert_eq!(TrackingField::OrderNumber.as_str(), "orderNumber");
        assert_eq!(TrackingField::Email.as_str(), "email");
    }
}
