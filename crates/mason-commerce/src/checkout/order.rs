//! Order summary type.
//!
//! The storefront never owns orders. It only sees the shape the backend
//! returns from payment verification and the copy a checkout step leaves
//! in local storage, so everything beyond the identifiers stays opaque.

use crate::ids::OrderId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Loosely-typed order as seen by the storefront.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OrderSummary {
    /// Backend order identifier.
    #[serde(
        rename = "_id",
        alias = "id",
        alias = "orderId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<OrderId>,
    /// Human-readable order number.
    #[serde(
        rename = "orderNumber",
        alias = "order_number",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub order_number: Option<String>,
    /// When a checkout step cached this order locally.
    #[serde(
        rename = "savedAt",
        alias = "saved_at",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub saved_at: Option<DateTime<Utc>>,
    /// All other fields, untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl OrderSummary {
    /// Create a summary with an id and order number.
    pub fn new(id: impl Into<OrderId>, order_number: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            order_number: Some(order_number.into()),
            ..Default::default()
        }
    }

    /// Stamp the time this summary was cached.
    pub fn with_saved_at(mut self, saved_at: DateTime<Utc>) -> Self {
        self.saved_at = Some(saved_at);
        self
    }

    /// Order number to show customers, ignoring blanks.
    pub fn display_number(&self) -> Option<&str> {
        self.order_number
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Order id, ignoring blanks.
    pub fn order_id(&self) -> Option<&OrderId> {
        self.id.as_ref().filter(|id| !id.is_blank())
    }

    /// Look up an opaque field.
    pub fn field(&self, key: &str) -> Option<&serde_json::Value> {
        self.extra.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_deserialize_backend_shape() {
        let order: OrderSummary = serde_json::from_str(
            r#"{"_id":"665f","orderNumber":"MSN-1042","total":129.5,"status":"pending"}"#,
        )
        .unwrap();

        assert_eq!(order.order_id().unwrap().as_str(), "665f");
        assert_eq!(order.display_number(), Some("MSN-1042"));
        assert_eq!(order.field("status"), Some(&serde_json::json!("pending")));
        assert!(order.saved_at.is_none());
    }

    #[test]
    fn test_deserialize_aliases() {
        let order: OrderSummary =
            serde_json::from_str(r#"{"orderId":"a1","order_number":"N-7"}"#).unwrap();
        assert_eq!(order.order_id().unwrap().as_str(), "a1");
        assert_eq!(order.display_number(), Some("N-7"));
    }

    #[test]
    fn test_blank_number_is_not_displayed() {
        let order = OrderSummary {
            order_number: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(order.display_number().is_none());
    }

    #[test]
    fn test_serialize_keeps_extra_fields() {
        let saved_at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let mut order = OrderSummary::new("b2", "MSN-2001").with_saved_at(saved_at);
        order
            .extra
            .insert("items".to_string(), serde_json::json!([{"sku": "PNT-01"}]));

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["_id"], "b2");
        assert_eq!(value["orderNumber"], "MSN-2001");
        assert_eq!(value["savedAt"], "2026-03-01T12:00:00Z");
        assert_eq!(value["items"][0]["sku"], "PNT-01");
    }
}
