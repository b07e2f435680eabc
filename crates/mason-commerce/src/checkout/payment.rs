//! Payment return handling.
//!
//! After the payment provider redirects back, the storefront reads the
//! return parameters, verifies the session, and settles on one of a few
//! result views.

use crate::checkout::OrderSummary;
use crate::ids::OrderId;
use serde::Serialize;

/// Route of the payment success page.
pub const PAYMENT_SUCCESS_PATH: &str = "/payment/success";
/// Route of the payment failure page.
pub const PAYMENT_FAILURE_PATH: &str = "/payment/failure";

const CHECKOUT_PATH: &str = "/checkout";
const PROFILE_PATH: &str = "/profile";
const HOME_PATH: &str = "/";

/// Message shown when the provider gives no reason.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Payment was not completed";

/// Query parameters the payment provider returns with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaymentReturnParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl PaymentReturnParams {
    /// Read parameters from key/value pairs. Later duplicates win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_ref() {
                "session_id" | "sessionId" => params.session_id = non_blank(value.into()),
                "order_id" | "orderId" => params.order_id = non_blank(value.into()),
                "error" => params.error = non_blank(value.into()),
                _ => {}
            }
        }
        params
    }

    /// Read parameters from a query string (leading `?` optional).
    ///
    /// A query that does not decode yields no parameters.
    pub fn from_query(query: &str) -> Self {
        let pairs: Vec<(String, String)> =
            serde_urlencoded::from_str(query.trim_start_matches('?')).unwrap_or_default();
        Self::from_pairs(pairs)
    }

    /// Re-encode as a query string.
    pub fn to_query(&self) -> String {
        serde_urlencoded::to_string(self).unwrap_or_default()
    }

    /// Success page path carrying these parameters.
    pub fn success_path(&self) -> String {
        let query = self.to_query();
        if query.is_empty() {
            PAYMENT_SUCCESS_PATH.to_string()
        } else {
            format!("{}?{}", PAYMENT_SUCCESS_PATH, query)
        }
    }
}

/// Outcome of a payment status page.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentStatus {
    /// Verification in flight.
    Loading,
    /// Payment confirmed.
    Succeeded {
        order: Option<OrderSummary>,
        message: Option<String>,
    },
    /// Payment failed, was cancelled, or could not be verified.
    Failed {
        order_number: Option<String>,
        order_id: Option<OrderId>,
        message: String,
    },
}

impl PaymentStatus {
    /// Build a failure, taking order context from `order` when present
    /// and falling back to `order_id` for the identifier.
    pub fn failed(
        message: Option<String>,
        order: Option<&OrderSummary>,
        order_id: Option<&str>,
    ) -> Self {
        let message = message
            .and_then(non_blank)
            .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
        PaymentStatus::Failed {
            order_number: order.and_then(|o| o.display_number()).map(str::to_string),
            order_id: order
                .and_then(|o| o.order_id().cloned())
                .or_else(|| order_id.and_then(|id| OrderId::parse(id).ok())),
            message,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PaymentStatus::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PaymentStatus::Succeeded { .. })
    }
}

/// Actions offered on the failure view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureAction {
    RetryPayment,
    ViewOrders,
    GoHome,
}

impl FailureAction {
    pub const ALL: [FailureAction; 3] = [
        FailureAction::RetryPayment,
        FailureAction::ViewOrders,
        FailureAction::GoHome,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FailureAction::RetryPayment => "Retry payment",
            FailureAction::ViewOrders => "View my orders",
            FailureAction::GoHome => "Back to home",
        }
    }

    /// Navigation target. Retrying carries the order id when known.
    pub fn target(&self, order_id: Option<&OrderId>) -> String {
        match self {
            FailureAction::RetryPayment => match order_id {
                Some(id) => {
                    let query = serde_urlencoded::to_string(&[("orderId", id.as_str())])
                        .unwrap_or_default();
                    format!("{}?{}", CHECKOUT_PATH, query)
                }
                None => CHECKOUT_PATH.to_string(),
            },
            FailureAction::ViewOrders => PROFILE_PATH.to_string(),
            FailureAction::GoHome => HOME_PATH.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_query_reads_all_params() {
        let params =
            PaymentReturnParams::from_query("?session_id=cs_test_1&order_id=665f&error=card%20declined");
        assert_eq!(params.session_id.as_deref(), Some("cs_test_1"));
        assert_eq!(params.order_id.as_deref(), Some("665f"));
        assert_eq!(params.error.as_deref(), Some("card declined"));
    }

    #[test]
    fn test_from_query_accepts_camel_case_and_ignores_blanks() {
        let params = PaymentReturnParams::from_query("sessionId=&orderId=a1&utm_source=mail");
        assert!(params.session_id.is_none());
        assert_eq!(params.order_id.as_deref(), Some("a1"));
        assert!(params.error.is_none());
    }

    #[test]
    fn test_success_path_round_trip() {
        let params = PaymentReturnParams::from_pairs([("session_id", "cs 1"), ("order_id", "x")]);
        assert_eq!(params.success_path(), "/payment/success?session_id=cs+1&order_id=x");
        assert_eq!(PaymentReturnParams::default().success_path(), "/payment/success");
    }

    #[test]
    fn test_failed_prefers_order_context() {
        let order = OrderSummary::new("665f", "MSN-1042");
        let status = PaymentStatus::failed(None, Some(&order), Some("other"));
        assert_eq!(
            status,
            PaymentStatus::Failed {
                order_number: Some("MSN-1042".to_string()),
                order_id: Some(OrderId::new("665f")),
                message: DEFAULT_FAILURE_MESSAGE.to_string(),
            }
        );
    }

    #[test]
    fn test_failed_ignores_blank_param_id() {
        match PaymentStatus::failed(None, None, Some("  ")) {
            PaymentStatus::Failed { order_id, .. } => assert!(order_id.is_none()),
            other => panic!("unexpected status {other:?}"),
        }
    }

    #[test]
    fn test_failed_without_order_uses_param_id() {
        let status = PaymentStatus::failed(Some("Card declined".into()), None, Some("a1"));
        match status {
            PaymentStatus::Failed {
                order_number,
                order_id,
                message,
            } => {
                assert!(order_number.is_none());
                assert_eq!(order_id, Some(OrderId::new("a1")));
                assert_eq!(message, "Card declined");
            }
            other => panic!("unexpected status {other:?}"),
        }
    }

    #[test]
    fn test_failure_action_targets() {
        let id = OrderId::new("665f");
        assert_eq!(
            FailureAction::RetryPayment.target(Some(&id)),
            "/checkout?orderId=665f"
        );
        assert_eq!(FailureAction::RetryPayment.target(None), "/checkout");
        assert_eq!(FailureAction::ViewOrders.target(Some(&id)), "/profile");
        assert_eq!(FailureAction::GoHome.target(None), "/");
    }

    #[test]
    fn test_status_predicates() {
        assert!(PaymentStatus::Loading.is_loading());
        assert!(PaymentStatus::Succeeded {
            order: None,
            message: None
        }
        .is_success());
    }
}
