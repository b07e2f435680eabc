//! Settles a payment return into a [`PaymentStatus`].

use chrono::{DateTime, Utc};
use mason_cache::{auth_token, OrderFallback, Store};
use mason_commerce::{OrderId, PaymentReturnParams, PaymentStatus};
use mason_data::{HttpTransport, PaymentsClient};

/// Verify a returning checkout session.
///
/// Makes at most one verification call. Without a session id, or when the
/// call fails or is rejected, the result is a failure that carries whatever
/// order context the response or the cached last order can provide.
pub async fn resolve_payment_status<T, S>(
    params: &PaymentReturnParams,
    payments: &PaymentsClient<T>,
    fallback: &OrderFallback<S>,
    now: DateTime<Utc>,
) -> PaymentStatus
where
    T: HttpTransport,
    S: Store,
{
    let order_id = params.order_id.as_deref();

    let Some(session_id) = params.session_id.as_deref() else {
        tracing::info!(order_id = order_id.unwrap_or("-"), "payment returned without a session");
        let cached = fallback.recall(now);
        return PaymentStatus::failed(params.error.clone(), cached.as_ref(), order_id);
    };

    let token = auth_token(fallback.store());
    let order_ref = order_id.map(OrderId::from);

    match payments.verify(session_id, order_ref.as_ref(), token.as_deref()).await {
        Ok(resp) if resp.success => {
            tracing::info!(session_id, "payment verified");
            PaymentStatus::Succeeded {
                message: resp.message.clone(),
                order: resp.into_order(),
            }
        }
        Ok(resp) => {
            tracing::warn!(
                session_id,
                message = resp.message.as_deref().unwrap_or("-"),
                "payment not confirmed"
            );
            let message = resp.message.clone().or_else(|| params.error.clone());
            match resp.into_order() {
                Some(order) => PaymentStatus::failed(message, Some(&order), order_id),
                None => {
                    let cached = fallback.recall(now);
                    PaymentStatus::failed(message, cached.as_ref(), order_id)
                }
            }
        }
        Err(e) => {
            tracing::error!(session_id, error = %e, "payment verification failed");
            let cached = fallback.recall(now);
            PaymentStatus::failed(params.error.clone(), cached.as_ref(), order_id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use futures::executor::block_on;
    use mason_cache::{MemoryStore, AUTH_TOKEN_KEY, LAST_ORDER_KEY};
    use mason_commerce::checkout::DEFAULT_FAILURE_MESSAGE;
    use mason_data::{FetchError, RequestBuilder, Response};
    use serde_json::json;
    use std::cell::RefCell;
    use std::time::Duration;

    const DAY: Duration = Duration::from_secs(24 * 3600);

    /// Answers every request the same way and records them.
    struct Canned {
        reply: fn() -> Result<Response, FetchError>,
        seen: RefCell<Vec<RequestBuilder>>,
    }

    impl Canned {
        fn new(reply: fn() -> Result<Response, FetchError>) -> Self {
            Self {
                reply,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for Canned {
        async fn execute(&self, request: RequestBuilder) -> Result<Response, FetchError> {
            self.seen.borrow_mut().push(request);
            (self.reply)()
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap()
    }

    fn run(
        query: &str,
        transport: &Canned,
        store: &MemoryStore,
    ) -> PaymentStatus {
        let params = PaymentReturnParams::from_query(query);
        let payments = PaymentsClient::new("https://api.mason.store", transport);
        let fallback = OrderFallback::new(store, DAY);
        block_on(resolve_payment_status(&params, &payments, &fallback, now()))
    }

    fn cached_order_store() -> MemoryStore {
        MemoryStore::with_entries([
            (LAST_ORDER_KEY, r#"{"_id":"665f","orderNumber":"MSN-1042"}"#),
            (AUTH_TOKEN_KEY, "tok-123"),
        ])
    }

    #[test]
    fn test_verified_payment_succeeds() {
        let transport = Canned::new(|| {
            Ok(Response::from_json(
                200,
                &json!({"success": true, "data": {"order": {"_id": "665f", "orderNumber": "MSN-1042"}}}),
            ))
        });
        let store = cached_order_store();

        let status = run("?session_id=cs_1&order_id=665f", &transport, &store);

        match status {
            PaymentStatus::Succeeded { order, .. } => {
                assert_eq!(order.unwrap().display_number(), Some("MSN-1042"));
            }
            other => panic!("expected success, got {other:?}"),
        }
        let seen = transport.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].header_value("Authorization"), Some("Bearer tok-123"));
    }

    #[test]
    fn test_missing_session_uses_cached_order_without_calling() {
        let transport = Canned::new(|| panic!("no request expected"));
        let store = cached_order_store();

        let status = run("?error=Card%20declined", &transport, &store);

        assert_eq!(
            status,
            PaymentStatus::Failed {
                order_number: Some("MSN-1042".into()),
                order_id: Some(OrderId::new("665f")),
                message: "Card declined".into(),
            }
        );
        assert!(transport.seen.borrow().is_empty());
    }

    #[test]
    fn test_network_error_falls_back_to_cache() {
        let transport = Canned::new(|| Err(FetchError::RequestError("offline".into())));
        let store = cached_order_store();

        match run("?session_id=cs_1", &transport, &store) {
            PaymentStatus::Failed {
                order_number,
                message,
                ..
            } => {
                assert_eq!(order_number.as_deref(), Some("MSN-1042"));
                assert_eq!(message, DEFAULT_FAILURE_MESSAGE);
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_corrupt_cache_gives_no_order_number() {
        let transport = Canned::new(|| Err(FetchError::RequestError("offline".into())));
        let store = MemoryStore::with_entries([(LAST_ORDER_KEY, "{not json")]);

        match run("?session_id=cs_1", &transport, &store) {
            PaymentStatus::Failed {
                order_number,
                order_id,
                ..
            } => {
                assert_eq!(order_number, None);
                assert_eq!(order_id, None);
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_rejected_payment_prefers_response_order() {
        let transport = Canned::new(|| {
            Ok(Response::from_json(
                200,
                &json!({"success": false, "message": "Insufficient funds", "data": {"order": {"_id": "77aa", "orderNumber": "MSN-2001"}}}),
            ))
        });
        let store = cached_order_store();

        assert_eq!(
            run("?session_id=cs_1", &transport, &store),
            PaymentStatus::Failed {
                order_number: Some("MSN-2001".into()),
                order_id: Some(OrderId::new("77aa")),
                message: "Insufficient funds".into(),
            }
        );
    }

    #[test]
    fn test_rejected_payment_without_order_uses_cache() {
        let transport = Canned::new(|| Ok(Response::from_json(200, &json!({"success": false}))));
        let store = cached_order_store();

        match run("?session_id=cs_1&orderId=665f", &transport, &store) {
            PaymentStatus::Failed { order_number, .. } => {
                assert_eq!(order_number.as_deref(), Some("MSN-1042"))
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_stale_cache_is_not_shown() {
        let transport = Canned::new(|| Err(FetchError::RequestError("offline".into())));
        let store = MemoryStore::with_entries([(
            LAST_ORDER_KEY,
            r#"{"_id":"665f","orderNumber":"MSN-1042","savedAt":"2026-10-10T12:00:00Z"}"#,
        )]);

        match run("?session_id=cs_1&order_id=665f", &transport, &store) {
            PaymentStatus::Failed {
                order_number,
                order_id,
                ..
            } => {
                assert_eq!(order_number, None);
                assert_eq!(order_id, Some(OrderId::new("665f")));
            }
            other => panic!("expected failure, got {other:?}"),
        }
        assert_eq!(store.get(LAST_ORDER_KEY).unwrap(), None);
    }

    #[test]
    fn test_no_token_sends_no_header() {
        let transport = Canned::new(|| Ok(Response::from_json(200, &json!({"success": true}))));
        let store = MemoryStore::new();

        assert!(run("?session_id=cs_1", &transport, &store).is_success());
        assert_eq!(transport.seen.borrow()[0].header_value("Authorization"), None);
    }
}
