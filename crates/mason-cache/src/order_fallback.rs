//! Last-order fallback cache.
//!
//! A checkout step leaves the pending order under [`LAST_ORDER_KEY`]. The
//! payment pages read it back when live verification is unavailable. Entries
//! carry a `savedAt` stamp so an old order is not shown as the current one.

use crate::{Cache, CacheError, Store};
use chrono::{DateTime, Utc};
use mason_commerce::OrderSummary;
use std::time::Duration;

/// Storage key of the cached order.
pub const LAST_ORDER_KEY: &str = "lastOrder";
/// Storage key of the bearer credential.
pub const AUTH_TOKEN_KEY: &str = "token";

/// How current a cached order is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Stamped within the allowed age.
    Fresh,
    /// No stamp; written by an older checkout step.
    Undated,
    /// Stamped longer ago than the allowed age.
    Stale,
}

/// A cached order with its freshness.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedOrder {
    pub order: OrderSummary,
    pub freshness: Freshness,
}

impl CachedOrder {
    /// Whether the order may be shown.
    pub fn is_usable(&self) -> bool {
        self.freshness != Freshness::Stale
    }
}

/// Reads and writes the last known order.
pub struct OrderFallback<S> {
    cache: Cache<S>,
    max_age: Duration,
}

impl<S: Store> OrderFallback<S> {
    /// Wrap a store, treating orders older than `max_age` as stale.
    pub fn new(store: S, max_age: Duration) -> Self {
        Self {
            cache: Cache::new(store),
            max_age,
        }
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        self.cache.store()
    }

    /// Read and classify the cached order.
    ///
    /// Unreadable entries are logged and treated as absent.
    pub fn inspect(&self, now: DateTime<Utc>) -> Option<CachedOrder> {
        let order: OrderSummary = match self.cache.get(LAST_ORDER_KEY) {
            Ok(Some(order)) => order,
            Ok(None) => return None,
            Err(e) => {
                tracing::debug!(error = %e, key = LAST_ORDER_KEY, "ignoring unreadable cached order");
                return None;
            }
        };

        let freshness = match order.saved_at {
            None => Freshness::Undated,
            Some(saved_at) => match now.signed_duration_since(saved_at).to_std() {
                Ok(age) if age > self.max_age => Freshness::Stale,
                // Stamps in the future come from clock skew, not age.
                _ => Freshness::Fresh,
            },
        };

        Some(CachedOrder { order, freshness })
    }

    /// The cached order, if present and not stale.
    ///
    /// A stale entry is removed so it is not considered again.
    pub fn recall(&self, now: DateTime<Utc>) -> Option<OrderSummary> {
        let cached = self.inspect(now)?;
        match cached.freshness {
            Freshness::Fresh => Some(cached.order),
            Freshness::Undated => {
                tracing::info!(
                    order_number = cached.order.display_number().unwrap_or("-"),
                    "using undated cached order"
                );
                Some(cached.order)
            }
            Freshness::Stale => {
                tracing::info!(
                    saved_at = ?cached.order.saved_at,
                    max_age_secs = self.max_age.as_secs(),
                    "discarding stale cached order"
                );
                if let Err(e) = self.forget() {
                    tracing::warn!(error = %e, "failed to remove stale cached order");
                }
                None
            }
        }
    }

    /// Cache an order, stamping it with `now`.
    pub fn remember(&self, order: &OrderSummary, now: DateTime<Utc>) -> Result<(), CacheError> {
        let stamped = order.clone().with_saved_at(now);
        self.cache.set(LAST_ORDER_KEY, &stamped)
    }

    /// Remove the cached order.
    pub fn forget(&self) -> Result<(), CacheError> {
        self.cache.delete(LAST_ORDER_KEY)
    }
}

/// The bearer credential, if one is stored and non-blank.
pub fn auth_token<S: Store>(store: &S) -> Option<String> {
    match store.get(AUTH_TOKEN_KEY) {
        Ok(token) => token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty()),
        Err(e) => {
            tracing::warn!(error = %e, "could not read auth token");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use chrono::TimeZone;

    const DAY: Duration = Duration::from_secs(24 * 60 * 60);

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_undated_order_is_used() {
        let store = MemoryStore::with_entries([(
            LAST_ORDER_KEY,
            r#"{"_id":"665f","orderNumber":"MSN-1042"}"#,
        )]);
        let fallback = OrderFallback::new(&store, DAY);

        let cached = fallback.inspect(now()).unwrap();
        assert_eq!(cached.freshness, Freshness::Undated);
        assert!(cached.is_usable());

        let order = fallback.recall(now()).unwrap();
        assert_eq!(order.display_number(), Some("MSN-1042"));
    }

    #[test]
    fn test_remember_then_recall() {
        let store = MemoryStore::new();
        let fallback = OrderFallback::new(&store, DAY);
        fallback
            .remember(&OrderSummary::new("a1", "MSN-7"), now())
            .unwrap();

        let cached = fallback.inspect(now() + chrono::Duration::hours(3)).unwrap();
        assert_eq!(cached.freshness, Freshness::Fresh);
        assert_eq!(cached.order.saved_at, Some(now()));
    }

    #[test]
    fn test_stale_order_is_discarded() {
        let store = MemoryStore::new();
        let fallback = OrderFallback::new(&store, DAY);
        fallback
            .remember(&OrderSummary::new("a1", "MSN-7"), now())
            .unwrap();

        let later = now() + chrono::Duration::days(2);
        assert_eq!(fallback.inspect(later).unwrap().freshness, Freshness::Stale);
        assert!(fallback.recall(later).is_none());
        assert_eq!(store.get(LAST_ORDER_KEY).unwrap(), None);
    }

    #[test]
    fn test_future_stamp_is_fresh() {
        let store = MemoryStore::new();
        let fallback = OrderFallback::new(&store, DAY);
        fallback
            .remember(&OrderSummary::new("a1", "MSN-7"), now() + chrono::Duration::minutes(5))
            .unwrap();
        assert_eq!(fallback.inspect(now()).unwrap().freshness, Freshness::Fresh);
    }

    #[test]
    fn test_corrupt_blob_is_ignored() {
        let store = MemoryStore::with_entries([(LAST_ORDER_KEY, "{\"orderNumber\": ")]);
        let fallback = OrderFallback::new(&store, DAY);
        assert!(fallback.inspect(now()).is_none());
        assert!(fallback.recall(now()).is_none());
    }

    #[test]
    fn test_missing_order() {
        let store = MemoryStore::new();
        assert!(OrderFallback::new(&store, DAY).recall(now()).is_none());
    }

    #[test]
    fn test_auth_token() {
        assert_eq!(auth_token(&MemoryStore::new()), None);
        assert_eq!(
            auth_token(&MemoryStore::with_entries([(AUTH_TOKEN_KEY, "  ")])),
            None
        );
        assert_eq!(
            auth_token(&MemoryStore::with_entries([(AUTH_TOKEN_KEY, "eyJhbGci")])).as_deref(),
            Some("eyJhbGci")
        );
    }
}
