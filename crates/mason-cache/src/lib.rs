//! Typed client-side storage for the Mason storefront.
//!
//! Wraps a string key-value [`Store`] (browser `localStorage`, or memory in
//! tests) with automatic JSON serialization, and builds the last-order
//! fallback cache on top of it.
//!
//! # Example
//!
//! ```rust,ignore
//! use mason_cache::{Cache, LocalStore};
//!
//! let cache = Cache::new(LocalStore::open()?);
//!
//! // Store a value
//! cache.set("lastOrder", &order)?;
//!
//! // Retrieve a value
//! let order: Option<OrderSummary> = cache.get("lastOrder")?;
//!
//! // Delete a value
//! cache.delete("lastOrder")?;
//! ```

mod error;
mod kv;
mod order_fallback;
mod store;

pub use error::CacheError;
pub use kv::Cache;
pub use order_fallback::{
    auth_token, CachedOrder, Freshness, OrderFallback, AUTH_TOKEN_KEY, LAST_ORDER_KEY,
};
pub use store::{MemoryStore, Store};

#[cfg(feature = "browser")]
pub use store::LocalStore;

