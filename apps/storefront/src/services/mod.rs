//! Browser-facing services the pages call into.
//!
//! Each helper has a browser implementation behind the `browser` feature and
//! an inert native one, so the crate builds and tests off the browser.

pub mod payment_status;

#[cfg(feature = "browser")]
pub mod dom;

use crate::app::AppContext;
use chrono::Utc;
use mason_cache::{MemoryStore, OrderFallback, Store};
use mason_commerce::{PaymentReturnParams, PaymentStatus};
use mason_data::PaymentsClient;

pub use payment_status::resolve_payment_status;

/// Transport used for API calls in this build.
#[cfg(feature = "browser")]
pub type AppTransport = mason_data::BrowserTransport;

/// Transport used for API calls in this build.
#[cfg(not(feature = "browser"))]
pub type AppTransport = offline::OfflineTransport;

/// Open persistent storage, or memory when it is unavailable.
pub fn open_store() -> Box<dyn Store> {
    #[cfg(feature = "browser")]
    {
        match mason_cache::LocalStore::open() {
            Ok(store) => return Box::new(store),
            Err(e) => tracing::warn!(error = %e, "localStorage unavailable, using memory"),
        }
    }
    Box::new(MemoryStore::new())
}

/// Fallback cache over persistent storage, with the configured max age.
pub fn order_fallback(ctx: &AppContext) -> OrderFallback<Box<dyn Store>> {
    OrderFallback::new(open_store(), ctx.config.orders.cache_max_age())
}

/// Payments API client for the configured backend.
pub fn payments_client(ctx: &AppContext) -> PaymentsClient<AppTransport> {
    PaymentsClient::new(ctx.config.api_base_url(), AppTransport::default())
}

/// Settle a payment return against the configured backend and storage.
pub async fn verify_payment_return(ctx: &AppContext, params: &PaymentReturnParams) -> PaymentStatus {
    let payments = payments_client(ctx);
    let fallback = order_fallback(ctx);
    resolve_payment_status(params, &payments, &fallback, Utc::now()).await
}

/// Remember the order being paid for, so the result pages can show it.
pub fn remember_pending_order(ctx: &AppContext, order: &mason_commerce::OrderSummary) {
    if let Err(e) = order_fallback(ctx).remember(order, Utc::now()) {
        tracing::warn!(error = %e, "could not cache pending order");
    }
}

/// Whether the primary pointer can hover.
///
/// Touch devices report `false`, so hover highlights stay off there.
pub fn can_hover() -> bool {
    #[cfg(feature = "browser")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(hover: hover)").ok().flatten())
            .map(|mq| mq.matches())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "browser"))]
    {
        false
    }
}

#[cfg(not(feature = "browser"))]
mod offline {
    use async_trait::async_trait;
    use mason_data::{FetchError, HttpTransport, RequestBuilder, Response};

    /// Rejects every request; native builds have no network.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct OfflineTransport;

    #[async_trait(?Send)]
    impl HttpTransport for OfflineTransport {
        async fn execute(&self, request: RequestBuilder) -> Result<Response, FetchError> {
            Err(FetchError::RequestError(format!(
                "no network transport for {}",
                request.url()
            )))
        }
    }
}
