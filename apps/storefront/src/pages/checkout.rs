use super::current_query;
use crate::app::AppContext;
use crate::components::{SeoHead, Toast};
use crate::services;
use chrono::Utc;
use leptos::prelude::*;
use mason_commerce::{OrderId, OrderSummary, PaymentReturnParams};
use mason_seo::PageMeta;

/// The order to pay for: the cached one when it is the same order, else a
/// bare summary carrying the requested id.
fn pending_order(order_id: Option<&str>, cached: Option<OrderSummary>) -> Option<OrderSummary> {
    match (order_id, cached) {
        (Some(id), Some(order)) if order.order_id().map(OrderId::as_str) == Some(id) => Some(order),
        (Some(id), _) => Some(OrderSummary {
            id: Some(OrderId::from(id)),
            ..Default::default()
        }),
        (None, cached) => cached,
    }
}

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let params = PaymentReturnParams::from_query(&current_query());
    let cached = services::order_fallback(&ctx).recall(Utc::now());
    let pending = pending_order(params.order_id.as_deref(), cached);
    let handed_off = RwSignal::new(false);

    let heading = match pending.as_ref().and_then(|o| o.display_number()) {
        Some(number) => format!("Checkout for order {}", number),
        None => "Checkout".to_string(),
    };
    let order_id = pending
        .as_ref()
        .and_then(|o| o.order_id())
        .map(|id| id.to_string());
    let has_order = pending.is_some();

    let pay = move |_| {
        if let Some(order) = &pending {
            services::remember_pending_order(&ctx, order);
        }
        handed_off.set(true);
    };

    view! {
        <SeoHead meta=PageMeta::new().title("Checkout").no_index(true)/>
        <section class="status-card">
            <h1>{heading}</h1>
            {match order_id {
                Some(id) => view! { <p>"Retrying payment for order " <code>{id}</code></p> }.into_any(),
                None => view! { <p>"Your cart is ready for payment."</p> }.into_any(),
            }}
            <div class="actions">
                <button class="btn" disabled=!has_order on:click=pay>"Continue to payment"</button>
                <a class="btn btn--ghost" href="/">"Keep shopping"</a>
            </div>
        </section>
        <Toast visible=handed_off message="Redirecting to secure payment"/>
    }
}
