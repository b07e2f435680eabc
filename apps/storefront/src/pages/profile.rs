use crate::app::AppContext;
use crate::components::SeoHead;
use crate::services;
use chrono::Utc;
use leptos::prelude::*;
use mason_cache::{CachedOrder, Freshness};
use mason_commerce::checkout::FailureAction;
use mason_seo::PageMeta;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let last = services::order_fallback(&ctx)
        .inspect(Utc::now())
        .filter(CachedOrder::is_usable);

    let orders = match last {
        Some(cached) => {
            let number = cached
                .order
                .display_number()
                .unwrap_or("Pending")
                .to_string();
            let saved = match (cached.freshness, cached.order.saved_at) {
                (Freshness::Fresh, Some(at)) => format!("Saved {}", at.format("%b %e, %Y %H:%M UTC")),
                _ => "Saved earlier".to_string(),
            };
            let retry = cached
                .order
                .order_id()
                .map(|id| FailureAction::RetryPayment.target(Some(id)));
            view! {
                <ul class="order-list">
                    <li>
                        <strong>{number}</strong>
                        <span class="small">{saved}</span>
                        {retry.map(|href| view! { <a class="btn btn--ghost" href=href>"Pay now"</a> })}
                    </li>
                </ul>
            }
            .into_any()
        }
        None => view! { <p>"You have no recent orders."</p> }.into_any(),
    };

    view! {
        <SeoHead meta=PageMeta::new().title("My orders").no_index(true)/>
        <h1>"My orders"</h1>
        {orders}
        <a class="btn" href="/track-order">"Track an order"</a>
    }
}
